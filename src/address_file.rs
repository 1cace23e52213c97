use std::path::Path;

/// Reads the logical address list: whitespace-separated decimal integers,
/// each masked to the 16-bit address space.
pub fn read_addresses<P: AsRef<Path>>(path: P) -> Result<Vec<u16>, std::io::Error> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_addresses(&content))
}

/// Tokenization stops at the first token that does not parse as an
/// integer; the rest of the stream is treated as end of input rather than
/// skipped over.
pub fn parse_addresses(content: &str) -> Vec<u16> {
    let mut addresses = Vec::new();
    for token in content.split_whitespace() {
        match token.parse::<u64>() {
            Ok(value) => addresses.push((value & 0xFFFF) as u16),
            Err(_) => break,
        }
    }
    addresses
}
