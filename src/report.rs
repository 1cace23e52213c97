use std::io::Write;

use mmu::{Translation, TranslationStats};

pub fn write_translation<W: Write>(out: &mut W, translation: &Translation) -> std::io::Result<()> {
    writeln!(
        out,
        "Virtual address: {} Physical address: {} Value: {}",
        translation.virtual_address, translation.physical_address, translation.value
    )
}

pub fn write_summary<W: Write>(out: &mut W, stats: &TranslationStats) -> std::io::Result<()> {
    writeln!(out, "Number of Translated Addresses = {}", stats.total)?;
    writeln!(out, "Page Faults = {}", stats.faults)?;
    writeln!(out, "Page Fault Rate = {:.3}", stats.fault_rate())?;
    writeln!(out, "TLB Hits = {}", stats.hits)?;
    writeln!(out, "TLB Hit Rate = {:.3}", stats.hit_rate())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_line_format() {
        let translation = Translation {
            virtual_address: 19986,
            physical_address: 18,
            value: -73,
        };
        let mut out = Vec::new();
        write_translation(&mut out, &translation).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Virtual address: 19986 Physical address: 18 Value: -73\n"
        );
    }

    #[test]
    fn summary_format() {
        let stats = TranslationStats {
            total: 1000,
            hits: 54,
            faults: 244,
        };
        let mut out = Vec::new();
        write_summary(&mut out, &stats).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Number of Translated Addresses = 1000\n\
             Page Faults = 244\n\
             Page Fault Rate = 0.244\n\
             TLB Hits = 54\n\
             TLB Hit Rate = 0.054\n"
        );
    }
}
