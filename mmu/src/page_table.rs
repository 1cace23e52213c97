/// Sparse map from logical page number to the physical frame holding that
/// page. Every slot starts unmapped; a mapped slot keeps its frame for the
/// rest of the run since frames are never reclaimed.
pub struct PageTable {
    entries: Vec<Option<u32>>,
}

impl PageTable {
    pub fn init(pages: usize) -> Self {
        let mut entries = Vec::with_capacity(pages);
        for _ in 0..pages {
            entries.push(None);
        }
        Self { entries }
    }

    pub fn get_frame(&self, page: u8) -> Option<u32> {
        self.entries.get(page as usize).copied().flatten()
    }

    pub fn map_to_frame(&mut self, page: u8, frame: u32) {
        self.entries[page as usize] = Some(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::PageTable;

    #[test]
    fn create_mapping() {
        let mut table = PageTable::init(256);
        table.map_to_frame(12, 43);
        table.map_to_frame(4, 45);
        assert_eq!(table.get_frame(12), Some(43));
        assert_eq!(table.get_frame(4), Some(45));
    }

    #[test]
    fn unmapped_page_has_no_frame() {
        let table = PageTable::init(256);
        assert_eq!(table.get_frame(0), None);
        assert_eq!(table.get_frame(255), None);
    }

    #[test]
    fn lookup_past_table_size() {
        let table = PageTable::init(4);
        assert_eq!(table.get_frame(200), None);
    }
}
