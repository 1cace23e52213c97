use log::debug;

/// One logical-page to physical-frame mapping held by the TLB. Entries are
/// never rewritten in place, only displaced by FIFO overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlbEntry {
    pub page: u8,
    pub frame: u32,
}

/// Fixed-capacity translation cache: a ring buffer with a monotonic write
/// cursor, replaced in pure FIFO order. Lookups never promote an entry.
pub struct Tlb<const CAPACITY: usize> {
    entries: Vec<TlbEntry>,
    cursor: usize,
}

impl<const CAPACITY: usize> Tlb<CAPACITY> {
    pub fn init() -> Self {
        Self {
            entries: Vec::with_capacity(CAPACITY),
            cursor: 0,
        }
    }

    /// Scans the live window from the oldest retained entry to the newest
    /// and returns the first match. Stale duplicates can coexist inside the
    /// window, so the scan direction is part of the observable contract.
    pub fn lookup(&self, page: u8) -> Option<u32> {
        let start = self.cursor.saturating_sub(CAPACITY);
        for i in start..self.cursor {
            let entry = &self.entries[i % CAPACITY];
            if entry.page == page {
                return Some(entry.frame);
            }
        }
        None
    }

    pub fn insert(&mut self, page: u8, frame: u32) {
        let entry = TlbEntry { page, frame };
        if self.entries.len() < CAPACITY {
            self.entries.push(entry);
        } else {
            debug!("TLB full, overwriting slot[{}]", self.cursor % CAPACITY);
            self.entries[self.cursor % CAPACITY] = entry;
        }
        self.cursor += 1;
    }
}
