use backing_store::{BackingStore, BackingStoreError};
use log::{debug, info};
use memory::{MemoryError, PhysicalMemory};

use crate::address::{self, VirtualAddress};
use crate::page_table::PageTable;
use crate::stats::TranslationStats;
use crate::tlb::Tlb;

/// Outcome of resolving one logical address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub virtual_address: u16,
    pub physical_address: u16,
    pub value: i8,
}

#[derive(Debug)]
pub enum TranslatorError {
    BackingStore(BackingStoreError),
    Memory(MemoryError),
}

impl From<BackingStoreError> for TranslatorError {
    fn from(err: BackingStoreError) -> Self {
        TranslatorError::BackingStore(err)
    }
}

impl From<MemoryError> for TranslatorError {
    fn from(err: MemoryError) -> Self {
        TranslatorError::Memory(err)
    }
}

/// Drives one address at a time through the TLB, the page table, and the
/// fault path, and accumulates the run statistics. Owns every piece of
/// translation state; nothing is shared or global.
pub struct Translator<
    const PAGE_SIZE: usize,
    const MEMORY_CAPACITY: usize,
    const STORE_CAPACITY: usize,
    const TLB_CAPACITY: usize,
> {
    tlb: Tlb<TLB_CAPACITY>,
    page_table: PageTable,
    memory: PhysicalMemory<PAGE_SIZE, MEMORY_CAPACITY>,
    store: BackingStore<PAGE_SIZE, STORE_CAPACITY>,
    stats: TranslationStats,
}

impl<
        const PAGE_SIZE: usize,
        const MEMORY_CAPACITY: usize,
        const STORE_CAPACITY: usize,
        const TLB_CAPACITY: usize,
    > Translator<PAGE_SIZE, MEMORY_CAPACITY, STORE_CAPACITY, TLB_CAPACITY>
{
    pub fn init(
        memory: PhysicalMemory<PAGE_SIZE, MEMORY_CAPACITY>,
        store: BackingStore<PAGE_SIZE, STORE_CAPACITY>,
    ) -> Self {
        Self {
            tlb: Tlb::init(),
            page_table: PageTable::init(STORE_CAPACITY / PAGE_SIZE),
            memory,
            store,
            stats: TranslationStats::new(),
        }
    }

    pub fn translate(&mut self, raw: u16) -> Result<Translation, TranslatorError> {
        let address = VirtualAddress::from_raw(raw);
        self.stats.translated();

        let frame = match self.tlb.lookup(address.page) {
            Some(frame) => {
                debug!("TLB hit: page[{}] -> frame[{}]", address.page, frame);
                self.stats.hit();
                frame
            }
            None => {
                let frame = match self.page_table.get_frame(address.page) {
                    Some(frame) => frame,
                    None => self.fault_in(address.page)?,
                };
                // The TLB is refreshed on every miss, whether or not the
                // page table also missed.
                self.tlb.insert(address.page, frame);
                frame
            }
        };

        let physical_address = address::physical_address(frame, address.offset);
        let value = self.memory.read_i8(frame, address.offset as usize)?;
        Ok(Translation {
            virtual_address: address.raw,
            physical_address,
            value,
        })
    }

    fn fault_in(&mut self, page: u8) -> Result<u32, TranslatorError> {
        self.stats.fault();
        let frame = self.memory.allocate_frame()?;
        let data = self.store.read_page(page as usize)?;
        self.memory.load_frame(frame, &data)?;
        self.page_table.map_to_frame(page, frame);
        info!("Page fault: page[{}] loaded into frame[{}]", page, frame);
        Ok(frame)
    }

    pub fn stats(&self) -> TranslationStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memory::AllocPolicy;
    use std::fs::remove_file;

    const PAGE_SIZE: usize = 256;
    const CAPACITY: usize = 256 * 256;

    type TestTranslator = Translator<PAGE_SIZE, CAPACITY, CAPACITY, 16>;

    // Byte `o` of page `p` is `p ^ o`, so every page is distinguishable.
    fn create_store(name: &str) -> BackingStore<PAGE_SIZE, CAPACITY> {
        let mut bytes = Vec::with_capacity(CAPACITY);
        for page in 0..CAPACITY / PAGE_SIZE {
            for offset in 0..PAGE_SIZE {
                bytes.push((page ^ offset) as u8);
            }
        }
        std::fs::write(name, &bytes).unwrap();
        BackingStore::open(name).unwrap()
    }

    fn create_translator(name: &str) -> TestTranslator {
        let store = create_store(name);
        let memory = PhysicalMemory::init(AllocPolicy::FailFast);
        Translator::init(memory, store)
    }

    #[test]
    fn first_touch_faults_into_frame_zero() {
        let name = "STORE_first_touch_faults.bin";
        let mut translator = create_translator(name);
        let translation = translator.translate(19986).unwrap();
        assert_eq!(translation.virtual_address, 19986);
        assert_eq!(translation.physical_address, 18);
        assert_eq!(translation.value, (78 ^ 18) as i8);
        let stats = translator.stats();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.faults, 1);
        assert_eq!(stats.hits, 0);
        remove_file(name).unwrap();
    }

    #[test]
    fn repeat_translation_is_a_tlb_hit() {
        let name = "STORE_repeat_is_tlb_hit.bin";
        let mut translator = create_translator(name);
        let first = translator.translate(19986).unwrap();
        let second = translator.translate(19986).unwrap();
        assert_eq!(first, second);
        let stats = translator.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.faults, 1);
        assert_eq!(stats.hits, 1);
        remove_file(name).unwrap();
    }

    #[test]
    fn page_table_backs_up_an_evicted_tlb_entry() {
        let name = "STORE_page_table_backs_up_tlb.bin";
        let mut translator = create_translator(name);
        // 17 distinct pages push page 0 out of the 16-entry TLB.
        for page in 0..17u16 {
            translator.translate(page << 8).unwrap();
        }
        let translation = translator.translate(0).unwrap();
        assert_eq!(translation.physical_address, 0);
        let stats = translator.stats();
        assert_eq!(stats.total, 18);
        assert_eq!(stats.faults, 17);
        assert_eq!(stats.hits, 0);
        // Page 16 is still resident in the TLB window.
        translator.translate(16 << 8).unwrap();
        assert_eq!(translator.stats().hits, 1);
        remove_file(name).unwrap();
    }

    #[test]
    fn same_page_different_offsets_share_a_frame() {
        let name = "STORE_same_page_two_offsets.bin";
        let mut translator = create_translator(name);
        let first = translator.translate(78 << 8).unwrap();
        let second = translator.translate((78 << 8) | 0xFF).unwrap();
        assert_eq!(first.physical_address, 0);
        assert_eq!(second.physical_address, 0xFF);
        assert_eq!(second.value, (78 ^ 0xFF) as u8 as i8);
        let stats = translator.stats();
        assert_eq!(stats.faults, 1);
        assert_eq!(stats.hits, 1);
        remove_file(name).unwrap();
    }
}
