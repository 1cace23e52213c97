pub mod address_file;
pub mod report;

pub const PAGE_SIZE: usize = 256;
pub const PAGES: usize = 256;
pub const TLB_SIZE: usize = 16;
pub const MEMORY_SIZE: usize = PAGES * PAGE_SIZE;

/// The backing store lives at a fixed path in the working directory.
pub const BACKING_STORE_PATH: &str = "BACKING_STORE.bin";

/// The simulated machine: 256-byte pages, a 64 KiB store, physical memory
/// the same size as the logical address space, and a 16-entry TLB.
pub type VmTranslator = mmu::Translator<PAGE_SIZE, MEMORY_SIZE, MEMORY_SIZE, TLB_SIZE>;
