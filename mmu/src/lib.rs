pub mod address;
pub mod page_table;
pub mod stats;
pub mod tlb;
pub mod translator;

pub use address::VirtualAddress;
pub use stats::TranslationStats;
pub use translator::{Translation, Translator, TranslatorError};
