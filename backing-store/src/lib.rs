use std::{
    fs::File,
    io::{Read, Seek, SeekFrom},
    path::Path,
    sync::{Arc, Mutex},
};

use log::info;

#[derive(Debug)]
pub enum BackingStoreError {
    Io(std::io::Error),
    WrongSize { expected: u64, actual: u64 },
    OverCapacity,
}

impl From<std::io::Error> for BackingStoreError {
    fn from(err: std::io::Error) -> Self {
        BackingStoreError::Io(err)
    }
}

/// Read-only page store simulating the disk that pages are faulted in from.
/// The file must be exactly CAPACITY bytes; page `p` occupies the byte range
/// `[p * PAGE_SIZE, (p + 1) * PAGE_SIZE)`.
#[derive(Debug, Clone)]
pub struct BackingStore<const PAGE_SIZE: usize, const CAPACITY: usize> {
    file: Arc<Mutex<File>>,
}

impl<const PAGE_SIZE: usize, const CAPACITY: usize> BackingStore<PAGE_SIZE, CAPACITY> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, BackingStoreError> {
        assert_eq!(
            CAPACITY % PAGE_SIZE,
            0,
            "Capacity must be a multiply of PageSize"
        );
        let file = File::options().read(true).open(path)?;
        let actual = file.metadata()?.len();
        if actual != CAPACITY as u64 {
            return Err(BackingStoreError::WrongSize {
                expected: CAPACITY as u64,
                actual,
            });
        }
        Ok(Self {
            file: Arc::new(Mutex::new(file)),
        })
    }

    pub fn read_page(&self, page_number: usize) -> Result<Box<[u8; PAGE_SIZE]>, BackingStoreError> {
        if page_number >= CAPACITY / PAGE_SIZE {
            return Err(BackingStoreError::OverCapacity);
        }
        let mut file = self.file.lock().unwrap();
        info!("Start reading page[{}]", page_number);
        file.seek(SeekFrom::Start((page_number * PAGE_SIZE) as u64))?;
        let mut buf = Box::new([0; PAGE_SIZE]);
        file.read_exact(&mut *buf)?;
        info!("Done reading page[{}]", page_number);
        Ok(buf)
    }
}
