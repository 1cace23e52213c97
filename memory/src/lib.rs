use log::debug;

#[derive(Debug, PartialEq)]
pub enum MemoryError {
    OutOfFrames,
    OverCapacity,
}

/// What the allocator does once every frame has been handed out.
/// `WrapAround` reuses frames from index zero again without reclaiming
/// their page-table mappings; `FailFast` surfaces `OutOfFrames` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocPolicy {
    WrapAround,
    FailFast,
}

/// Frame-granular physical memory with a bump allocator. The next-frame
/// cursor only ever advances; frames are never reclaimed.
pub struct PhysicalMemory<const FRAME_SIZE: usize, const CAPACITY: usize> {
    buffer: Box<[u8]>,
    next_frame: usize,
    policy: AllocPolicy,
}

impl<const FRAME_SIZE: usize, const CAPACITY: usize> PhysicalMemory<FRAME_SIZE, CAPACITY> {
    pub fn init(policy: AllocPolicy) -> Self {
        assert_eq!(
            CAPACITY % FRAME_SIZE,
            0,
            "Capacity must be a multiply of FrameSize"
        );
        Self {
            buffer: vec![0; CAPACITY].into_boxed_slice(),
            next_frame: 0,
            policy,
        }
    }

    pub fn frame_count() -> usize {
        CAPACITY / FRAME_SIZE
    }

    pub fn allocate_frame(&mut self) -> Result<u32, MemoryError> {
        if self.next_frame >= Self::frame_count() && self.policy == AllocPolicy::FailFast {
            debug!("No free frames");
            return Err(MemoryError::OutOfFrames);
        }
        let frame = self.next_frame % Self::frame_count();
        self.next_frame += 1;
        Ok(frame as u32)
    }

    pub fn load_frame(&mut self, frame: u32, data: &[u8; FRAME_SIZE]) -> Result<(), MemoryError> {
        let start = frame as usize * FRAME_SIZE;
        if start + FRAME_SIZE > CAPACITY {
            return Err(MemoryError::OverCapacity);
        }
        self.buffer[start..start + FRAME_SIZE].copy_from_slice(data);
        Ok(())
    }

    pub fn read_i8(&self, frame: u32, offset: usize) -> Result<i8, MemoryError> {
        if offset >= FRAME_SIZE {
            return Err(MemoryError::OverCapacity);
        }
        let address = frame as usize * FRAME_SIZE + offset;
        if address >= CAPACITY {
            return Err(MemoryError::OverCapacity);
        }
        Ok(self.buffer[address] as i8)
    }
}
