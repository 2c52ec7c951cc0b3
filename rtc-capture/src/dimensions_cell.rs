use media::Dimensions;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free last-writer-wins cell holding a [`Dimensions`].
///
/// Width and height are packed into one `u64` so a reader never observes the
/// width of one write paired with the height of another. Concurrent writers
/// race and the last store wins; readers see an eventually consistent value.
#[derive(Debug, Default)]
pub struct AtomicDimensions {
    packed: AtomicU64,
}

impl AtomicDimensions {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            packed: AtomicU64::new(pack(dimensions)),
        }
    }

    pub fn load(&self) -> Dimensions {
        unpack(self.packed.load(Ordering::Acquire))
    }

    pub fn store(&self, dimensions: Dimensions) {
        self.packed.store(pack(dimensions), Ordering::Release);
    }

    /// Stores `dimensions` and returns the previous value.
    pub fn swap(&self, dimensions: Dimensions) -> Dimensions {
        unpack(self.packed.swap(pack(dimensions), Ordering::AcqRel))
    }
}

fn pack(dimensions: Dimensions) -> u64 {
    (u64::from(dimensions.width) << 32) | u64::from(dimensions.height)
}

fn unpack(packed: u64) -> Dimensions {
    Dimensions::new((packed >> 32) as u32, packed as u32)
}
