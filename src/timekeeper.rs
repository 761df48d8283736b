use core::sync::atomic::{AtomicU32, Ordering};

/// A monotonic millisecond counter.  The value is allowed to wrap around at `u32::MAX`.
pub trait Clock {
    fn millis(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn millis(&self) -> u32 {
        (**self).millis()
    }
}

/// Milliseconds from `earlier` to `now`, computed modulo 2^32 so a wrapped counter still measures correctly.
pub fn elapsed_since(now: u32, earlier: u32) -> u32 {
    now.wrapping_sub(earlier)
}

//

/// A millisecond counter advanced by hand, usually from a periodic timer interrupt or the main loop.
///
/// Can live in a `static` shared with the interrupt handler.
#[derive(Debug, Default)]
pub struct Timekeeper {
    timestamp_millis: AtomicU32,
}

impl Timekeeper {
    pub const fn new(start_millis: u32) -> Self {
        Timekeeper {
            timestamp_millis: AtomicU32::new(start_millis),
        }
    }

    /// Wraps at `u32::MAX`.
    pub fn incr_timestamp(&self, plus: u32) {
        self.timestamp_millis.fetch_add(plus, Ordering::Relaxed);
    }

    pub fn set_timestamp(&self, millis: u32) {
        self.timestamp_millis.store(millis, Ordering::Relaxed)
    }
}

impl Clock for Timekeeper {
    fn millis(&self) -> u32 {
        self.timestamp_millis.load(Ordering::Relaxed)
    }
}
