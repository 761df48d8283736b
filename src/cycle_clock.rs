use crate::timekeeper::Clock;
use core::cell::Cell;
use cortex_m::peripheral::{DCB, DWT};

/// Milliseconds derived from the DWT cycle counter.
///
/// CYCCNT wraps every 2^32 cycles (about 7s at 600MHz), so `millis()` must be called at least that
/// often.  Each call folds the cycles since the previous call into the millisecond count.
pub struct CycleCounterClock {
    cycles_per_milli: u32,
    last_cycles: Cell<u32>,
    leftover_cycles: Cell<u32>,
    timestamp_millis: Cell<u32>,
}

impl CycleCounterClock {
    /// Turns on the cycle counter.  `core_hz` is the core clock frequency.
    pub fn new(dcb: &mut DCB, dwt: &mut DWT, core_hz: u32) -> Self {
        dcb.enable_trace();
        dwt.enable_cycle_counter();

        CycleCounterClock {
            cycles_per_milli: (core_hz / 1000).max(1),
            last_cycles: Cell::new(DWT::get_cycle_count()),
            leftover_cycles: Cell::new(0),
            timestamp_millis: Cell::new(0),
        }
    }
}

impl Clock for CycleCounterClock {
    fn millis(&self) -> u32 {
        let cycles = DWT::get_cycle_count();
        let delta = cycles.wrapping_sub(self.last_cycles.get());
        self.last_cycles.set(cycles);

        let total = u64::from(self.leftover_cycles.get()) + u64::from(delta);
        let per = u64::from(self.cycles_per_milli);
        self.leftover_cycles.set((total % per) as u32);

        let millis = self
            .timestamp_millis
            .get()
            .wrapping_add((total / per) as u32);
        self.timestamp_millis.set(millis);
        millis
    }
}
