//! Monotonic system time in timer-interrupt ticks

use core::sync::atomic::{AtomicU32, Ordering};

/// Elapsed timer-interrupt firings since boot. Wraps on overflow; all
/// elapsed-time comparisons must use wrapping subtraction.
pub type Tick = u32;

/// The system tick counter.
///
/// Written only by the timer ISR through [`tick`](SystemClock::tick), read
/// from any context through [`get_ticks`](SystemClock::get_ticks). The
/// counter is a single `AtomicU32` with relaxed ordering: there is one core
/// and one writer, so the only requirement is that no read observes a torn
/// value, which the atomic access width guarantees. On a target that cannot
/// load a 32-bit word indivisibly the counter would need a critical section
/// instead.
///
/// A firmware image keeps one `static` instance and calls `tick()` from its
/// timer interrupt handler; nothing else in this crate is reachable from
/// interrupt context. Tests construct their own instances.
pub struct SystemClock {
    ticks: AtomicU32,
}

impl SystemClock {
    /// Create a clock at tick 0.
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a clock at an arbitrary tick count.
    pub const fn starting_at(ticks: Tick) -> Self {
        Self {
            ticks: AtomicU32::new(ticks),
        }
    }

    /// Advance the counter by exactly one tick.
    ///
    /// Called from the timer ISR, once per firing. Safe against concurrent
    /// `get_ticks()` calls from the foreground context.
    #[inline]
    pub fn tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// Current tick count.
    #[inline]
    pub fn get_ticks(&self) -> Tick {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Ticks elapsed since `start`, tolerating one counter wrap.
    #[inline]
    pub fn elapsed_since(&self, start: Tick) -> Tick {
        self.get_ticks().wrapping_sub(start)
    }

    /// Spin until `ticks` have elapsed.
    ///
    /// Task bodies may call this, but it blocks every other task for the
    /// whole wait: there is no preemption and no yield point.
    pub fn busy_wait(&self, ticks: Tick) {
        let start = self.get_ticks();
        while self.elapsed_since(start) < ticks {
            core::hint::spin_loop();
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn ticks_start_at_zero_and_count_up() {
        let clock = SystemClock::new();
        assert_eq!(clock.get_ticks(), 0);
        for _ in 0..3 {
            clock.tick();
        }
        assert_eq!(clock.get_ticks(), 3);
    }

    #[test]
    fn elapsed_since_tolerates_wraparound() {
        let clock = SystemClock::starting_at(u32::MAX - 1);
        for _ in 0..5 {
            clock.tick();
        }
        // counter is now 3, two ticks before the wrap plus three after
        assert_eq!(clock.get_ticks(), 3);
        assert_eq!(clock.elapsed_since(u32::MAX - 1), 5);
    }

    #[test]
    fn isr_increments_are_never_lost_under_concurrent_reads() {
        const K: u32 = 100_000;
        let clock = SystemClock::new();

        thread::scope(|s| {
            // simulated ISR context
            s.spawn(|| {
                for _ in 0..K {
                    clock.tick();
                }
            });
            // foreground context hammering reads
            s.spawn(|| {
                let mut last = 0;
                while last < K {
                    let now = clock.get_ticks();
                    assert!(now >= last, "tick counter went backwards");
                    last = now;
                }
            });
        });

        assert_eq!(clock.get_ticks(), K);
    }

    #[test]
    fn busy_wait_returns_once_enough_ticks_elapse() {
        let clock = SystemClock::new();

        thread::scope(|s| {
            s.spawn(|| {
                for _ in 0..10_000 {
                    clock.tick();
                }
            });
            clock.busy_wait(500);
            assert!(clock.get_ticks() >= 500);
        });
    }
}
