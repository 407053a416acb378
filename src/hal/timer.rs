//! Periodic tick timer contract

/// A countdown timer that fires an interrupt each time it reloads. The
/// firmware's interrupt handler for it must call
/// [`SystemClock::tick`](crate::time::SystemClock::tick) and nothing else in
/// this crate.
///
/// Counter and interrupt are enabled independently: a timer left counting
/// with its interrupt masked simply stops the clock from advancing, which
/// downstream tasks observe as never becoming due.
pub trait TickTimer {
    /// Load the countdown value the timer restarts from.
    fn set_reload(&mut self, count: u32);

    fn enable(&mut self);
    fn disable(&mut self);

    fn irq_enable(&mut self);
    fn irq_disable(&mut self);
}

/// Convert a period in milliseconds to a reload count at `clock_hz`.
///
/// Divides the clock down to cycles-per-millisecond before multiplying, so
/// the intermediate value cannot overflow the way `clock_hz * ms / 1000`
/// would.
pub fn reload_for_ms(clock_hz: u32, ms: u32) -> u32 {
    (clock_hz / 1000) * ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reload_count_matches_clock_cycles_per_period() {
        assert_eq!(reload_for_ms(16_000_000, 1), 16_000);
        assert_eq!(reload_for_ms(16_000_000, 10), 160_000);
    }

    #[test]
    fn reload_conversion_survives_large_clock_and_period() {
        // naive hz * ms would overflow u32 here
        assert_eq!(reload_for_ms(80_000_000, 1000), 80_000_000);
    }
}
