//! System bring-up: wiring the hardware collaborators together

use crate::hal::clock::{ClockConfig, ClockControl};
use crate::hal::irq::{InterruptController, IrqVector};
use crate::hal::timer::{reload_for_ms, TickTimer};

/// Binds the clock tree, tick timer and interrupt controller and drives
/// them through the start-up sequence. After [`bring_up`](System::bring_up)
/// the tick interrupt is live; the caller then registers its tasks and
/// hands the foreground context to [`Scheduler::run`](crate::Scheduler::run).
pub struct System<C, T, I> {
    clocks: C,
    tick_timer: T,
    irq: I,
}

impl<C, T, I> System<C, T, I>
where
    C: ClockControl,
    T: TickTimer,
    I: InterruptController,
{
    pub fn new(clocks: C, tick_timer: T, irq: I) -> Self {
        Self {
            clocks,
            tick_timer,
            irq,
        }
    }

    /// Run the start-up sequence: unmask interrupts globally, configure the
    /// clock tree, then program the tick timer from the resulting clock
    /// frequency and turn it on.
    pub fn bring_up(&mut self, cfg: ClockConfig, tick_period_ms: u32) {
        self.irq.master_enable();
        self.clocks.set_config(cfg);

        let reload = reload_for_ms(self.clocks.clock_hz(), tick_period_ms);
        self.tick_timer.set_reload(reload);
        self.tick_timer.irq_enable();
        self.tick_timer.enable();
    }

    /// Unmask a peripheral interrupt vector (the tick timer's own interrupt
    /// is handled by `bring_up`).
    pub fn irq_enable(&mut self, vector: IrqVector) {
        self.irq.irq_enable(vector);
    }

    pub fn irq_disable(&mut self, vector: IrqVector) {
        self.irq.irq_disable(vector);
    }

    /// Release the collaborators.
    pub fn free(self) -> (C, T, I) {
        (self.clocks, self.tick_timer, self.irq)
    }
}
