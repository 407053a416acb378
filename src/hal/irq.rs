//! Interrupt controller contract

/// Interrupt vector number, in the target's own numbering.
pub type IrqVector = u32;

/// Global and per-source interrupt delivery control.
pub trait InterruptController {
    /// Enable delivery of all maskable interrupts.
    fn master_enable(&mut self);

    /// Disable delivery of all maskable interrupts.
    fn master_disable(&mut self);

    fn irq_enable(&mut self, vector: IrqVector);
    fn irq_disable(&mut self, vector: IrqVector);
}
