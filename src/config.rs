//! Configuration constants for the scheduling core

/// Task registry capacity
pub const MAX_TASKS: usize = 10;

/// Tick timer interrupt period in milliseconds
pub const TICK_PERIOD_MS: u32 = 1;

/// Default system clock frequency in Hz (8 MHz crystal through the PLL,
/// output divided by 12)
pub const SYSCLK_HZ: u32 = 16_666_667;

/// UART baud rate for the diagnostic console
pub const UART_BAUD: u32 = 115_200;
