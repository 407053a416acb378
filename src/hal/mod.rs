//! Hardware collaborator contracts.
//!
//! The scheduling core never touches device registers itself; a firmware
//! image implements these traits against its own device crate and hands the
//! implementations to [`System`](crate::system::System).

pub mod clock;
pub mod irq;
pub mod serial;
pub mod timer;

pub use clock::{ClockConfig, ClockControl};
pub use irq::{InterruptController, IrqVector};
pub use serial::ByteTransport;
pub use timer::{reload_for_ms, TickTimer};
