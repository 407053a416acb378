//! Cooperative tick-driven task scheduling core.
//!
//! A periodic hardware timer interrupt advances a monotonic tick counter
//! ([`SystemClock`]); a round-robin scheduler ([`Scheduler`]) dispatches
//! registered task routines whenever their configured period in ticks has
//! elapsed. Tasks run to completion on the foreground context; the only
//! thing reachable from interrupt context is [`SystemClock::tick`].
//!
//! Hardware is kept behind the trait contracts in [`hal`], so the core
//! carries no device register code and builds on any target, including the
//! host for tests.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod drivers;
pub mod hal;
pub mod rtos;
pub mod system;
pub mod time;

pub use drivers::SerialConsole;
pub use rtos::{RegistryFull, Scheduler, TaskFn, TaskId, TaskRegistry};
pub use system::System;
pub use time::{SystemClock, Tick};
