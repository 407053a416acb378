//! Diagnostic console over a byte transport
//!
//! Used by task bodies for human-readable output; the scheduler core
//! itself never writes here.

use crate::hal::serial::ByteTransport;
use embedded_hal::serial::{Read, Write};
use nb::block;
use ufmt::uWrite;

pub struct SerialConsole<T> {
    port: T,
}

impl<T: ByteTransport> SerialConsole<T> {
    pub fn new(port: T) -> Self {
        Self { port }
    }

    /// Release the underlying transport.
    pub fn free(self) -> T {
        self.port
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<(), <T as Write<u8>>::Error> {
        block!(self.port.write(byte))
    }

    /// A byte from the transport, if one is pending.
    pub fn read_byte(&mut self) -> Option<u8> {
        self.port.read().ok()
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), <T as Write<u8>>::Error> {
        for byte in s.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    pub fn write_line(&mut self, s: &str) -> Result<(), <T as Write<u8>>::Error> {
        self.write_str(s)?;
        self.write_str("\r\n")
    }

    /// Print an unsigned value in decimal.
    pub fn write_uint(&mut self, value: u32) -> Result<(), <T as Write<u8>>::Error> {
        ufmt::uwrite!(self, "{}", value)
    }

    /// Print a labelled value, e.g. `[DBG] ticks: 5000`.
    pub fn debug(&mut self, msg: &str, value: u32) -> Result<(), <T as Write<u8>>::Error> {
        ufmt::uwrite!(self, "[DBG] {}: {}\r\n", msg, value)
    }
}

impl<T: ByteTransport> uWrite for SerialConsole<T> {
    type Error = <T as Write<u8>>::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        SerialConsole::write_str(self, s)
    }
}
