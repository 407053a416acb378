//! Byte transport contract for diagnostic output
//!
//! Just the `embedded-hal` serial traits bundled under one name. The
//! scheduler core never touches this; only the console and task bodies do.

use embedded_hal::serial::{Read, Write};

/// Full-duplex byte-level transport.
pub trait ByteTransport: Read<u8> + Write<u8> {}

impl<T: Read<u8> + Write<u8>> ByteTransport for T {}
