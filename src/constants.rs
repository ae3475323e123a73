//! Protocol constants for the LCD backpack.
//!
//! The opcode table itself lives in [`crate::types::Opcode`]; this module holds
//! the framing byte and the serial port defaults.

/// Lead byte of every command frame, separating commands from raw text
pub const FRAME_START: u8 = 0xFE;

/// Factory baud rate of the backpack
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Read timeout in milliseconds applied when the port is opened
pub const TIMEOUT_MS: u64 = 1000;

/// Parameter byte sent with the display-on command
pub const DISPLAY_ON_PARAM: u8 = 0;

/// Byte substituted for characters outside the single-byte range
pub const REPLACEMENT_BYTE: u8 = b'?';

/// Full-scale backlight component
pub const BACKLIGHT_FULL: u8 = 0xFF;
