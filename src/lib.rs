//! # LCD Backpack Library
//!
//! A Rust library for driving character LCDs through the Adafruit USB/Serial
//! LCD backpack. Display operations are encoded into the backpack's command
//! frames (`0xFE`, opcode, parameters) and written to the serial port; text is
//! written as raw single-byte characters.
//!
//! ## Features
//!
//! - Text output and splash-screen configuration
//! - Cursor positioning and cursor styles
//! - Backlight on/off, brightness, contrast and RGB colour
//! - GPIO pin control
//! - Pluggable [`Connector`] for opening the byte stream
//!
//! ## Example
//!
//! ```no_run
//! use lcd_backpack::LcdBackpack;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut lcd = LcdBackpack::new("/dev/ttyACM0", 9600);
//!     lcd.connect()?;
//!     lcd.clear()?;
//!     lcd.set_backlight_green()?;
//!     lcd.write("Hello, world")?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod protocol;
pub mod transport;
pub mod types;

pub use config::BackpackConfig;
pub use error::{BackpackError, Result};
pub use protocol::LcdBackpack;
pub use transport::{Connection, Connector, SerialConnector};
pub use types::*;
