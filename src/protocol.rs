use crate::config::BackpackConfig;
use crate::constants::*;
use crate::error::{BackpackError, Result};
use crate::transport::{Connection, Connector, SerialConnector};
use crate::types::Opcode;
use log::{debug, info, trace};
use std::io::Write;

/// Main LCD backpack interface
pub struct LcdBackpack<C = SerialConnector> {
    config: BackpackConfig,
    connector: C,
    port: Option<Connection>,
}

impl LcdBackpack<SerialConnector> {
    /// Create a driver for the serial device at `device`. No port is opened
    /// until [`LcdBackpack::connect`] is called.
    pub fn new(device: impl Into<String>, baud_rate: u32) -> Self {
        Self::from_config(BackpackConfig::new(device, baud_rate))
    }

    pub fn from_config(config: BackpackConfig) -> Self {
        Self::with_connector(config, SerialConnector)
    }
}

impl<C: Connector> LcdBackpack<C> {
    /// Create a driver that opens its connection through `connector`
    pub fn with_connector(config: BackpackConfig, connector: C) -> Self {
        LcdBackpack {
            config,
            connector,
            port: None,
        }
    }

    /// Open the connection. An already open connection is closed first.
    pub fn connect(&mut self) -> Result<()> {
        self.close_port();
        let port = self.connector.open(&self.config)?;
        self.port = Some(port);
        info!(
            "Connected to LCD backpack on {} at {} baud",
            self.config.device, self.config.baud_rate
        );
        Ok(())
    }

    /// Switch the backlight on
    pub fn display_on(&mut self) -> Result<()> {
        self.write_command(Opcode::DisplayOn, &[DISPLAY_ON_PARAM])
    }

    /// Switch the backlight off
    pub fn display_off(&mut self) -> Result<()> {
        self.write_command(Opcode::DisplayOff, &[])
    }

    pub fn set_brightness(&mut self, brightness: u8) -> Result<()> {
        self.write_command(Opcode::SetBrightness, &[brightness])
    }

    pub fn set_contrast(&mut self, contrast: u8) -> Result<()> {
        self.write_command(Opcode::SetContrast, &[contrast])
    }

    pub fn set_autoscroll(&mut self, enabled: bool) -> Result<()> {
        let opcode = if enabled {
            Opcode::AutoscrollOn
        } else {
            Opcode::AutoscrollOff
        };
        self.write_command(opcode, &[])
    }

    /// Move the cursor. Columns and rows start at 1.
    pub fn set_cursor_position(&mut self, column: u8, row: u8) -> Result<()> {
        self.write_command(Opcode::SetCursorPosition, &[column, row])
    }

    /// Move the cursor to column 1, row 1
    pub fn set_cursor_home(&mut self) -> Result<()> {
        self.write_command(Opcode::SetCursorHome, &[])
    }

    pub fn cursor_forward(&mut self) -> Result<()> {
        self.write_command(Opcode::CursorForward, &[])
    }

    pub fn cursor_back(&mut self) -> Result<()> {
        self.write_command(Opcode::CursorBack, &[])
    }

    pub fn set_underline_cursor(&mut self, enabled: bool) -> Result<()> {
        let opcode = if enabled {
            Opcode::UnderlineCursorOn
        } else {
            Opcode::UnderlineCursorOff
        };
        self.write_command(opcode, &[])
    }

    /// Enable or disable the block cursor.
    ///
    /// With the default [`crate::BlockCursorPolarity::Inverted`] setting,
    /// `true` sends BLOCK_CURSOR_OFF and `false` sends BLOCK_CURSOR_ON.
    pub fn set_block_cursor(&mut self, enabled: bool) -> Result<()> {
        let opcode = self.config.block_cursor.opcode(enabled);
        self.write_command(opcode, &[])
    }

    /// Set the RGB backlight colour
    pub fn set_backlight_rgb(&mut self, red: u8, green: u8, blue: u8) -> Result<()> {
        self.write_command(Opcode::BacklightRgb, &[red, green, blue])
    }

    pub fn set_backlight_red(&mut self) -> Result<()> {
        self.set_backlight_rgb(BACKLIGHT_FULL, 0, 0)
    }

    pub fn set_backlight_green(&mut self) -> Result<()> {
        self.set_backlight_rgb(0, BACKLIGHT_FULL, 0)
    }

    pub fn set_backlight_blue(&mut self) -> Result<()> {
        self.set_backlight_rgb(0, 0, BACKLIGHT_FULL)
    }

    pub fn set_backlight_white(&mut self) -> Result<()> {
        self.set_backlight_rgb(BACKLIGHT_FULL, BACKLIGHT_FULL, BACKLIGHT_FULL)
    }

    /// Tell the backpack the geometry of the attached LCD
    pub fn set_lcd_size(&mut self, columns: u8, rows: u8) -> Result<()> {
        self.write_command(Opcode::SetLcdSize, &[columns, rows])
    }

    /// Drive a GPIO pin (1-4) high
    pub fn set_gpio_high(&mut self, pin: u8) -> Result<()> {
        self.write_command(Opcode::GpioHigh, &[pin])
    }

    /// Drive a GPIO pin (1-4) low
    pub fn set_gpio_low(&mut self, pin: u8) -> Result<()> {
        self.write_command(Opcode::GpioLow, &[pin])
    }

    /// Clear all characters from the display
    pub fn clear(&mut self) -> Result<()> {
        self.write_command(Opcode::ClearDisplay, &[])
    }

    /// Write text at the cursor position
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.write_bytes(&encode_text(text))
    }

    /// Write raw bytes at the cursor position, without any command framing
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let port = self.port.as_mut().ok_or(BackpackError::NotConnected)?;
        trace!("Writing:  {}", hex_dump(bytes));
        port.write_all(bytes)?;
        Ok(())
    }

    /// Store the text shown when the display powers up. The text is
    /// left-justified and padded with spaces or truncated to `width`
    /// characters, normally the total character count of the LCD.
    pub fn set_splash_screen(&mut self, text: &str, width: usize) -> Result<()> {
        self.write_command(Opcode::SetSplashScreen, &[])?;
        self.write_bytes(&encode_text(&pad_to_width(text, width)))
    }

    /// Send one command frame in a single write
    pub(crate) fn write_command(&mut self, opcode: Opcode, params: &[u8]) -> Result<()> {
        let port = self.port.as_mut().ok_or(BackpackError::NotConnected)?;
        let frame = opcode.frame(params);
        trace!("Sending:  {}", hex_dump(&frame));
        port.write_all(&frame)?;
        Ok(())
    }
}

impl<C> LcdBackpack<C> {
    /// Close the connection. Does nothing when already disconnected.
    pub fn disconnect(&mut self) {
        if self.close_port() {
            info!("Disconnected from {}", self.config.device);
        }
    }

    pub fn is_connected(&self) -> bool {
        self.port.is_some()
    }

    pub fn device(&self) -> &str {
        &self.config.device
    }

    pub fn baud_rate(&self) -> u32 {
        self.config.baud_rate
    }

    pub fn config(&self) -> &BackpackConfig {
        &self.config
    }

    /// Drop the open handle, if any. Returns whether one was open.
    fn close_port(&mut self) -> bool {
        self.port.take().is_some()
    }
}

impl<C> Drop for LcdBackpack<C> {
    fn drop(&mut self) {
        if self.close_port() {
            debug!("Closed {} on drop", self.config.device);
        }
    }
}

/// Encode text as single-byte characters. Characters above U+00FF become `?`.
pub fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(REPLACEMENT_BYTE))
        .collect()
}

/// Left-justify `text` in exactly `width` characters
pub fn pad_to_width(text: &str, width: usize) -> String {
    format!("{:<width$.width$}", text, width = width)
}

fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_text_is_single_byte() {
        assert_eq!(encode_text("Hi!"), b"Hi!".to_vec());
        assert_eq!(encode_text("caf\u{e9}"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_text("\u{2603}x"), vec![b'?', b'x']);
        assert!(encode_text("").is_empty());
    }

    #[test]
    fn pad_to_width_pads_and_truncates() {
        assert_eq!(pad_to_width("Hi", 5), "Hi   ");
        assert_eq!(pad_to_width("Hello, world", 5), "Hello");
        assert_eq!(pad_to_width("", 3), "   ");
        assert_eq!(pad_to_width("abc", 0), "");
        assert_eq!(pad_to_width("\u{e9}t\u{e9}", 4), "\u{e9}t\u{e9} ");
    }

    #[test]
    fn hex_dump_formats_bytes() {
        assert_eq!(hex_dump(&[0xFE, 0x42, 0x00]), "FE 42 00");
        assert_eq!(hex_dump(&[]), "");
    }

    #[test]
    fn new_driver_is_disconnected() {
        let lcd = LcdBackpack::new("/dev/ttyACM0", 9600);
        assert!(!lcd.is_connected());
        assert_eq!(lcd.device(), "/dev/ttyACM0");
        assert_eq!(lcd.baud_rate(), 9600);
    }

    #[test]
    fn commands_fail_before_connect() {
        let mut lcd = LcdBackpack::new("/dev/ttyACM0", 9600);
        assert!(matches!(lcd.clear(), Err(BackpackError::NotConnected)));
        assert!(matches!(
            lcd.write_command(Opcode::DisplayOn, &[0]),
            Err(BackpackError::NotConnected)
        ));
        assert!(matches!(lcd.write("text"), Err(BackpackError::NotConnected)));
    }

    #[test]
    fn disconnect_and_drop_without_connect() {
        let mut lcd = LcdBackpack::new("/dev/ttyACM0", 9600);
        lcd.disconnect();
        lcd.disconnect();
        assert!(!lcd.is_connected());
        drop(lcd);
    }

    #[test]
    fn failed_connect_stays_disconnected() {
        let mut lcd = LcdBackpack::new("/dev/lcd-backpack-does-not-exist", 9600);
        let err = lcd.connect().unwrap_err();
        assert!(matches!(err, BackpackError::Connection { .. }));
        assert!(!lcd.is_connected());
    }
}
