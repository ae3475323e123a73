//! Basic Usage Example
//!
//! This example walks through the core functionality of the LCD backpack library:
//! - Opening the serial connection
//! - Clearing the display and writing text
//! - Cursor positioning and cursor styles
//! - Backlight colour, brightness and contrast
//! - Setting the splash screen
//!
//! Usage:
//!   cargo run --example basic_usage                  # Prompt for the device
//!   cargo run --example basic_usage -- COM3          # Specify port
//!   cargo run --example basic_usage -- /dev/ttyACM0 19200
//!
//! Set RUST_LOG environment variable to control logging:
//!   RUST_LOG=trace cargo run --example basic_usage   # dump every frame sent

use inquire::Text;
use lcd_backpack::constants::DEFAULT_BAUD_RATE;
use lcd_backpack::{LcdBackpack, Result};
use log::info;
use std::thread;
use std::time::Duration;

const COLUMNS: u8 = 16;
const ROWS: u8 = 2;

fn prompt_device() -> Result<String> {
    let device = Text::new("Serial device of the LCD backpack:")
        .with_default("/dev/ttyACM0")
        .prompt()
        .map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Prompt cancelled: {}", e),
            )
        })?;
    Ok(device)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let device = match args.next() {
        Some(device) => device,
        None => prompt_device()?,
    };
    let baud_rate = args
        .next()
        .and_then(|b| b.parse().ok())
        .unwrap_or(DEFAULT_BAUD_RATE);

    let mut lcd = LcdBackpack::new(device, baud_rate);
    info!("Connecting to {} at {} baud...", lcd.device(), baud_rate);
    lcd.connect()?;

    info!("=== Display Setup ===");
    lcd.set_lcd_size(COLUMNS, ROWS)?;
    lcd.display_on()?;
    lcd.set_brightness(200)?;
    lcd.set_contrast(200)?;
    lcd.set_autoscroll(false)?;
    lcd.clear()?;

    info!("=== Text Output ===");
    lcd.set_cursor_home()?;
    lcd.write("Hello, world")?;
    lcd.set_cursor_position(1, 2)?;
    lcd.write("lcd-backpack")?;

    info!("=== Backlight Colours ===");
    for step in 0..4 {
        match step {
            0 => lcd.set_backlight_red()?,
            1 => lcd.set_backlight_green()?,
            2 => lcd.set_backlight_blue()?,
            _ => lcd.set_backlight_white()?,
        }
        thread::sleep(Duration::from_millis(500));
    }

    info!("=== Cursor Styles ===");
    lcd.set_underline_cursor(true)?;
    thread::sleep(Duration::from_secs(1));
    lcd.set_underline_cursor(false)?;
    lcd.set_block_cursor(true)?;
    thread::sleep(Duration::from_secs(1));
    lcd.set_block_cursor(false)?;

    info!("=== Splash Screen ===");
    lcd.set_splash_screen("lcd-backpack demo", usize::from(COLUMNS) * usize::from(ROWS))?;

    lcd.disconnect();
    info!("=== Basic Usage Complete ===");

    Ok(())
}
