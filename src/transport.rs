//! Opening the byte stream a backpack is driven over.

use crate::config::BackpackConfig;
use crate::error::{BackpackError, Result};
use std::io::Write;

/// An open, writable link to the backpack. Dropping it closes the link.
pub type Connection = Box<dyn Write + Send>;

/// Opens connections for [`crate::LcdBackpack`]
pub trait Connector {
    /// Open a connection using the device and serial settings in `config`
    fn open(&self, config: &BackpackConfig) -> Result<Connection>;
}

/// Opens the device as a serial port via the `serialport` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialConnector;

impl Connector for SerialConnector {
    fn open(&self, config: &BackpackConfig) -> Result<Connection> {
        let port = serialport::new(config.device.as_str(), config.baud_rate)
            .timeout(config.timeout())
            .open()
            .map_err(|source| BackpackError::Connection {
                device: config.device.clone(),
                source,
            })?;
        Ok(Box::new(port))
    }
}
