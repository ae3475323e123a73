//! Error types for LCD backpack operations.

use thiserror::Error;

/// Result type alias for backpack operations.
pub type Result<T> = std::result::Result<T, BackpackError>;

/// Error types for LCD backpack communication.
#[derive(Error, Debug)]
pub enum BackpackError {
    /// Opening the serial port failed
    #[error("Failed to connect to {device}: {source}")]
    Connection {
        /// Device path or port name that could not be opened
        device: String,
        /// Underlying serial port error
        #[source]
        source: serialport::Error,
    },

    /// A command or write was issued with no open connection
    #[error("Not connected")]
    NotConnected,

    /// Writing to an open connection failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackpackError {
    /// Returns true if this is a [`BackpackError::NotConnected`] error
    pub fn is_not_connected(&self) -> bool {
        matches!(self, BackpackError::NotConnected)
    }
}
