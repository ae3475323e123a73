//! Connection settings for a backpack.

use crate::constants::{DEFAULT_BAUD_RATE, TIMEOUT_MS};
use crate::types::BlockCursorPolarity;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Serial settings and protocol options for one display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackpackConfig {
    /// Device path or port name, e.g. `/dev/ttyACM0` or `COM3`
    pub device: String,
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
    /// Read timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub block_cursor: BlockCursorPolarity,
}

fn default_baud_rate() -> u32 {
    DEFAULT_BAUD_RATE
}

fn default_timeout_ms() -> u64 {
    TIMEOUT_MS
}

impl BackpackConfig {
    pub fn new(device: impl Into<String>, baud_rate: u32) -> Self {
        Self {
            device: device.into(),
            baud_rate,
            timeout_ms: TIMEOUT_MS,
            block_cursor: BlockCursorPolarity::default(),
        }
    }

    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn with_block_cursor(mut self, polarity: BlockCursorPolarity) -> Self {
        self.block_cursor = polarity;
        self
    }

    /// Read timeout applied when the port is opened
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
