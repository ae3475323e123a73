#![allow(dead_code)]

use lcd_backpack::{BackpackConfig, BackpackError, Connection, Connector, LcdBackpack, Result};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// What the in-memory link has seen
#[derive(Debug, Default)]
pub struct Wire {
    /// One entry per write call
    pub writes: Vec<Vec<u8>>,
    pub opens: usize,
    pub closes: usize,
    pub fail_writes: bool,
}

impl Wire {
    pub fn bytes(&self) -> Vec<u8> {
        self.writes.concat()
    }
}

pub struct MockLink {
    wire: Arc<Mutex<Wire>>,
}

impl Write for MockLink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut wire = self.wire.lock().unwrap();
        if wire.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged"));
        }
        wire.writes.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for MockLink {
    fn drop(&mut self) {
        self.wire.lock().unwrap().closes += 1;
    }
}

#[derive(Clone, Default)]
pub struct MockConnector {
    pub wire: Arc<Mutex<Wire>>,
    pub refuse: bool,
}

impl Connector for MockConnector {
    fn open(&self, config: &BackpackConfig) -> Result<Connection> {
        if self.refuse {
            return Err(BackpackError::Connection {
                device: config.device.clone(),
                source: serialport::Error::new(serialport::ErrorKind::NoDevice, "busy"),
            });
        }
        self.wire.lock().unwrap().opens += 1;
        Ok(Box::new(MockLink {
            wire: Arc::clone(&self.wire),
        }))
    }
}

pub fn config() -> BackpackConfig {
    BackpackConfig::new("/dev/ttyMOCK0", 9600)
}

/// A connected driver plus a handle on its wire
pub fn connected() -> (LcdBackpack<MockConnector>, Arc<Mutex<Wire>>) {
    connected_with(config())
}

pub fn connected_with(config: BackpackConfig) -> (LcdBackpack<MockConnector>, Arc<Mutex<Wire>>) {
    let connector = MockConnector::default();
    let wire = Arc::clone(&connector.wire);
    let mut lcd = LcdBackpack::with_connector(config, connector);
    lcd.connect().unwrap();
    (lcd, wire)
}
