use crate::constants::FRAME_START;
use serde::{Deserialize, Serialize};

/// Command opcodes understood by the backpack firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    DisplayOn = 0x42,
    DisplayOff = 0x46,
    SetBrightness = 0x99,
    SetContrast = 0x50,
    AutoscrollOn = 0x51,
    AutoscrollOff = 0x52,
    SetCursorPosition = 0x47,
    SetCursorHome = 0x48,
    CursorForward = 0x4D,
    CursorBack = 0x4C,
    UnderlineCursorOn = 0x4A,
    UnderlineCursorOff = 0x4B,
    BlockCursorOn = 0x53,
    BlockCursorOff = 0x54,
    BacklightRgb = 0xD0,
    SetLcdSize = 0xD1,
    GpioHigh = 0x57,
    GpioLow = 0x56,
    ClearDisplay = 0x58,
    SetSplashScreen = 0x40,
}

impl Opcode {
    /// Every opcode in the table
    pub const ALL: [Opcode; 20] = [
        Opcode::DisplayOn,
        Opcode::DisplayOff,
        Opcode::SetBrightness,
        Opcode::SetContrast,
        Opcode::AutoscrollOn,
        Opcode::AutoscrollOff,
        Opcode::SetCursorPosition,
        Opcode::SetCursorHome,
        Opcode::CursorForward,
        Opcode::CursorBack,
        Opcode::UnderlineCursorOn,
        Opcode::UnderlineCursorOff,
        Opcode::BlockCursorOn,
        Opcode::BlockCursorOff,
        Opcode::BacklightRgb,
        Opcode::SetLcdSize,
        Opcode::GpioHigh,
        Opcode::GpioLow,
        Opcode::ClearDisplay,
        Opcode::SetSplashScreen,
    ];

    /// Wire value of the opcode
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Number of parameter bytes that follow the opcode in a frame.
    ///
    /// The splash-screen text is written after the frame as raw bytes, so it
    /// does not count here.
    pub const fn param_count(self) -> usize {
        match self {
            Opcode::DisplayOn
            | Opcode::SetBrightness
            | Opcode::SetContrast
            | Opcode::GpioHigh
            | Opcode::GpioLow => 1,
            Opcode::SetCursorPosition | Opcode::SetLcdSize => 2,
            Opcode::BacklightRgb => 3,
            _ => 0,
        }
    }

    /// Build a complete command frame: frame-start marker, opcode, then `params`
    pub fn frame(self, params: &[u8]) -> Vec<u8> {
        let mut frame = Vec::with_capacity(2 + params.len());
        frame.push(FRAME_START);
        frame.push(self.as_byte());
        frame.extend_from_slice(params);
        frame
    }

    /// Look up an opcode by its wire value
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_byte() == byte)
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> u8 {
        op.as_byte()
    }
}

/// How `set_block_cursor(enabled)` maps onto the block cursor opcodes.
///
/// Deployed displays were driven with the `Inverted` mapping, where enabling
/// the block cursor sends BLOCK_CURSOR_OFF. `Direct` sends the opcode matching
/// the requested state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockCursorPolarity {
    #[default]
    Inverted,
    Direct,
}

impl BlockCursorPolarity {
    /// Opcode to send for the requested block cursor state
    pub fn opcode(self, enabled: bool) -> Opcode {
        match (self, enabled) {
            (BlockCursorPolarity::Inverted, true) | (BlockCursorPolarity::Direct, false) => {
                Opcode::BlockCursorOff
            }
            (BlockCursorPolarity::Inverted, false) | (BlockCursorPolarity::Direct, true) => {
                Opcode::BlockCursorOn
            }
        }
    }
}
