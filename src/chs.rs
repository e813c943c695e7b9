//! Packed Cylinder-Head-Sector addresses

/// A 3-byte CHS address as stored in a partition record.
///
/// Byte layout as decoded here:
/// - byte 0: bits 0-5 sector, bits 6-7 cylinder bits 0-1
/// - byte 1: cylinder bits 2-9
/// - byte 2: head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chs(pub [u8; 3]);

impl Chs {
    pub fn from_bytes(bytes: &[u8; 3]) -> Self {
        Chs(*bytes)
    }

    /// 10-bit cylinder number (0..=1023)
    pub fn cylinder(&self) -> u16 {
        ((self.0[1] as u16) << 2) | ((self.0[0] & 0xC0) >> 6) as u16
    }

    pub fn head(&self) -> u8 {
        self.0[2]
    }

    /// 6-bit sector field (0..=63), not adjusted for 1-based numbering
    pub fn sector(&self) -> u8 {
        self.0[0] & 0x3F
    }
}
