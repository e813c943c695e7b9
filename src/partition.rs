//! Primary partition records (16 bytes each)

use byteorder::{ByteOrder, LittleEndian};

use crate::chs::Chs;

/// Size of one partition record
pub const ENTRY_SIZE: usize = 16;

/// Status byte value of an active (bootable) partition
pub const STATUS_ACTIVE: u8 = 0x80;

/// Type code of an unused slot
pub const TYPE_EMPTY: u8 = 0x00;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartitionEntry {
    pub status: u8,          // offset 0
    pub chs_start: Chs,      // offset 1, 3 bytes
    pub partition_type: u8,  // offset 4
    pub chs_end: Chs,        // offset 5, 3 bytes
    pub lba_start: u32,      // offset 8, LE
    pub sector_count: u32,   // offset 12, LE
}

impl PartitionEntry {
    /// Decode a record from exactly `ENTRY_SIZE` bytes.
    pub fn parse(record: &[u8; ENTRY_SIZE]) -> Self {
        PartitionEntry {
            status: record[0],
            chs_start: Chs::from_bytes(&[record[1], record[2], record[3]]),
            partition_type: record[4],
            chs_end: Chs::from_bytes(&[record[5], record[6], record[7]]),
            lba_start: LittleEndian::read_u32(&record[8..12]),
            sector_count: LittleEndian::read_u32(&record[12..16]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.partition_type == TYPE_EMPTY
    }

    pub fn is_bootable(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    pub fn kind(&self) -> PartitionKind {
        PartitionKind::from_code(self.partition_type)
    }
}

/// Partition type codes the report knows by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionKind {
    Linux,
    LinuxSwap,
    Extended,
    Unknown(u8),
}

impl PartitionKind {
    pub fn from_code(code: u8) -> Self {
        match code {
            0x83 => PartitionKind::Linux,
            0x82 => PartitionKind::LinuxSwap,
            0x05 => PartitionKind::Extended,
            other => PartitionKind::Unknown(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PartitionKind::Linux => "Linux",
            PartitionKind::LinuxSwap => "Linux Swap",
            PartitionKind::Extended => "Extended",
            PartitionKind::Unknown(_) => "Unknown",
        }
    }
}
