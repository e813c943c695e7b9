//! Master Boot Record layout and decoding
//!
//! | Offset | Size | Field             |
//! |--------|------|-------------------|
//! | 0      | 440  | boot code         |
//! | 440    | 4    | disk signature LE |
//! | 444    | 2    | reserved          |
//! | 446    | 64   | 4 partition records |
//! | 510    | 2    | boot signature LE |

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{MbrError, Result};
use crate::partition::{PartitionEntry, ENTRY_SIZE};

pub const SECTOR_SIZE: usize = 512;
pub const BOOT_CODE_SIZE: usize = 440;
pub const DISK_SIGNATURE_OFFSET: usize = 440;
pub const RESERVED_OFFSET: usize = 444;
pub const PARTITION_TABLE_OFFSET: usize = 446;
pub const PARTITION_COUNT: usize = 4;
pub const BOOT_SIGNATURE_OFFSET: usize = 510;
pub const BOOT_SIGNATURE: u16 = 0xAA55;

/// A decoded boot sector. Only built from a sector whose signature checked out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MbrImage {
    pub boot_code: [u8; BOOT_CODE_SIZE],
    pub disk_signature: u32,
    pub reserved: u16,
    pub partitions: [PartitionEntry; PARTITION_COUNT],
    pub boot_signature: u16,
}

/// Decode the first 512 bytes of `buffer`.
///
/// Fails with `TruncatedInput` before looking at any content when the buffer
/// is short, and with `InvalidSignature` when bytes 510..512 are not 55 AA.
pub fn decode(buffer: &[u8]) -> Result<MbrImage> {
    if buffer.len() < SECTOR_SIZE {
        return Err(MbrError::TruncatedInput { len: buffer.len() });
    }
    let sector = &buffer[..SECTOR_SIZE];

    let mut boot_code = [0u8; BOOT_CODE_SIZE];
    boot_code.copy_from_slice(&sector[..BOOT_CODE_SIZE]);

    let disk_signature = LittleEndian::read_u32(&sector[DISK_SIGNATURE_OFFSET..RESERVED_OFFSET]);
    let reserved = LittleEndian::read_u16(&sector[RESERVED_OFFSET..PARTITION_TABLE_OFFSET]);

    let mut partitions = [PartitionEntry::default(); PARTITION_COUNT];
    for (i, slot) in partitions.iter_mut().enumerate() {
        let start = PARTITION_TABLE_OFFSET + i * ENTRY_SIZE;
        let mut record = [0u8; ENTRY_SIZE];
        record.copy_from_slice(&sector[start..start + ENTRY_SIZE]);
        *slot = PartitionEntry::parse(&record);
    }

    let boot_signature = LittleEndian::read_u16(&sector[BOOT_SIGNATURE_OFFSET..SECTOR_SIZE]);
    if boot_signature != BOOT_SIGNATURE {
        return Err(MbrError::InvalidSignature { found: boot_signature });
    }

    Ok(MbrImage {
        boot_code,
        disk_signature,
        reserved,
        partitions,
        boot_signature,
    })
}

/// Read the boot sector from the start of `reader`.
///
/// A source holding fewer than 512 bytes yields `TruncatedInput`, not an I/O error.
pub fn read_from<R: Read + Seek>(reader: &mut R) -> Result<MbrImage> {
    reader.seek(SeekFrom::Start(0))?;

    let mut buf = Vec::with_capacity(SECTOR_SIZE);
    reader.by_ref().take(SECTOR_SIZE as u64).read_to_end(&mut buf)?;

    decode(&buf)
}

impl MbrImage {
    /// Open an image file and decode its first sector. The file is closed on return.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        read_from(&mut file)
    }

    /// Non-empty slots with their 0-based slot index, in table order.
    pub fn used_partitions(&self) -> impl Iterator<Item = (usize, &PartitionEntry)> {
        self.partitions
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_empty())
    }
}
