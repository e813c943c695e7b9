//! Common test utilities: an in-memory boot sector builder

#![allow(dead_code)]

pub const SECTOR_SIZE: usize = 512;

/// CHS end address for 254 heads, 63 sectors/track, cylinder 48
pub const CHS_END_254_63: [u8; 3] = [0x3F, 0x0C, 0xFE];

/// Builds a 512-byte sector, valid (55 AA) unless told otherwise
#[derive(Debug, Clone)]
pub struct MbrBuilder {
    data: [u8; SECTOR_SIZE],
}

impl MbrBuilder {
    pub fn new() -> Self {
        let mut data = [0u8; SECTOR_SIZE];
        data[510] = 0x55;
        data[511] = 0xAA;
        Self { data }
    }

    pub fn boot_code(mut self, code: &[u8]) -> Self {
        self.data[..code.len()].copy_from_slice(code);
        self
    }

    pub fn disk_signature(mut self, signature: u32) -> Self {
        self.data[440..444].copy_from_slice(&signature.to_le_bytes());
        self
    }

    pub fn boot_signature(mut self, bytes: [u8; 2]) -> Self {
        self.data[510..512].copy_from_slice(&bytes);
        self
    }

    /// Fill slot `slot` (0-based). The starting CHS is left zeroed.
    pub fn partition(
        mut self,
        slot: usize,
        status: u8,
        partition_type: u8,
        chs_end: [u8; 3],
        lba_start: u32,
        sector_count: u32,
    ) -> Self {
        let offset = 446 + slot * 16;
        self.data[offset] = status;
        self.data[offset + 4] = partition_type;
        self.data[offset + 5..offset + 8].copy_from_slice(&chs_end);
        self.data[offset + 8..offset + 12].copy_from_slice(&lba_start.to_le_bytes());
        self.data[offset + 12..offset + 16].copy_from_slice(&sector_count.to_le_bytes());
        self
    }

    /// Slot with only a sector count and type, used by the capacity tests
    pub fn sized(self, slot: usize, partition_type: u8, sector_count: u32) -> Self {
        self.partition(slot, 0x00, partition_type, [0; 3], 0, sector_count)
    }

    pub fn build(self) -> [u8; SECTOR_SIZE] {
        self.data
    }
}

/// One active Linux partition at LBA 2048, 100 MiB long, three empty slots
pub fn single_linux_image() -> [u8; SECTOR_SIZE] {
    MbrBuilder::new()
        .disk_signature(0x1234_5678)
        .partition(0, 0x80, 0x83, CHS_END_254_63, 2048, 204800)
        .build()
}
