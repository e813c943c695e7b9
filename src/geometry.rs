//! Values derived from a decoded boot sector: disk geometry, capacity and
//! the per-partition figures shown in the report.

use crate::partition::{PartitionEntry, PartitionKind};
use crate::record::{MbrImage, SECTOR_SIZE};

const GIB: u64 = 1024 * 1024 * 1024;

/// Device name prefix for partition rows
pub const DEVICE_PREFIX: &str = "/dev/sda";

/// Disk geometry guessed from the ending CHS address of the first slot.
///
/// This is an approximation: nothing guarantees that partition 1 ends on the
/// last head and sector of a cylinder, and the slot may even be empty. The MBR
/// carries no other geometry source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub heads: u8,
    pub sectors_per_track: u8,
    pub cylinders: u16,
}

impl Geometry {
    pub fn from_image(mbr: &MbrImage) -> Self {
        let end = mbr.partitions[0].chs_end;
        Geometry {
            heads: end.head(),
            sectors_per_track: end.sector(),
            cylinders: end.cylinder(),
        }
    }

    /// Sectors in one cylinder (heads * sectors per track)
    pub fn cylinder_sectors(&self) -> u32 {
        self.heads as u32 * self.sectors_per_track as u32
    }

    pub fn cylinder_bytes(&self) -> u32 {
        self.cylinder_sectors() * SECTOR_SIZE as u32
    }
}

/// Disk capacity as reported in the summary header.
///
/// The sector counts of all four slots are converted to GiB one by one,
/// summed in single precision, and the total rounded to a whole number. Bytes
/// and sectors are then recomputed from that rounded figure, so they are
/// multiples of 1 GiB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskSize {
    pub gigabytes: u64,
    pub bytes: u64,
    pub sectors: u64,
}

impl DiskSize {
    pub fn from_image(mbr: &MbrImage) -> Self {
        // Each partial sum is added in f64 and stored back as f32
        let total = mbr.partitions.iter().fold(0f32, |acc, p| {
            (acc as f64 + sectors_to_gib(p.sector_count)) as f32
        });

        // round() rounds half away from zero
        let gigabytes = total.round() as u64;
        let bytes = gigabytes * GIB;

        DiskSize {
            gigabytes,
            bytes,
            sectors: bytes / SECTOR_SIZE as u64,
        }
    }
}

pub fn sectors_to_gib(sectors: u32) -> f64 {
    sectors as f64 * SECTOR_SIZE as f64 / GIB as f64
}

/// One row of the partition listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionSummary {
    pub device: String,
    pub bootable: bool,
    pub start: u32,
    pub end: u32,
    pub blocks: u32,
    pub type_code: u8,
    pub kind: PartitionKind,
}

impl PartitionSummary {
    /// Summarise slot `slot` (0-based). Empty slots have no row.
    ///
    /// Start and end are in cylinder units and use truncating division. With
    /// a zero-sized cylinder both are reported as 0.
    pub fn new(slot: usize, entry: &PartitionEntry, geometry: &Geometry) -> Option<Self> {
        if entry.is_empty() {
            return None;
        }

        let unit = geometry.cylinder_sectors();
        let end_lba = entry.lba_start.wrapping_add(entry.sector_count);

        Some(PartitionSummary {
            device: format!("{}{}", DEVICE_PREFIX, slot + 1),
            bootable: entry.is_bootable(),
            start: entry.lba_start.checked_div(unit).unwrap_or(0),
            end: end_lba.checked_div(unit).unwrap_or(0),
            blocks: entry.sector_count / 2,
            type_code: entry.partition_type,
            kind: entry.kind(),
        })
    }

    /// Rows for every non-empty slot of `mbr`, in slot order.
    pub fn collect(mbr: &MbrImage, geometry: &Geometry) -> Vec<Self> {
        mbr.used_partitions()
            .filter_map(|(slot, entry)| Self::new(slot, entry, geometry))
            .collect()
    }
}
