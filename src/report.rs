//! Text rendering of the partition table summary

use std::fmt;

use crate::geometry::{DiskSize, Geometry, PartitionSummary};
use crate::record::{MbrImage, SECTOR_SIZE};

pub const HEADER: &str = "Device       Boot Start  End  Blocks     Id System";

/// Everything shown for one image, computed up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub size: DiskSize,
    pub geometry: Geometry,
    pub disk_signature: u32,
    pub rows: Vec<PartitionSummary>,
}

impl Report {
    pub fn new(mbr: &MbrImage) -> Self {
        let geometry = Geometry::from_image(mbr);
        Report {
            size: DiskSize::from_image(mbr),
            geometry,
            disk_signature: mbr.disk_signature,
            rows: PartitionSummary::collect(mbr, &geometry),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = &self.geometry;

        writeln!(
            f,
            "Disk /dev/sda: {} GB, {} bytes, {} sectors",
            self.size.gigabytes, self.size.bytes, self.size.sectors
        )?;
        writeln!(
            f,
            "{} heads, {} sectors/track, {} cylinders",
            g.heads, g.sectors_per_track, g.cylinders
        )?;
        writeln!(
            f,
            "Units = cylinders of {} * {} = {} bytes",
            g.cylinder_sectors(),
            SECTOR_SIZE,
            g.cylinder_bytes()
        )?;
        writeln!(f, "Disk identifier: 0x{:08X}", self.disk_signature)?;
        writeln!(f)?;
        writeln!(f, "{}", HEADER)?;

        for row in &self.rows {
            writeln!(
                f,
                "{:<12} {}   {:<6} {:<4} {:<10} {:<2X} {}",
                row.device,
                if row.bootable { "*" } else { " " },
                row.start,
                row.end,
                row.blocks,
                row.type_code,
                row.kind.label()
            )?;
        }
        Ok(())
    }
}

/// Render the full summary for `mbr`.
pub fn render(mbr: &MbrImage) -> String {
    Report::new(mbr).to_string()
}
