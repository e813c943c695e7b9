//! MBR partition table reader
//!
//! Decodes a 512-byte Master Boot Record (boot code, disk signature, four
//! primary partition records, 0xAA55 signature) and summarises it the way
//! `fdisk -l` does: disk size, geometry, and one row per used slot.
//!
//! ```ignore
//! let mbr = mbr::MbrImage::open("mbr.bin")?;
//! print!("{}", mbr::render(&mbr));
//! ```
//!
//! Decoding is all-or-nothing. Everything after a successful `decode` is
//! infallible.

pub mod chs;
pub mod error;
pub mod geometry;
pub mod partition;
pub mod record;
pub mod report;

pub use chs::Chs;
pub use error::{MbrError, Result};
pub use geometry::{DiskSize, Geometry, PartitionSummary};
pub use partition::{PartitionEntry, PartitionKind};
pub use record::{decode, read_from, MbrImage};
pub use report::{render, Report};
