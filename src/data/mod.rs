//! Static, read-only site data.

pub mod content;
mod regions;
mod status;

pub use regions::{REGIONS, Region, RegionId, by_count_desc, find_region};
pub use status::{STATUS_RECORDS, Stage, StatusRecord};
