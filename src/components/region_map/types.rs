use crate::data::{Region, RegionId};

/// Where a region sits on the map and how it is painted.
#[derive(Clone, Copy, Debug)]
pub struct NodePlacement {
	pub region: RegionId,
	pub x: f64,
	pub y: f64,
	pub color: &'static str,
	/// Label distance below the node centre, before adding the client count.
	pub label_offset: f64,
}

/// Stylised landmass drawn under the network.
#[derive(Clone, Copy, Debug)]
pub struct Island {
	pub outline: &'static [(f64, f64)],
}

#[derive(Clone, Copy, Debug)]
pub struct MapNode {
	pub region: Region,
	pub x: f64,
	pub y: f64,
	pub color: &'static str,
	pub label_offset: f64,
}

impl MapNode {
	pub fn id(&self) -> RegionId {
		self.region.id
	}

	pub fn base_radius(&self) -> f64 {
		14.0 + self.region.count as f64
	}

	pub fn halo_radius(&self) -> f64 {
		18.0 + self.region.count as f64
	}

	pub fn label_dy(&self) -> f64 {
		self.label_offset + self.region.count as f64
	}
}

/// Decorative connection between two nodes, by index into the node list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapLink {
	pub source: usize,
	pub target: usize,
}
