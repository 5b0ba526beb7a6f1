use crate::data::{Region, RegionId, find_region};

use super::types::{Island, MapLink, MapNode, NodePlacement};

pub const PLACEMENTS: &[NodePlacement] = &[
	NodePlacement {
		region: RegionId::NorthSumatra,
		x: 100.0,
		y: 110.0,
		color: "#15803d",
		label_offset: 35.0,
	},
	NodePlacement {
		region: RegionId::Lampung,
		x: 175.0,
		y: 260.0,
		color: "#16a34a",
		label_offset: 35.0,
	},
	// Pushed further down so it does not collide with the Jakarta label.
	NodePlacement {
		region: RegionId::Banten,
		x: 205.0,
		y: 310.0,
		color: "#22c55e",
		label_offset: 45.0,
	},
	NodePlacement {
		region: RegionId::Jakarta,
		x: 245.0,
		y: 290.0,
		color: "#15803d",
		label_offset: 35.0,
	},
	NodePlacement {
		region: RegionId::EastJava,
		x: 410.0,
		y: 295.0,
		color: "#166534",
		label_offset: 35.0,
	},
];

pub const ADJACENCY: &[(RegionId, RegionId)] = &[
	(RegionId::NorthSumatra, RegionId::Lampung),
	(RegionId::Lampung, RegionId::Banten),
	(RegionId::Banten, RegionId::Jakarta),
	(RegionId::Jakarta, RegionId::EastJava),
];

pub const ISLANDS: &[Island] = &[
	Island {
		outline: &[(60.0, 60.0), (180.0, 180.0), (140.0, 240.0), (40.0, 120.0)],
	},
	Island {
		outline: &[
			(260.0, 80.0),
			(380.0, 80.0),
			(400.0, 160.0),
			(360.0, 220.0),
			(240.0, 200.0),
		],
	},
	Island {
		outline: &[(180.0, 270.0), (460.0, 280.0), (450.0, 310.0), (170.0, 300.0)],
	},
	Island {
		outline: &[
			(450.0, 120.0),
			(510.0, 100.0),
			(530.0, 150.0),
			(480.0, 180.0),
			(520.0, 220.0),
			(440.0, 200.0),
		],
	},
	Island {
		outline: &[
			(580.0, 140.0),
			(740.0, 140.0),
			(750.0, 220.0),
			(620.0, 240.0),
			(580.0, 180.0),
		],
	},
];

/// One node per placed region, in placement order. Regions without a placement are skipped.
pub fn build_nodes(regions: &[Region], placements: &[NodePlacement]) -> Vec<MapNode> {
	placements
		.iter()
		.filter_map(|p| {
			find_region(regions, p.region).map(|region| MapNode {
				region: *region,
				x: p.x,
				y: p.y,
				color: p.color,
				label_offset: p.label_offset,
			})
		})
		.collect()
}

/// Resolve adjacency pairs to node indices, dropping pairs with a missing end.
pub fn build_links(nodes: &[MapNode], adjacency: &[(RegionId, RegionId)]) -> Vec<MapLink> {
	let index_of = |id: RegionId| nodes.iter().position(|n| n.id() == id);
	adjacency
		.iter()
		.filter_map(|&(a, b)| {
			Some(MapLink {
				source: index_of(a)?,
				target: index_of(b)?,
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::data::REGIONS;

	#[test]
	fn one_node_per_region() {
		let nodes = build_nodes(REGIONS, PLACEMENTS);
		assert_eq!(nodes.len(), REGIONS.len());
		let ids: HashSet<_> = nodes.iter().map(|n| n.id()).collect();
		assert_eq!(ids.len(), REGIONS.len());
	}

	#[test]
	fn node_size_follows_client_count() {
		let nodes = build_nodes(REGIONS, PLACEMENTS);
		let jakarta = nodes.iter().find(|n| n.id() == RegionId::Jakarta).unwrap();
		assert_eq!(jakarta.base_radius(), 29.0);
		assert_eq!(jakarta.halo_radius(), 33.0);
		let banten = nodes.iter().find(|n| n.id() == RegionId::Banten).unwrap();
		assert_eq!(banten.label_dy(), 49.0);
	}

	#[test]
	fn links_follow_adjacency() {
		let nodes = build_nodes(REGIONS, PLACEMENTS);
		let links = build_links(&nodes, ADJACENCY);
		assert_eq!(links.len(), ADJACENCY.len());
		assert_eq!(nodes[links[0].source].id(), RegionId::NorthSumatra);
		assert_eq!(nodes[links[0].target].id(), RegionId::Lampung);
	}

	#[test]
	fn links_to_missing_regions_are_dropped() {
		let only_java: Vec<Region> = REGIONS
			.iter()
			.copied()
			.filter(|r| matches!(r.id, RegionId::Jakarta | RegionId::EastJava))
			.collect();
		let nodes = build_nodes(&only_java, PLACEMENTS);
		assert_eq!(nodes.len(), 2);
		let links = build_links(&nodes, ADJACENCY);
		assert_eq!(links.len(), 1);
	}

	#[test]
	fn islands_are_closed_shapes() {
		for (idx, island) in ISLANDS.iter().enumerate() {
			assert!(island.outline.len() >= 3, "island {idx} outline too short");
		}
	}
}
