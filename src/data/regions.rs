/// Stable identifier of a client region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionId {
	Jakarta,
	EastJava,
	NorthSumatra,
	Banten,
	Lampung,
}

impl RegionId {
	pub fn code(self) -> &'static str {
		match self {
			RegionId::Jakarta => "jkt",
			RegionId::EastJava => "ej",
			RegionId::NorthSumatra => "ns",
			RegionId::Banten => "ban",
			RegionId::Lampung => "lam",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
	pub id: RegionId,
	pub name: &'static str,
	pub count: u32,
	pub description: &'static str,
	pub clients: &'static [&'static str],
}

impl Region {
	/// Name without the parenthesised qualifier, used for map labels.
	pub fn short_name(&self) -> &'static str {
		match self.name.split_once(" (") {
			Some((head, _)) => head,
			None => self.name,
		}
	}
}

pub const REGIONS: &[Region] = &[
	Region {
		id: RegionId::Jakarta,
		name: "Jakarta (HQ Focus)",
		count: 15,
		description: "Corporate Partners",
		clients: &["JAI", "TBM", "AgroCorp", "IndoPlant"],
	},
	Region {
		id: RegionId::EastJava,
		name: "East Java",
		count: 9,
		description: "Ag-Chemical Producers",
		clients: &["PetroJaya", "Surabaya Chems", "EastGrow"],
	},
	Region {
		id: RegionId::NorthSumatra,
		name: "North Sumatra",
		count: 6,
		description: "Plantation Suppliers",
		clients: &["Sumatra Palms", "Medan Agro"],
	},
	Region {
		id: RegionId::Banten,
		name: "Tangerang/Banten",
		count: 4,
		description: "Strategic Partners",
		clients: &["Banten Bio", "TangSel Labs"],
	},
	Region {
		id: RegionId::Lampung,
		name: "Lampung & Central Java",
		count: 5,
		description: "Emerging Markets",
		clients: &["Lampung Tani", "Java Fert"],
	},
];

pub fn find_region(regions: &[Region], id: RegionId) -> Option<&Region> {
	regions.iter().find(|region| region.id == id)
}

/// Regions ordered by client count, largest first. Ties keep list order.
pub fn by_count_desc(regions: &[Region]) -> Vec<&Region> {
	let mut sorted: Vec<&Region> = regions.iter().collect();
	sorted.sort_by(|a, b| b.count.cmp(&a.count));
	sorted
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn region_codes_are_unique() {
		let codes: HashSet<_> = REGIONS.iter().map(|r| r.id.code()).collect();
		assert_eq!(codes.len(), REGIONS.len());
	}

	#[test]
	fn short_name_drops_qualifier() {
		let jakarta = find_region(REGIONS, RegionId::Jakarta).unwrap();
		assert_eq!(jakarta.short_name(), "Jakarta");
		let banten = find_region(REGIONS, RegionId::Banten).unwrap();
		assert_eq!(banten.short_name(), "Tangerang/Banten");
	}

	#[test]
	fn sorted_by_count_descending() {
		let counts: Vec<u32> = by_count_desc(REGIONS).iter().map(|r| r.count).collect();
		assert_eq!(counts, vec![15, 9, 6, 5, 4]);
	}
}
