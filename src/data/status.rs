/// Stage of a registration application, in process order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
	Submitted,
	LabAnalysis,
	EfficacyTesting,
	CommissionReview,
	DecreeIssued,
}

impl Stage {
	pub const ALL: [Stage; 5] = [
		Stage::Submitted,
		Stage::LabAnalysis,
		Stage::EfficacyTesting,
		Stage::CommissionReview,
		Stage::DecreeIssued,
	];

	pub fn label(self) -> &'static str {
		match self {
			Stage::Submitted => "Submitted",
			Stage::LabAnalysis => "Lab Analysis",
			Stage::EfficacyTesting => "Efficacy Testing",
			Stage::CommissionReview => "Commission Review",
			Stage::DecreeIssued => "Decree Issued",
		}
	}

	/// Zero-based position within [`Stage::ALL`].
	pub fn position(self) -> usize {
		Stage::ALL.iter().position(|&s| s == self).unwrap_or(0)
	}

	pub fn is_final(self) -> bool {
		self == Stage::DecreeIssued
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusRecord {
	pub id: &'static str,
	pub company_name: &'static str,
	pub product_name: &'static str,
	pub stage: Stage,
	pub last_updated: &'static str,
}

pub const STATUS_RECORDS: &[StatusRecord] = &[
	StatusRecord {
		id: "AGR-2023-001",
		company_name: "PT Green Grow",
		product_name: "SuperPhos 20",
		stage: Stage::EfficacyTesting,
		last_updated: "2023-10-25",
	},
	StatusRecord {
		id: "AGR-2023-002",
		company_name: "CV Tani Maju",
		product_name: "BioKill X",
		stage: Stage::CommissionReview,
		last_updated: "2023-11-02",
	},
	StatusRecord {
		id: "AGR-2023-003",
		company_name: "Global Chem Indonesia",
		product_name: "Nitrogen Plus",
		stage: Stage::LabAnalysis,
		last_updated: "2023-11-10",
	},
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stage_positions_follow_process_order() {
		assert_eq!(Stage::Submitted.position(), 0);
		assert_eq!(Stage::DecreeIssued.position(), 4);
		assert!(Stage::DecreeIssued.is_final());
		assert!(!Stage::CommissionReview.is_final());
	}
}
