use crate::components::icon::Icon;
use crate::i18n::Key;

#[derive(Clone, Copy, Debug)]
pub struct NavItem {
	pub label: Key,
	pub path: &'static str,
	pub children: &'static [NavItem],
}

impl NavItem {
	const fn leaf(label: Key, path: &'static str) -> Self {
		Self {
			label,
			path,
			children: &[],
		}
	}

	/// Active when the current path is this item or one of its children.
	pub fn is_active(&self, pathname: &str) -> bool {
		if self.children.is_empty() {
			pathname == self.path
		} else {
			pathname.starts_with(self.path)
		}
	}
}

pub const NAV_ITEMS: &[NavItem] = &[
	NavItem::leaf(Key::NavHome, "/"),
	NavItem::leaf(Key::NavAbout, "/about"),
	NavItem {
		label: Key::NavServices,
		path: "/services",
		children: &[
			NavItem::leaf(Key::NavFertilizer, "/services/fertilizer"),
			NavItem::leaf(Key::NavPesticide, "/services/pesticide"),
			NavItem::leaf(Key::NavIp, "/services/ip"),
		],
	},
	NavItem::leaf(Key::NavClients, "/clients"),
	NavItem::leaf(Key::NavNews, "/news"),
	NavItem::leaf(Key::NavStatus, "/status"),
];

#[derive(Clone, Copy, Debug)]
pub struct Article {
	pub title: &'static str,
	pub excerpt: &'static str,
	pub date: &'static str,
	pub author: &'static str,
	pub category: &'static str,
	pub image: &'static str,
}

pub const ARTICLES: &[Article] = &[
	Article {
		title: "Understanding Law No. 12 of 1992",
		excerpt: "A deep dive into the Plant Cultivation Systems law that forms the backbone of agricultural regulation in Indonesia.",
		date: "Oct 12, 2023",
		author: "Satrio",
		category: "Regulation",
		image: "https://images.unsplash.com/photo-1589829085413-56de8ae18c73?auto=format&fit=crop&q=80&w=800",
	},
	Article {
		title: "New Efficacy Test Standards for 2024",
		excerpt: "The Ministry of Agriculture has updated the protocols for bio-efficacy testing. Here is what you need to know to ensure compliance.",
		date: "Nov 05, 2023",
		author: "Admin",
		category: "Update",
		image: "https://images.unsplash.com/photo-1579154204601-01588f351e67?auto=format&fit=crop&q=80&w=800",
	},
	Article {
		title: "Accelerating Market Entry for Organic Fertilizers",
		excerpt: "Strategies to streamline the administrative requirements for organic certification and registration.",
		date: "Jan 15, 2024",
		author: "Ina",
		category: "Guide",
		image: "https://images.unsplash.com/photo-1466692476868-aef1dfb1e735?auto=format&fit=crop&q=80&w=800",
	},
];

/// A titled card with an icon, used by the service pages.
#[derive(Clone, Copy, Debug)]
pub struct Feature {
	pub icon: Icon,
	pub title: &'static str,
	pub desc: &'static str,
}

pub const PESTICIDE_CLASSES: &[Feature] = &[
	Feature {
		icon: Icon::Beaker,
		title: "Synthetic & Mineral",
		desc: "Chemical pesticides and metabolites.",
	},
	Feature {
		icon: Icon::Bug,
		title: "Bio-Pesticides",
		desc: "Natural, attractants, pheromones, ZPT.",
	},
	Feature {
		icon: Icon::ShieldAlert,
		title: "Vector Control",
		desc: "Household and human disease vectors.",
	},
	Feature {
		icon: Icon::Globe,
		title: "Export Only",
		desc: "Products manufactured solely for export.",
	},
	Feature {
		icon: Icon::Factory,
		title: "Technical Materials",
		desc: "Raw active ingredients registration.",
	},
];

pub const PESTICIDE_ADMIN_REQUIREMENTS: &[&str] = &[
	"Deed of Establishment",
	"Tax ID (NPWP)",
	"Business ID (NIB)",
	"Import Permit Data",
];

pub const PESTICIDE_TECH_REQUIREMENTS: &[&str] = &[
	"MSDS",
	"Certificate of Analysis (CoA)",
	"Manufacturing Process",
	"Bio-efficacy Data",
	"Toxicology Reports",
	"Residue Data",
];

pub const FERTILIZER_STEPS: &[Feature] = &[
	Feature {
		icon: Icon::FlaskConical,
		title: "Sample Seal",
		desc: "",
	},
	Feature {
		icon: Icon::CheckCircle,
		title: "Lab Analysis",
		desc: "",
	},
	Feature {
		icon: Icon::FileText,
		title: "Reporting",
		desc: "",
	},
	Feature {
		icon: Icon::Send,
		title: "Submission",
		desc: "",
	},
	Feature {
		icon: Icon::Award,
		title: "Approval",
		desc: "",
	},
];

pub const FERTILIZER_ADMIN_REQUIREMENTS: &[&str] = &[
	"Deed of Establishment (Akta)",
	"Tax ID (NPWP)",
	"Business ID (NIB)",
	"Director's ID Card (KTP)",
	"Letter of Authorization",
	"Trademark Certificate (HAKI)",
];

pub const FERTILIZER_TECH_REQUIREMENTS: &[&str] = &[
	"Product Label Design",
	"Letter of Appointment (LoA)",
	"SNI Certificate (if applicable)",
	"Manufacturing Process Flowchart",
	"Certificate of Analysis (CoA)",
];

pub const IP_BENEFITS: &[Feature] = &[
	Feature {
		icon: Icon::ShieldCheck,
		title: "Legal Protection",
		desc: "Exclusive rights to use your brand name and logo, preventing competitors from using similar assets.",
	},
	Feature {
		icon: Icon::Scale,
		title: "Asset Value",
		desc: "Registered trademarks are intangible assets that increase your company's valuation and can be licensed.",
	},
	Feature {
		icon: Icon::Copyright,
		title: "Registration Requirement",
		desc: "For many agricultural products, proof of brand ownership (HAKI) is a prerequisite for distribution permits.",
	},
];

pub const IP_SERVICES: &[Feature] = &[
	Feature {
		icon: Icon::FileSearch,
		title: "Trademark Search",
		desc: "Comprehensive analysis to ensure your brand name is available.",
	},
	Feature {
		icon: Icon::Scale,
		title: "Registration Filing",
		desc: "End-to-end handling of documents with the Directorate General of Intellectual Property.",
	},
	Feature {
		icon: Icon::ShieldCheck,
		title: "Monitoring & Renewal",
		desc: "Ongoing protection maintenance and renewal alerts.",
	},
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn services_entry_is_active_for_child_routes() {
		let services = NAV_ITEMS.iter().find(|i| i.path == "/services").unwrap();
		assert!(services.is_active("/services/pesticide"));
		assert!(!services.is_active("/status"));
	}

	#[test]
	fn home_entry_only_matches_root() {
		let home = NAV_ITEMS[0];
		assert!(home.is_active("/"));
		assert!(!home.is_active("/about"));
	}
}
