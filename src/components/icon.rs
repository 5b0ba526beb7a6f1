use leptos::prelude::*;

/// Line icons used across the site, drawn on a 24x24 stroked grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
	AlertCircle,
	ArrowRight,
	Award,
	BadgeCheck,
	Beaker,
	BookOpen,
	Bug,
	Calendar,
	CheckCircle,
	ChevronDown,
	ChevronUp,
	Clock,
	Copyright,
	Factory,
	FileCheck,
	FileSearch,
	FileText,
	FlaskConical,
	Globe,
	Loader,
	Mail,
	MapPin,
	Menu,
	MessageCircle,
	PenTool,
	Phone,
	Scale,
	Search,
	Send,
	Shield,
	ShieldAlert,
	ShieldCheck,
	Target,
	User,
	Users,
	X,
}

const CIRCLE_10: &str = "M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0";
const SHIELD: &str = "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z";
const DOCUMENT: &str = "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z";
const DOCUMENT_FOLD: &str = "M14 2v4a2 2 0 0 0 2 2h4";

impl Icon {
	/// Services on the About page cycle through these in order.
	pub const SERVICE_CYCLE: [Icon; 5] = [
		Icon::BookOpen,
		Icon::ShieldCheck,
		Icon::Target,
		Icon::Users,
		Icon::Award,
	];

	pub fn for_service(idx: usize) -> Icon {
		Self::SERVICE_CYCLE[idx % Self::SERVICE_CYCLE.len()]
	}

	/// SVG path data making up the glyph.
	pub fn paths(self) -> &'static [&'static str] {
		match self {
			Icon::AlertCircle => &[CIRCLE_10, "M12 8v4", "M12 16h.01"],
			Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
			Icon::Award => &[
				"M18 8a6 6 0 1 1-12 0a6 6 0 1 1 12 0",
				"M15.48 12.89 17 22l-5-3-5 3 1.52-9.11",
			],
			Icon::BadgeCheck => &[
				"M3.85 8.62a4 4 0 0 1 4.78-4.77 4 4 0 0 1 6.74 0 4 4 0 0 1 4.78 4.78 4 4 0 0 1 0 6.74 4 4 0 0 1-4.77 4.78 4 4 0 0 1-6.75 0 4 4 0 0 1-4.78-4.77 4 4 0 0 1 0-6.76Z",
				"m9 12 2 2 4-4",
			],
			Icon::Beaker => &[
				"M4.5 3h15",
				"M6 3v16a2 2 0 0 0 2 2h8a2 2 0 0 0 2-2V3",
				"M6 14h12",
			],
			Icon::BookOpen => &[
				"M12 7v14",
				"M3 18a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1h5a4 4 0 0 1 4 4 4 4 0 0 1 4-4h5a1 1 0 0 1 1 1v13a1 1 0 0 1-1 1h-6a3 3 0 0 0-3 3 3 3 0 0 0-3-3z",
			],
			Icon::Bug => &[
				"m8 2 1.88 1.88",
				"M14.12 3.88 16 2",
				"M9 7.13v-1a3 3 0 1 1 6 0v1",
				"M12 20c-3.3 0-6-2.7-6-6v-3a4 4 0 0 1 4-4h4a4 4 0 0 1 4 4v3c0 3.3-2.7 6-6 6",
				"M12 20v-9",
				"M6 13H2",
				"M22 13h-4",
			],
			Icon::Calendar => &[
				"M8 2v4",
				"M16 2v4",
				"M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
				"M3 10h18",
			],
			Icon::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
			Icon::ChevronDown => &["m6 9 6 6 6-6"],
			Icon::ChevronUp => &["m18 15-6-6-6 6"],
			Icon::Clock => &[CIRCLE_10, "M12 6v6l4 2"],
			Icon::Copyright => &[CIRCLE_10, "M14.83 14.83a4 4 0 1 1 0-5.66"],
			Icon::Factory => &[
				"M2 20a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V8l-7 5V8l-7 5V4a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2Z",
				"M17 18h1",
				"M12 18h1",
				"M7 18h1",
			],
			Icon::FileCheck => &[DOCUMENT, DOCUMENT_FOLD, "m9 15 2 2 4-4"],
			Icon::FileSearch => &[
				DOCUMENT,
				DOCUMENT_FOLD,
				"M14 14.5a2.5 2.5 0 1 1-5 0a2.5 2.5 0 1 1 5 0",
				"m13.3 16.3 1.7 1.7",
			],
			Icon::FileText => &[DOCUMENT, DOCUMENT_FOLD, "M10 9H8", "M16 13H8", "M16 17H8"],
			Icon::FlaskConical => &[
				"M10 2v7.527a2 2 0 0 1-.211.896L4.72 20.55a1 1 0 0 0 .9 1.45h12.76a1 1 0 0 0 .9-1.45l-5.069-10.127A2 2 0 0 1 14 9.527V2",
				"M8.5 2h7",
				"M7 16h10",
			],
			Icon::Globe => &[
				CIRCLE_10,
				"M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
				"M2 12h20",
			],
			Icon::Loader => &["M21 12a9 9 0 1 1-6.219-8.56"],
			Icon::Mail => &[
				"M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
				"m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
			],
			Icon::MapPin => &[
				"M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0",
				"M15 10a3 3 0 1 1-6 0a3 3 0 1 1 6 0",
			],
			Icon::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
			Icon::MessageCircle => &["M7.9 20A9 9 0 1 0 4 16.1L2 22Z"],
			Icon::PenTool => &[
				"M15.707 21.293a1 1 0 0 1-1.414 0l-1.586-1.586a1 1 0 0 1 0-1.414l5.586-5.586a1 1 0 0 1 1.414 0l1.586 1.586a1 1 0 0 1 0 1.414z",
				"m18 13-1.375-6.874a1 1 0 0 0-.746-.776L3.235 2.028a1 1 0 0 0-1.207 1.207L5.35 15.879a1 1 0 0 0 .776.746L13 18",
				"m2.3 2.3 7.286 7.286",
				"M13 11a2 2 0 1 1-4 0a2 2 0 1 1 4 0",
			],
			Icon::Phone => &[
				"M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
			],
			Icon::Scale => &[
				"m16 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z",
				"m2 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z",
				"M7 21h10",
				"M12 3v18",
				"M3 7h2c2 0 5-1 7-2 2 1 5 2 7 2h2",
			],
			Icon::Search => &["M19 11a8 8 0 1 1-16 0a8 8 0 1 1 16 0", "m21 21-4.3-4.3"],
			Icon::Send => &[
				"M14.536 21.686a.5.5 0 0 0 .937-.024l6.5-19a.496.496 0 0 0-.635-.635l-19 6.5a.5.5 0 0 0-.024.937l7.93 3.18a2 2 0 0 1 1.112 1.11z",
				"m21.854 2.147-10.94 10.939",
			],
			Icon::Shield => &[SHIELD],
			Icon::ShieldAlert => &[SHIELD, "M12 8v4", "M12 16h.01"],
			Icon::ShieldCheck => &[SHIELD, "m9 12 2 2 4-4"],
			Icon::Target => &[
				CIRCLE_10,
				"M18 12a6 6 0 1 1-12 0a6 6 0 1 1 12 0",
				"M14 12a2 2 0 1 1-4 0a2 2 0 1 1 4 0",
			],
			Icon::User => &[
				"M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
				"M16 7a4 4 0 1 1-8 0a4 4 0 1 1 8 0",
			],
			Icon::Users => &[
				"M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
				"M13 7a4 4 0 1 1-8 0a4 4 0 1 1 8 0",
				"M22 21v-2a4 4 0 0 0-3-3.87",
				"M16 3.13a4 4 0 0 1 0 7.75",
			],
			Icon::X => &["M18 6 6 18", "m6 6 12 12"],
		}
	}
}

/// Inline SVG for an [`Icon`], coloured by `currentColor`.
#[component]
pub fn IconSvg(
	icon: Icon,
	#[prop(default = 24)] size: u32,
	#[prop(into, optional)] class: String,
) -> impl IntoView {
	view! {
		<svg
			class=format!("icon {class}")
			width=size
			height=size
			viewBox="0 0 24 24"
			fill="none"
			stroke="currentColor"
			stroke-width="2"
			stroke-linecap="round"
			stroke-linejoin="round"
			aria-hidden="true"
		>
			{icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
		</svg>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn service_icons_cycle() {
		assert_eq!(Icon::for_service(0), Icon::BookOpen);
		assert_eq!(Icon::for_service(4), Icon::Award);
		assert_eq!(Icon::for_service(5), Icon::BookOpen);
		assert_eq!(Icon::for_service(7), Icon::Target);
	}

	#[test]
	fn every_icon_has_path_data() {
		for icon in [Icon::X, Icon::Menu, Icon::Loader, Icon::Scale, Icon::BadgeCheck] {
			assert!(icon.paths().iter().all(|d| !d.is_empty()));
		}
	}
}
