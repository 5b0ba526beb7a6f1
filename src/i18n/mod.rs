//! Language selection and the static string dictionary.

mod dictionary;

use leptos::prelude::*;
use log::info;

pub use dictionary::{Key, ServiceBlurb, mission_list, service_list, text};

/// Languages the site is written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lang {
	#[default]
	En,
	Id,
}

impl Lang {
	pub const ALL: [Lang; 2] = [Lang::En, Lang::Id];

	/// Short code shown on the language switch.
	pub fn code(self) -> &'static str {
		match self {
			Lang::En => "EN",
			Lang::Id => "ID",
		}
	}

	/// Value for the `<html lang>` attribute.
	pub fn html_lang(self) -> &'static str {
		match self {
			Lang::En => "en",
			Lang::Id => "id",
		}
	}

	/// Case-insensitive parse of a switch code or html language tag.
	pub fn from_code(code: &str) -> Option<Lang> {
		let code = code.trim();
		Lang::ALL
			.into_iter()
			.find(|lang| lang.code().eq_ignore_ascii_case(code))
	}

	pub(crate) fn index(self) -> usize {
		match self {
			Lang::En => 0,
			Lang::Id => 1,
		}
	}
}

/// Reactive handle on the current language, shared through context.
#[derive(Clone, Copy, Debug)]
pub struct I18n {
	lang: RwSignal<Lang>,
}

impl I18n {
	pub fn new(lang: Lang) -> Self {
		Self {
			lang: RwSignal::new(lang),
		}
	}

	pub fn lang(&self) -> Lang {
		self.lang.get()
	}

	pub fn set_lang(&self, lang: Lang) {
		if self.lang.get_untracked() == lang {
			return;
		}
		info!("Switching language to {}", lang.code());
		self.lang.set(lang);
	}

	/// Tracked lookup; call inside a reactive closure so text follows the switch.
	pub fn t(&self, key: Key) -> &'static str {
		text(self.lang.get(), key)
	}

	pub fn mission_list(&self) -> &'static [&'static str] {
		mission_list(self.lang.get())
	}

	pub fn service_list(&self) -> &'static [ServiceBlurb] {
		service_list(self.lang.get())
	}
}

pub fn provide_i18n(lang: Lang) -> I18n {
	let i18n = I18n::new(lang);
	provide_context(i18n);
	i18n
}

pub fn use_i18n() -> I18n {
	expect_context::<I18n>()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::{REGIONS, RegionId};
	use crate::components::region_map::{Selection, SelectionEvent};

	#[test]
	fn parses_codes_case_insensitively() {
		assert_eq!(Lang::from_code("id"), Some(Lang::Id));
		assert_eq!(Lang::from_code(" EN "), Some(Lang::En));
		assert_eq!(Lang::from_code("ja"), None);
	}

	#[test]
	fn switching_language_changes_text_only() {
		let owner = Owner::new();
		owner.with(|| {
			let i18n = I18n::new(Lang::En);
			let selection = RwSignal::new(Selection::default());
			selection.update(|s| {
				s.apply(SelectionEvent::Click(RegionId::EastJava), REGIONS);
			});

			assert_eq!(i18n.t(Key::NavHome), "Home");
			assert_eq!(i18n.t(Key::ClientsKeyPortfolio), text(Lang::En, Key::ClientsKeyPortfolio));
			i18n.set_lang(Lang::Id);
			assert_eq!(i18n.lang(), Lang::Id);
			assert_eq!(i18n.t(Key::NavHome), "Beranda");
			assert_eq!(i18n.t(Key::StatusTrack), "Lacak Permohonan");
			assert_eq!(i18n.mission_list(), mission_list(Lang::Id));
			assert_eq!(
				selection.get_untracked().selected(),
				Some(RegionId::EastJava)
			);
		});
	}
}
