use std::time::Duration;

use crate::i18n::Lang;

/// Site-wide settings, built once in [`crate::App`] and shared through context.
#[derive(Clone, Debug)]
pub struct SiteConfig {
	pub company_name: &'static str,
	pub company_legal_name: &'static str,
	pub phone_display: &'static str,
	pub email: &'static str,
	/// International format without `+` or separators, as `wa.me` expects it.
	pub whatsapp_number: &'static str,
	pub consultation_message: &'static str,
	pub address_lines: &'static [&'static str],
	pub regulation_document_url: &'static str,
	pub default_lang: Lang,
	pub status_lookup_delay: Duration,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			company_name: "PT. ATS",
			company_legal_name: "Agrilink Teknologi Solusi",
			phone_display: "+62-812-5222-0892",
			email: "agrilinksolusi@gmail.com",
			whatsapp_number: "6281252220892",
			consultation_message: "Hello, I am interested in a free consultation for product registration.",
			address_lines: &[
				"Ruko Golden Madrid 2, Unit A3",
				"Lt. 1, Jl. Letnan Sutopo,",
				"Rawa Mekarjaya, Serpong,",
				"Tangerang Selatan, Banten 15310",
			],
			regulation_document_url: "https://peraturan.bpk.go.id/Details/46660/uu-no-12-tahun-1992",
			default_lang: Lang::En,
			status_lookup_delay: Duration::from_millis(1500),
		}
	}
}

impl SiteConfig {
	/// Start-up language: a recognised code pinned by the served page, else the configured default.
	pub fn initial_lang(&self, served: Option<&str>) -> Lang {
		served.and_then(Lang::from_code).unwrap_or(self.default_lang)
	}

	/// Chat link for the configured number. `encoded_text` must already be URL-encoded.
	pub fn whatsapp_url(&self, encoded_text: Option<&str>) -> String {
		match encoded_text {
			Some(text) if !text.is_empty() => {
				format!("https://wa.me/{}?text={}", self.whatsapp_number, text)
			}
			_ => format!("https://wa.me/{}", self.whatsapp_number),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn whatsapp_url_without_message() {
		let config = SiteConfig::default();
		assert_eq!(config.whatsapp_url(None), "https://wa.me/6281252220892");
		assert_eq!(config.whatsapp_url(Some("")), "https://wa.me/6281252220892");
	}

	#[test]
	fn whatsapp_url_with_message() {
		let config = SiteConfig::default();
		assert_eq!(
			config.whatsapp_url(Some("Hello%2C%20there")),
			"https://wa.me/6281252220892?text=Hello%2C%20there"
		);
	}

	#[test]
	fn configured_language_applies_without_a_pinned_one() {
		let config = SiteConfig {
			default_lang: Lang::Id,
			..SiteConfig::default()
		};
		assert_eq!(config.initial_lang(None), Lang::Id);
		assert_eq!(config.initial_lang(Some("")), Lang::Id);
		assert_eq!(config.initial_lang(Some("fr")), Lang::Id);
	}

	#[test]
	fn pinned_language_wins_over_the_default() {
		let config = SiteConfig {
			default_lang: Lang::Id,
			..SiteConfig::default()
		};
		assert_eq!(config.initial_lang(Some("en")), Lang::En);
		assert_eq!(SiteConfig::default().initial_lang(Some("ID")), Lang::Id);
	}

	#[test]
	fn default_delay_matches_simulated_backend() {
		assert_eq!(SiteConfig::default().status_lookup_delay, Duration::from_millis(1500));
	}
}
