use super::Lang;

macro_rules! dictionary {
	($($key:ident { en: $en:literal, id: $id:literal $(,)? }),* $(,)?) => {
		/// Every translatable label on the site.
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
		pub enum Key {
			$($key),*
		}

		impl Key {
			#[cfg(test)]
			pub const ALL: &'static [Key] = &[$(Key::$key),*];

			fn entry(self) -> [&'static str; 2] {
				match self {
					$(Key::$key => [$en, $id]),*
				}
			}
		}
	};
}

dictionary! {
	NavHome { en: "Home", id: "Beranda" },
	NavAbout { en: "About Us", id: "Tentang Kami" },
	NavServices { en: "Services", id: "Layanan" },
	NavFertilizer { en: "Fertilizer Registration", id: "Registrasi Pupuk" },
	NavPesticide { en: "Pesticide Registration", id: "Registrasi Pestisida" },
	NavIp { en: "Intellectual Property", id: "Kekayaan Intelektual" },
	NavClients { en: "Clients", id: "Klien" },
	NavNews { en: "News & Regulations", id: "Berita & Regulasi" },
	NavStatus { en: "Check Status", id: "Cek Status" },
	NavLang { en: "Language", id: "Bahasa" },
	NavMenuOpen { en: "Open menu", id: "Buka menu" },
	NavMenuClose { en: "Close menu", id: "Tutup menu" },

	HeroTitle {
		en: "Modern Ag-Tech Regulatory Solutions",
		id: "Solusi Regulasi Ag-Tech Modern",
	},
	HeroSubtitle {
		en: "Simplifying fertilizer and pesticide registration in Indonesia. We combine deep regulatory expertise with modern technology to accelerate your market entry.",
		id: "Menyederhanakan pendaftaran pupuk dan pestisida di Indonesia. Kami menggabungkan keahlian regulasi yang mendalam dengan teknologi modern untuk mempercepat akses pasar Anda.",
	},
	HeroCtaPrimary { en: "Start Registration", id: "Mulai Registrasi" },
	HeroCtaSecondary { en: "Learn More", id: "Pelajari Lebih Lanjut" },

	WhyUsTitle { en: "Why Choose Agrilink?", id: "Mengapa Memilih Agrilink?" },
	WhyUsExpTitle { en: "10+ Years Experience", id: "Pengalaman 10+ Tahun" },
	WhyUsExpDesc {
		en: "Navigating Indonesian Agricultural Regulations since 2013 with a proven track record.",
		id: "Menavigasi Regulasi Pertanian Indonesia sejak 2013 dengan rekam jejak yang terbukti.",
	},
	WhyUsSpeedTitle { en: "Accelerated Processing", id: "Proses Terakselerasi" },
	WhyUsSpeedDesc {
		en: "Optimized workflows and digital tracking for faster MOA Decree issuance.",
		id: "Alur kerja yang optimal dan pelacakan digital untuk penerbitan SK Mentan yang lebih cepat.",
	},
	WhyUsCompTitle { en: "Regulatory Compliance", id: "Kepatuhan Regulasi" },
	WhyUsCompDesc {
		en: "100% adherence to Law No. 12 of 1992 and all current MOA standards.",
		id: "Kepatuhan 100% terhadap UU No. 12 Tahun 1992 dan standar MOA saat ini.",
	},

	ClientsTitle { en: "Trusted by Industry Leaders", id: "Dipercaya oleh Pemimpin Industri" },
	ClientsBadge { en: "Trusted Partner Network", id: "Jaringan Mitra Terpercaya" },
	ClientsHeading { en: "National Footprint", id: "Jejak Nasional" },
	ClientsIntro {
		en: "Empowering agricultural leaders across the Indonesian archipelago through regulatory excellence.",
		id: "Memberdayakan pemimpin pertanian di seluruh kepulauan Indonesia melalui keunggulan regulasi.",
	},
	ClientsMarketPresence { en: "Market Presence", id: "Kehadiran Pasar" },
	ClientsKeyPortfolio { en: "Key Portfolio", id: "Portofolio Utama" },
	ClientsGrowthTitle { en: "Regional Growth", id: "Pertumbuhan Regional" },
	ClientsGrowthDesc {
		en: "Expanding our footprint to ensure every agricultural hub in Indonesia has access to world-class regulatory standards.",
		id: "Memperluas jangkauan kami agar setiap sentra pertanian di Indonesia mendapatkan standar regulasi kelas dunia.",
	},
	ClientsTotalPartners { en: "Total Partners", id: "Total Mitra" },

	AboutTitle { en: "About PT. ATS", id: "Tentang PT. ATS" },
	AboutSubtitle {
		en: "Your strategic partner for pesticide registration and agricultural regulatory compliance in Indonesia.",
		id: "Mitra strategis Anda dalam pendaftaran pestisida dan kepatuhan regulasi pertanian di Indonesia.",
	},
	AboutVisionTitle { en: "Our Vision", id: "Visi" },
	AboutVisionDesc {
		en: "To be a trusted pesticide registration consultant helping to accelerate the registration process with the highest regulatory standards.",
		id: "Menjadi konsultan pendaftaran pestisida terpercaya yang membantu mempercepat proses registrasi dengan standar regulasi tertinggi.",
	},
	AboutMissionTitle { en: "Our Mission", id: "Misi" },
	AboutServicesTitle { en: "Our Services", id: "Layanan Kami" },
	AboutServicesSubtitle {
		en: "Comprehensive solutions for your regulatory needs",
		id: "Solusi komprehensif untuk kebutuhan regulasi Anda",
	},

	StatusTitle { en: "Registration Status Portal", id: "Portal Status Registrasi" },
	StatusIntro {
		en: "Real-time tracking for your pesticide and fertilizer registration applications. Enter your ID below.",
		id: "Pelacakan langsung untuk permohonan registrasi pestisida dan pupuk Anda. Masukkan ID Anda di bawah.",
	},
	StatusIdLabel { en: "Registration ID", id: "ID Registrasi" },
	StatusPlaceholder { en: "e.g., AGR-2023-001", id: "mis. AGR-2023-001" },
	StatusEmptyId { en: "Please enter a registration ID.", id: "Silakan masukkan ID registrasi." },
	StatusTrack { en: "Track Application", id: "Lacak Permohonan" },
	StatusNotFound {
		en: "Registration ID not found. Please check and try again.",
		id: "ID registrasi tidak ditemukan. Silakan periksa dan coba lagi.",
	},
	StatusActive { en: "Active", id: "Aktif" },
	StatusCurrentStage { en: "Current Stage", id: "Tahap Saat Ini" },
	StatusLastUpdate { en: "Last Status Update", id: "Pembaruan Status Terakhir" },
	StatusFootnote {
		en: "Data is updated every 24 hours. For urgent inquiries, please contact our support team via WhatsApp.",
		id: "Data diperbarui setiap 24 jam. Untuk pertanyaan mendesak, silakan hubungi tim kami melalui WhatsApp.",
	},

	FooterReadyTitle { en: "Ready to Register Your Product?", id: "Siap Mendaftarkan Produk Anda?" },
	FooterReadyDesc {
		en: "Don't let regulatory hurdles slow your market entry. Partner with PT. ATS today.",
		id: "Jangan biarkan hambatan regulasi memperlambat masuknya pasar Anda. Bermitra dengan PT. ATS hari ini.",
	},
	FooterCta { en: "Get a Free Consultation", id: "Dapatkan Konsultasi Gratis" },
	FooterBrandDesc {
		en: "Agrilink Teknologi Solusi. Your trusted partner for pesticide and fertilizer registration in Indonesia.",
		id: "Agrilink Teknologi Solusi. Mitra terpercaya Anda untuk pendaftaran pestisida dan pupuk di Indonesia.",
	},
	FooterAddressTitle { en: "Office Address", id: "Alamat Kantor" },
	FooterContactTitle { en: "Contact Us", id: "Hubungi Kami" },
	FooterWhatsApp { en: "WhatsApp Available", id: "Tersedia WhatsApp" },
	FooterRights { en: "All rights reserved.", id: "Hak cipta dilindungi undang-undang." },
	FooterPrivacy { en: "Privacy", id: "Privasi" },
	FooterTerms { en: "Terms", id: "Ketentuan" },

	FabLabel { en: "Chat with Expert", id: "Chat dengan Ahli" },
}

/// One entry of the About page services grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceBlurb {
	pub title: &'static str,
	pub desc: &'static str,
}

const MISSION_EN: &[&str] = &[
	"Providing professional and timely pesticide registration consultation services.",
	"Assisting clients in fulfilling regulatory requirements completely and accurately.",
	"Providing the latest information on pesticide policies and regulations.",
	"Building sustainable partnerships with agrochemical companies and government agencies.",
];

const MISSION_ID: &[&str] = &[
	"Memberikan layanan konsultasi pendaftaran pestisida yang profesional dan tepat waktu.",
	"Mendampingi klien dalam memenuhi persyaratan regulasi secara lengkap dan akurat.",
	"Menyediakan informasi terbaru mengenai kebijakan dan regulasi pestisida.",
	"Membangun kemitraan yang berkelanjutan dengan perusahaan agrochemical dan instansi pemerintah.",
];

const SERVICES_EN: &[ServiceBlurb] = &[
	ServiceBlurb {
		title: "Registration Consultation",
		desc: "Pesticide registration and consultancy.",
	},
	ServiceBlurb {
		title: "Document Preparation",
		desc: "Preparation of technical and administrative documents according to regulatory requirements.",
	},
	ServiceBlurb {
		title: "Testing Assistance",
		desc: "Assistance with toxicity and residue testing processes.",
	},
	ServiceBlurb {
		title: "Regulatory Monitoring",
		desc: "Monitoring and updating on the latest government regulations.",
	},
	ServiceBlurb {
		title: "Compliance Training",
		desc: "Regulatory compliance training for client staff.",
	},
];

const SERVICES_ID: &[ServiceBlurb] = &[
	ServiceBlurb {
		title: "Konsultasi Registrasi",
		desc: "Konsultasi pendaftaran dan registrasi pestisida.",
	},
	ServiceBlurb {
		title: "Penyusunan Dokumen",
		desc: "Penyusunan dokumen teknis dan administratif sesuai persyaratan regulasi.",
	},
	ServiceBlurb {
		title: "Pendampingan Uji",
		desc: "Pendampingan proses uji toksisitas dan residue.",
	},
	ServiceBlurb {
		title: "Monitoring Regulasi",
		desc: "Monitoring dan update regulasi terbaru dari pemerintah.",
	},
	ServiceBlurb {
		title: "Pelatihan Kepatuhan",
		desc: "Pelatihan kepatuhan regulasi bagi staf perusahaan klien.",
	},
];

pub fn text(lang: Lang, key: Key) -> &'static str {
	key.entry()[lang.index()]
}

pub fn mission_list(lang: Lang) -> &'static [&'static str] {
	match lang {
		Lang::En => MISSION_EN,
		Lang::Id => MISSION_ID,
	}
}

pub fn service_list(lang: Lang) -> &'static [ServiceBlurb] {
	match lang {
		Lang::En => SERVICES_EN,
		Lang::Id => SERVICES_ID,
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn every_key_has_text_in_every_language() {
		for &key in Key::ALL {
			for lang in Lang::ALL {
				assert!(!text(lang, key).is_empty(), "{:?} missing for {:?}", key, lang);
			}
		}
	}

	#[test]
	fn known_labels_resolve() {
		let en: HashSet<_> = Key::ALL.iter().map(|&k| text(Lang::En, k)).collect();
		assert!(en.contains("Check Status"));
		assert_eq!(text(Lang::Id, Key::NavStatus), "Cek Status");
		assert_eq!(text(Lang::En, Key::HeroCtaPrimary), "Start Registration");
	}

	#[test]
	fn navigation_labels_differ_between_languages() {
		let nav = [
			Key::NavHome,
			Key::NavAbout,
			Key::NavServices,
			Key::NavClients,
			Key::NavStatus,
		];
		for key in nav {
			assert_ne!(text(Lang::En, key), text(Lang::Id, key));
		}
	}

	#[test]
	fn lists_line_up_across_languages() {
		assert_eq!(mission_list(Lang::En).len(), mission_list(Lang::Id).len());
		assert_eq!(service_list(Lang::En).len(), 5);
		assert_eq!(service_list(Lang::Id).len(), 5);
		assert_eq!(service_list(Lang::Id)[0].title, "Konsultasi Registrasi");
	}
}
