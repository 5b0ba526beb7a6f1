use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::components::particles::Particles;
use crate::components::reveal::{Reveal, RevealAnimation};
use crate::i18n::{Key, use_i18n};

const HERO_IMAGE: &str =
	"https://images.unsplash.com/photo-1625246333195-58197bd4773d?auto=format&fit=crop&q=80&w=2070";
const HERO_FALLBACK: &str =
	"https://images.unsplash.com/photo-1628352081506-83c43123ed6d?auto=format&fit=crop&q=80&w=2070";
const PARTNER_TILES: usize = 16;

struct WhyUsCard {
	icon: Icon,
	title: Key,
	desc: Key,
	tone: &'static str,
}

const WHY_US: [WhyUsCard; 3] = [
	WhyUsCard {
		icon: Icon::BadgeCheck,
		title: Key::WhyUsExpTitle,
		desc: Key::WhyUsExpDesc,
		tone: "tone-primary",
	},
	WhyUsCard {
		icon: Icon::Clock,
		title: Key::WhyUsSpeedTitle,
		desc: Key::WhyUsSpeedDesc,
		tone: "tone-secondary",
	},
	WhyUsCard {
		icon: Icon::Shield,
		title: Key::WhyUsCompTitle,
		desc: Key::WhyUsCompDesc,
		tone: "tone-primary",
	},
];

/// Landing page: hero, reasons to choose the firm, and the partner strip.
#[component]
pub fn Home() -> impl IntoView {
	let i18n = use_i18n();
	let hero_src = RwSignal::new(HERO_IMAGE);

	let cards = WHY_US
		.iter()
		.enumerate()
		.map(|(idx, card)| {
			let (title, desc) = (card.title, card.desc);
			view! {
				<Reveal animation=RevealAnimation::FadeUp delay={idx as u32 * 150}>
					<div class=format!("feature-card {}", card.tone)>
						<div class="feature-icon">
							<IconSvg icon=card.icon size=32 />
						</div>
						<h3>{move || i18n.t(title)}</h3>
						<p>{move || i18n.t(desc)}</p>
					</div>
				</Reveal>
			}
		})
		.collect_view();

	let partners = (1..=PARTNER_TILES)
		.map(|n| {
			view! {
				<a class="partner-tile" href="/clients">
					<span>{format!("PARTNER {n}")}</span>
				</a>
			}
		})
		.collect_view();

	view! {
		<div class="page home">
			<section class="home-hero">
				<div class="page-hero-backdrop">
					<img
						src=move || hero_src.get()
						alt="Modern Agriculture Technology Drone"
						loading="eager"
						fetchpriority="high"
						on:error=move |_| {
							if hero_src.get_untracked() != HERO_FALLBACK {
								hero_src.set(HERO_FALLBACK);
							}
						}
					/>
					<div class="home-hero-overlay"></div>
					<Particles />
				</div>
				<div class="page-hero-content home-hero-content">
					<h1>{move || i18n.t(Key::HeroTitle)}</h1>
					<p>{move || i18n.t(Key::HeroSubtitle)}</p>
					<div class="hero-actions">
						<a class="btn btn-secondary" href="/services/fertilizer">
							{move || i18n.t(Key::HeroCtaPrimary)}
							<IconSvg icon=Icon::ArrowRight size=20 />
						</a>
						<a class="btn btn-outline-light" href="/about">
							{move || i18n.t(Key::HeroCtaSecondary)}
						</a>
					</div>
				</div>
			</section>

			<section class="section why-us">
				<div class="section-heading">
					<h2>{move || i18n.t(Key::WhyUsTitle)}</h2>
					<div class="divider"></div>
				</div>
				<div class="grid grid-3">{cards}</div>
			</section>

			<section class="section partners">
				<h3>{move || i18n.t(Key::ClientsTitle)}</h3>
				<div class="partner-marquee">
					<div class="partner-track">{partners}</div>
				</div>
			</section>
		</div>
	}
}
