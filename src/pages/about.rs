use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::i18n::{Key, use_i18n};

use super::PageHero;

const HERO_IMAGE: &str =
	"https://images.unsplash.com/photo-1552664730-d307ca884978?auto=format&fit=crop&q=80&w=2070";

#[component]
pub fn About() -> impl IntoView {
	let i18n = use_i18n();

	let missions = move || {
		i18n.mission_list()
			.iter()
			.map(|mission| {
				view! {
					<li>
						<IconSvg icon=Icon::CheckCircle size=20 class="text-accent" />
						<span>{*mission}</span>
					</li>
				}
			})
			.collect_view()
	};

	let services = move || {
		i18n.service_list()
			.iter()
			.enumerate()
			.map(|(idx, service)| {
				view! {
					<div class="service-item">
						<div class="service-icon">
							<IconSvg icon=Icon::for_service(idx) />
						</div>
						<div>
							<h3>{service.title}</h3>
							<p>{service.desc}</p>
						</div>
					</div>
				}
			})
			.collect_view()
	};

	view! {
		<div class="page about">
			<PageHero image=HERO_IMAGE alt="Team Meeting" class="is-centered">
				<h1>{move || i18n.t(Key::AboutTitle)}</h1>
				<p>{move || i18n.t(Key::AboutSubtitle)}</p>
			</PageHero>

			<div class="container overlap">
				<div class="grid grid-2">
					<div class="card accent-top-secondary">
						<div class="card-title-row">
							<span class="card-badge tone-secondary">
								<IconSvg icon=Icon::Target size=32 />
							</span>
							<h2>{move || i18n.t(Key::AboutVisionTitle)}</h2>
						</div>
						<blockquote class="vision">
							{move || format!("\"{}\"", i18n.t(Key::AboutVisionDesc))}
						</blockquote>
					</div>
					<div class="card accent-top-primary">
						<div class="card-title-row">
							<span class="card-badge tone-primary">
								<IconSvg icon=Icon::Award size=32 />
							</span>
							<h2>{move || i18n.t(Key::AboutMissionTitle)}</h2>
						</div>
						<ul class="mission-list">{missions}</ul>
					</div>
				</div>

				<div class="card services-panel">
					<div class="services-banner">
						<h2>{move || i18n.t(Key::AboutServicesTitle)}</h2>
						<p>{move || i18n.t(Key::AboutServicesSubtitle)}</p>
					</div>
					<div class="grid grid-3 services-grid">{services}</div>
				</div>
			</div>
		</div>
	}
}
