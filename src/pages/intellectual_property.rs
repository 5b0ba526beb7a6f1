use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use log::debug;

use crate::components::icon::{Icon, IconSvg};
use crate::data::content::{IP_BENEFITS, IP_SERVICES};

use super::PageHero;

const HERO_IMAGE: &str =
	"https://images.unsplash.com/photo-1589829085413-56de8ae18c73?auto=format&fit=crop&q=80&w=2070";
const BENEFIT_TONES: [&str; 3] = ["tone-red", "tone-blue", "tone-green"];

#[component]
pub fn IntellectualProperty() -> impl IntoView {
	let navigate = use_navigate();

	let benefits = IP_BENEFITS
		.iter()
		.zip(BENEFIT_TONES)
		.map(|(benefit, tone)| {
			view! {
				<div class="benefit">
					<div class=format!("benefit-icon {tone}")>
						<IconSvg icon=benefit.icon size=28 />
					</div>
					<div>
						<h3>{benefit.title}</h3>
						<p>{benefit.desc}</p>
					</div>
				</div>
			}
		})
		.collect_view();

	let services = IP_SERVICES
		.iter()
		.map(|service| {
			let navigate = navigate.clone();
			let title = service.title;
			view! {
				<div
					class="ip-service"
					on:click=move |_| {
						debug!("IP service {title} -> status portal");
						navigate("/status", Default::default());
					}
				>
					<div class="ip-service-head">
						<span>{title}</span>
						<IconSvg icon=service.icon size=20 />
					</div>
					<p>{service.desc}</p>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="page intellectual-property">
			<PageHero image=HERO_IMAGE alt="Intellectual Property Law" class="tint-slate">
				<span class="hero-badge">
					<IconSvg icon=Icon::ShieldCheck size=16 />
					"New Service"
				</span>
				<h1>"Intellectual Property Protection"</h1>
				<p>
					"Secure your agricultural brand identity and formulations. We assist with Trademark (HAKI) and Patent registration to protect your market share."
				</p>
			</PageHero>

			<div class="container">
				<div class="grid grid-2 ip-layout">
					<div>
						<h2>"Why Register Your Brand?"</h2>
						<div class="benefit-list">{benefits}</div>
					</div>
					<div class="card ip-services">
						<h3>"Our IP Services"</h3>
						<div class="ip-service-list">{services}</div>
						<div class="ip-services-footer">
							<a href="/status">"Combine with Product Registration →"</a>
						</div>
					</div>
				</div>
			</div>
		</div>
	}
}
