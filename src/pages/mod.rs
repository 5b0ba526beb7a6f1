use leptos::prelude::*;

pub mod about;
pub mod clients;
pub mod fertilizer;
pub mod home;
pub mod intellectual_property;
pub mod news;
pub mod pesticide;
pub mod status_portal;

/// Full-width banner with a background photo and a dimming overlay.
#[component]
fn PageHero(
	image: &'static str,
	alt: &'static str,
	/// Extra class on the section, used to pick the overlay tint.
	#[prop(into, optional)]
	class: String,
	children: Children,
) -> impl IntoView {
	view! {
		<section class=format!("page-hero {class}")>
			<div class="page-hero-backdrop">
				<img src=image alt=alt loading="eager" />
				<div class="page-hero-overlay"></div>
			</div>
			<div class="page-hero-content">{children()}</div>
		</section>
	}
}
