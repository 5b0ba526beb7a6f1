use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::components::icon::{Icon, IconSvg};
use crate::config::SiteConfig;
use crate::dom;
use crate::i18n::{Key, use_i18n};

fn placeholder_notice(title: &str) -> String {
	format!("{title} page is currently under development.")
}

#[component]
pub fn Footer() -> impl IntoView {
	let i18n = use_i18n();
	let config = expect_context::<SiteConfig>();
	let consult_url = {
		let message = String::from(js_sys::encode_uri_component(config.consultation_message));
		config.whatsapp_url(Some(&message))
	};
	let year = js_sys::Date::new_0().get_full_year();
	let placeholder = |title: &'static str| {
		move |ev: MouseEvent| {
			ev.prevent_default();
			dom::alert(&placeholder_notice(title));
		}
	};

	view! {
		<footer class="footer">
			<div class="footer-cta">
				<h2>{move || i18n.t(Key::FooterReadyTitle)}</h2>
				<p>{move || i18n.t(Key::FooterReadyDesc)}</p>
				<button class="btn btn-light" on:click=move |_| dom::open_in_new_tab(&consult_url)>
					{move || i18n.t(Key::FooterCta)}
				</button>
			</div>

			<div class="footer-body">
				<div class="footer-brand">
					<span class="footer-name">{config.company_name}</span>
					<p>{move || i18n.t(Key::FooterBrandDesc)}</p>
				</div>
				<div class="footer-columns">
					<div>
						<h4>{move || i18n.t(Key::FooterAddressTitle)}</h4>
						<div class="footer-line">
							<IconSvg icon=Icon::MapPin size=20 />
							<p>
								{config
									.address_lines
									.iter()
									.map(|line| view! { {*line}<br /> })
									.collect_view()}
							</p>
						</div>
					</div>
					<div>
						<h4>{move || i18n.t(Key::FooterContactTitle)}</h4>
						<ul class="footer-contacts">
							<li>
								<IconSvg icon=Icon::Phone size=20 />
								<span>{config.phone_display}</span>
							</li>
							<li>
								<IconSvg icon=Icon::Mail size=20 />
								<span>{config.email}</span>
							</li>
							<li>
								<IconSvg icon=Icon::MessageCircle size=20 />
								<span>{move || i18n.t(Key::FooterWhatsApp)}</span>
							</li>
						</ul>
					</div>
				</div>
			</div>

			<div class="footer-bottom">
				<p>{format!("© {year} {}. ", config.company_name)} {move || i18n.t(Key::FooterRights)}</p>
				<div class="footer-links">
					<a href="#" on:click=placeholder("Privacy Policy")>
						{move || i18n.t(Key::FooterPrivacy)}
					</a>
					<a href="#" on:click=placeholder("Terms of Service")>
						{move || i18n.t(Key::FooterTerms)}
					</a>
				</div>
			</div>
		</footer>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn placeholder_notice_names_the_page() {
		assert_eq!(
			placeholder_notice("Privacy Policy"),
			"Privacy Policy page is currently under development."
		);
	}
}
