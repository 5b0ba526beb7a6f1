//! Client-side rendered company site for PT. ATS: service pages, a regional
//! client map and a registration status portal.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod config;
mod data;
mod dom;
mod i18n;
mod pages;
mod status;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::whatsapp_fab::WhatsAppFab;
use crate::config::SiteConfig;
use crate::i18n::provide_i18n;

// Top-Level pages
use crate::pages::about::About;
use crate::pages::clients::Clients;
use crate::pages::fertilizer::Fertilizer;
use crate::pages::home::Home;
use crate::pages::intellectual_property::IntellectualProperty;
use crate::pages::news::News;
use crate::pages::pesticide::Pesticide;
use crate::pages::status_portal::StatusPortal;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// The site shell: shared context, page chrome and routes.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let config = SiteConfig::default();
	let lang = config.initial_lang(dom::served_lang().as_deref());
	let i18n = provide_i18n(lang);
	let title = format!("{} - {}", config.company_name, config.company_legal_name);
	info!("Starting {title} in {}", lang.code());
	provide_context(config);

	view! {
		<Html attr:lang=move || i18n.lang().html_lang() attr:dir="ltr" />

		<Title text=title />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<div class="app-shell">
				<Navbar />
				<main class="app-main">
					<Routes fallback=|| view! { <Redirect path="/" /> }>
						<Route path=path!("/") view=Home />
						<Route path=path!("/about") view=About />
						<Route path=path!("/services") view=|| view! { <Redirect path="/services/fertilizer" /> } />
						<Route path=path!("/services/fertilizer") view=Fertilizer />
						<Route path=path!("/services/pesticide") view=Pesticide />
						<Route path=path!("/services/ip") view=IntellectualProperty />
						<Route path=path!("/clients") view=Clients />
						<Route path=path!("/news") view=News />
						<Route path=path!("/status") view=StatusPortal />
					</Routes>
				</main>
				<Footer />
				<WhatsAppFab />
			</div>
		</Router>
	}
}
