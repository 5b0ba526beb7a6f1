use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::config::SiteConfig;
use crate::dom;
use crate::i18n::{Key, use_i18n};

/// Floating chat button pinned to the bottom-right corner.
#[component]
pub fn WhatsAppFab() -> impl IntoView {
	let i18n = use_i18n();
	let url = expect_context::<SiteConfig>().whatsapp_url(None);
	view! {
		<button
			class="whatsapp-fab"
			aria-label=move || i18n.t(Key::FabLabel)
			on:click=move |_| dom::open_in_new_tab(&url)
		>
			<IconSvg icon=Icon::MessageCircle />
			<span class="whatsapp-fab-label">{move || i18n.t(Key::FabLabel)}</span>
		</button>
	}
}
