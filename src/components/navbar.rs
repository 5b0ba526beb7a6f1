use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::icon::{Icon, IconSvg};
use crate::config::SiteConfig;
use crate::data::content::{NAV_ITEMS, NavItem};
use crate::i18n::{Key, Lang, use_i18n};

fn link_class(base: &str, active: bool) -> String {
	if active {
		format!("{base} is-active")
	} else {
		base.to_string()
	}
}

/// Icon and accessible label of the mobile menu button.
fn menu_toggle(open: bool) -> (Icon, Key) {
	if open {
		(Icon::X, Key::NavMenuClose)
	} else {
		(Icon::Menu, Key::NavMenuOpen)
	}
}

/// Four-leaf mark shown when `/logo.png` is missing.
#[component]
fn LogoMark(name: &'static str, legal_name: &'static str) -> impl IntoView {
	view! {
		<div class="logo-fallback">
			<svg class="logo-mark" viewBox="0 0 100 100" fill="none" aria-hidden="true">
				<path d="M50 50 C50 25 25 25 25 50 C25 75 50 75 50 50 Z" fill="#c0ca33" transform="translate(-10, -10)" opacity="0.9" />
				<path d="M50 50 C75 50 75 25 50 25 C25 25 25 50 50 50 Z" fill="#0288d1" transform="translate(10, -10)" />
				<path d="M50 50 C25 50 25 75 50 75 C75 75 75 50 50 50 Z" fill="#15803d" transform="translate(-10, 10)" />
				<path d="M50 50 C50 75 75 75 75 50 C75 25 50 25 50 50 Z" fill="#166534" transform="translate(10, 10)" opacity="0.8" />
			</svg>
			<div class="logo-text">
				<span class="logo-name">{name}</span>
				<span class="logo-legal">{legal_name}</span>
			</div>
		</div>
	}
}

#[component]
fn LangSwitch(#[prop(optional)] long: bool) -> impl IntoView {
	let i18n = use_i18n();
	[Lang::Id, Lang::En]
		.into_iter()
		.map(|lang| {
			let label = match (long, lang) {
				(false, _) => lang.code(),
				(true, Lang::Id) => "INDONESIA",
				(true, Lang::En) => "ENGLISH",
			};
			view! {
				<button
					class=move || link_class("lang-button", i18n.lang() == lang)
					on:click=move |_| i18n.set_lang(lang)
				>
					{label}
				</button>
			}
		})
		.collect_view()
}

/// Dropdown entry on desktop; opens while hovered.
#[component]
fn DesktopDropdown(item: NavItem, open: RwSignal<Option<Key>>) -> impl IntoView {
	let i18n = use_i18n();
	let pathname = use_location().pathname;
	let is_open = move || open.get() == Some(item.label);
	view! {
		<div
			class="nav-item has-dropdown"
			on:mouseenter=move |_| open.set(Some(item.label))
			on:mouseleave=move |_| open.set(None)
		>
			<button class=move || link_class("nav-link", pathname.with(|p| item.is_active(p)))>
				{move || i18n.t(item.label)}
				<span class=move || if is_open() { "chevron is-open" } else { "chevron" }>
					<IconSvg icon=Icon::ChevronDown size=16 />
				</span>
			</button>
			<Show when=is_open>
				<div class="dropdown">
					{item
						.children
						.iter()
						.map(|child| {
							let child = *child;
							view! {
								<a class="dropdown-link" href=child.path on:click=move |_| open.set(None)>
									{move || i18n.t(child.label)}
								</a>
							}
						})
						.collect_view()}
				</div>
			</Show>
		</div>
	}
}

#[component]
pub fn Navbar() -> impl IntoView {
	let i18n = use_i18n();
	let config = expect_context::<SiteConfig>();
	let (name, legal_name) = (config.company_name, config.company_legal_name);
	let pathname = use_location().pathname;
	let menu_open = RwSignal::new(false);
	let dropdown = RwSignal::new(None::<Key>);
	let logo_failed = RwSignal::new(false);

	// Any navigation closes the mobile menu.
	Effect::new(move |_| {
		pathname.track();
		menu_open.set(false);
	});

	let logo = move || {
		if logo_failed.get() {
			view! { <LogoMark name=name legal_name=legal_name /> }.into_any()
		} else {
			view! {
				<img
					class="logo-image"
					src="/logo.png"
					alt=format!("{name} - {legal_name}")
					width="80"
					height="80"
					on:error=move |_| logo_failed.set(true)
				/>
			}
			.into_any()
		}
	};

	let desktop_links = NAV_ITEMS
		.iter()
		.map(|item| {
			let item = *item;
			if item.children.is_empty() {
				view! {
					<div class="nav-item">
						<a
							class=move || link_class("nav-link", pathname.with(|p| item.is_active(p)))
							href=item.path
						>
							{move || i18n.t(item.label)}
						</a>
					</div>
				}
				.into_any()
			} else {
				view! { <DesktopDropdown item=item open=dropdown /> }.into_any()
			}
		})
		.collect_view();

	let mobile_links = move || {
		NAV_ITEMS
			.iter()
			.map(|item| {
				let item = *item;
				if item.children.is_empty() {
					view! {
						<a
							class=move || link_class("mobile-link", pathname.with(|p| item.is_active(p)))
							href=item.path
							on:click=move |_| menu_open.set(false)
						>
							{move || i18n.t(item.label)}
						</a>
					}
					.into_any()
				} else {
					view! {
						<div class="mobile-group">
							<div class="mobile-group-title">{move || i18n.t(item.label)}</div>
							{item
								.children
								.iter()
								.map(|child| {
									let child = *child;
									view! {
										<a
											class="mobile-link is-nested"
											href=child.path
											on:click=move |_| menu_open.set(false)
										>
											{move || i18n.t(child.label)}
										</a>
									}
								})
								.collect_view()}
						</div>
					}
					.into_any()
				}
			})
			.collect_view()
	};

	view! {
		<nav class="navbar">
			<div class="navbar-inner">
				<a class="logo" href="/">
					{logo}
				</a>

				<div class="nav-desktop">
					{desktop_links}
					<div class="lang-switch" title=move || i18n.t(Key::NavLang)>
						<IconSvg icon=Icon::Globe size=16 />
						<LangSwitch />
					</div>
					<a class="btn btn-secondary nav-cta" href="/status">
						{move || i18n.t(Key::NavStatus)}
					</a>
				</div>

				<button
					class="menu-toggle"
					aria-label=move || i18n.t(menu_toggle(menu_open.get()).1)
					on:click=move |_| menu_open.update(|open| *open = !*open)
				>
					{move || {
						let icon = menu_toggle(menu_open.get()).0;
						view! { <IconSvg icon=icon /> }
					}}
				</button>
			</div>

			<Show when=move || menu_open.get()>
				<div class="nav-mobile">
					{mobile_links()}
					<div class="mobile-lang" title=move || i18n.t(Key::NavLang)>
						<LangSwitch long=true />
					</div>
					<a class="btn btn-secondary mobile-cta" href="/status" on:click=move |_| menu_open.set(false)>
						{move || i18n.t(Key::NavStatus)}
					</a>
				</div>
			</Show>
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::i18n::text;

	#[test]
	fn active_links_get_marker_class() {
		assert_eq!(link_class("nav-link", true), "nav-link is-active");
		assert_eq!(link_class("nav-link", false), "nav-link");
	}

	#[test]
	fn menu_button_is_labelled_as_a_menu() {
		assert_eq!(menu_toggle(false), (Icon::Menu, Key::NavMenuOpen));
		assert_eq!(menu_toggle(true), (Icon::X, Key::NavMenuClose));
		assert_eq!(text(Lang::En, menu_toggle(false).1), "Open menu");
		assert_eq!(text(Lang::Id, menu_toggle(true).1), "Tutup menu");
	}
}
