use leptos::prelude::*;

use crate::data::{Region, RegionId, find_region};
use crate::i18n::{Key, use_i18n};

/// Floating card describing the selected region; renders nothing without a selection.
#[component]
pub fn RegionDetail(
	regions: &'static [Region],
	#[prop(into)] selected: Signal<Option<RegionId>>,
) -> impl IntoView {
	let i18n = use_i18n();
	move || {
		let region = selected.get().and_then(|id| find_region(regions, id))?;
		Some(view! {
			<div class="region-detail">
				<h4>{region.name}</h4>
				<p class="region-detail-desc">{region.description}</p>
				<span class="eyebrow">{move || i18n.t(Key::ClientsKeyPortfolio)}</span>
				<div class="chip-row">
					{region
						.clients
						.iter()
						.map(|client| view! { <span class="chip">{*client}</span> })
						.collect_view()}
				</div>
			</div>
		})
	}
}
