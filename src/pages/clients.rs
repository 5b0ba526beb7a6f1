use leptos::prelude::*;
use log::debug;

use crate::components::region_detail::RegionDetail;
use crate::components::region_list::RegionList;
use crate::components::region_map::{RegionMap, Selection, SelectionEvent};
use crate::components::reveal::{Reveal, RevealAnimation};
use crate::data::{REGIONS, Region, RegionId};
use crate::i18n::{Key, use_i18n};

const HERO_IMAGE: &str =
	"https://images.unsplash.com/photo-1595841696677-6489ff3f8cd1?auto=format&fit=crop&q=80&w=2000";
const TOTAL_PARTNERS: &str = "40+";

/// Feed a map or list event into the page's selection.
fn dispatch(selection: RwSignal<Selection>, regions: &[Region], event: SelectionEvent) {
	let mut changed = false;
	selection.update(|s| changed = s.apply(event, regions));
	if changed {
		debug!("Selection -> {:?}", selection.get_untracked().selected().map(RegionId::code));
	}
}

/// Client footprint: the region map and list share one selection owned here.
#[component]
pub fn Clients() -> impl IntoView {
	let i18n = use_i18n();
	let selection = RwSignal::new(Selection::default());
	let selected = Signal::derive(move || selection.get().selected());
	let on_event = Callback::new(move |event: SelectionEvent| dispatch(selection, REGIONS, event));

	view! {
		<div class="page clients">
			<section class="clients-hero">
				<div class="page-hero-backdrop">
					<img src=HERO_IMAGE alt="Global Agriculture Partnership" class="is-faded" />
					<div class="page-hero-overlay"></div>
				</div>
				<div class="page-hero-content is-centered">
					<Reveal animation=RevealAnimation::FadeIn>
						<span class="hero-badge">{move || i18n.t(Key::ClientsBadge)}</span>
						<h1>{move || i18n.t(Key::ClientsHeading)}</h1>
						<p>{move || i18n.t(Key::ClientsIntro)}</p>
					</Reveal>
				</div>
			</section>

			<div class="container overlap clients-layout">
				<Reveal animation=RevealAnimation::ScaleIn class="clients-map-column">
					<div class="card map-card">
						<div class="map-frame">
							<RegionMap regions=REGIONS selected=selected on_event=on_event />
						</div>
						<RegionDetail regions=REGIONS selected=selected />
					</div>
				</Reveal>

				<div class="clients-side">
					<Reveal animation=RevealAnimation::SlideRight>
						<div class="card presence-card">
							<h3>{move || i18n.t(Key::ClientsMarketPresence)}</h3>
							<div class="region-rows">
								<RegionList regions=REGIONS selected=selected on_event=on_event />
							</div>
						</div>
					</Reveal>

					<Reveal animation=RevealAnimation::SlideRight delay=200>
						<div class="growth-card">
							<h4>{move || i18n.t(Key::ClientsGrowthTitle)}</h4>
							<p>{move || i18n.t(Key::ClientsGrowthDesc)}</p>
							<div class="growth-stat">
								<span class="growth-number">{TOTAL_PARTNERS}</span>
								<span class="growth-label">{move || i18n.t(Key::ClientsTotalPartners)}</span>
							</div>
						</div>
					</Reveal>
				</div>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::region_map::PointerKind;

	#[test]
	fn map_and_list_events_drive_one_selection() {
		Owner::new().with(|| {
			let selection = RwSignal::new(Selection::default());
			// Row hover, then a node click elsewhere.
			dispatch(selection, REGIONS, SelectionEvent::Enter(RegionId::Jakarta));
			dispatch(selection, REGIONS, SelectionEvent::Click(RegionId::EastJava));
			assert_eq!(selection.get_untracked().selected(), Some(RegionId::EastJava));

			dispatch(selection, REGIONS, SelectionEvent::Leave(PointerKind::Touch));
			assert_eq!(selection.get_untracked().selected(), Some(RegionId::EastJava));

			dispatch(selection, REGIONS, SelectionEvent::Leave(PointerKind::Hover));
			assert_eq!(selection.get_untracked(), Selection::NoSelection);
		});
	}
}
