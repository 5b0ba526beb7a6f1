use leptos::prelude::*;
use web_sys::PointerEvent;

use crate::components::region_map::{PointerKind, SelectionEvent};
use crate::data::{Region, RegionId, by_count_desc};

fn row_class(selected: bool) -> &'static str {
	if selected {
		"region-row is-selected"
	} else {
		"region-row"
	}
}

/// The list twin of [`crate::components::region_map::RegionMap`]; same selection, same events.
#[component]
pub fn RegionList(
	regions: &'static [Region],
	#[prop(into)] selected: Signal<Option<RegionId>>,
	on_event: Callback<SelectionEvent>,
) -> impl IntoView {
	by_count_desc(regions)
		.into_iter()
		.map(|region| {
			let id = region.id;
			view! {
				<div
					class=move || row_class(selected.get() == Some(id))
					data-region=id.code()
					on:click=move |_| on_event.run(SelectionEvent::Click(id))
					on:pointerenter=move |ev: PointerEvent| {
						if PointerKind::from_pointer_type(&ev.pointer_type()) == PointerKind::Hover {
							on_event.run(SelectionEvent::Enter(id));
						}
					}
					on:pointerleave=move |ev: PointerEvent| {
						let kind = PointerKind::from_pointer_type(&ev.pointer_type());
						on_event.run(SelectionEvent::Leave(kind));
					}
				>
					<div class="region-row-head">
						<h4>{region.name}</h4>
						<span class="region-count">{region.count}</span>
					</div>
					<p>{region.description}</p>
				</div>
			}
		})
		.collect_view()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::region_map::Selection;
	use crate::data::REGIONS;

	#[test]
	fn one_row_per_region() {
		assert_eq!(by_count_desc(REGIONS).len(), REGIONS.len());
	}

	#[test]
	fn row_and_node_agree_on_selection() {
		let mut selection = Selection::default();
		selection.apply(SelectionEvent::Enter(RegionId::NorthSumatra), REGIONS);
		for region in by_count_desc(REGIONS) {
			let row_selected =
				row_class(selection.selected() == Some(region.id)) == "region-row is-selected";
			assert_eq!(row_selected, selection.is_selected(region.id));
		}
	}
}
