use crate::data::{Region, RegionId, find_region};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
	/// Mouse or pen: hover is meaningful and leaving clears the selection.
	Hover,
	Touch,
}

impl PointerKind {
	/// Classify a `PointerEvent.pointerType` value.
	pub fn from_pointer_type(pointer_type: &str) -> Self {
		if pointer_type == "touch" {
			PointerKind::Touch
		} else {
			PointerKind::Hover
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
	Enter(RegionId),
	Leave(PointerKind),
	Click(RegionId),
}

/// The one highlighted region, shared by the map and the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
	#[default]
	NoSelection,
	Selected(RegionId),
}

impl Selection {
	pub fn selected(&self) -> Option<RegionId> {
		match self {
			Selection::NoSelection => None,
			Selection::Selected(id) => Some(*id),
		}
	}

	pub fn is_selected(&self, id: RegionId) -> bool {
		self.selected() == Some(id)
	}

	/// Apply a pointer event; returns whether the selection changed.
	///
	/// Ids not present in `regions` are ignored so the selection never points
	/// at a region that does not exist.
	pub fn apply(&mut self, event: SelectionEvent, regions: &[Region]) -> bool {
		let next = match event {
			SelectionEvent::Enter(id) | SelectionEvent::Click(id) => {
				if find_region(regions, id).is_none() {
					return false;
				}
				Selection::Selected(id)
			}
			SelectionEvent::Leave(PointerKind::Touch) => return false,
			SelectionEvent::Leave(PointerKind::Hover) => Selection::NoSelection,
		};
		if next == *self {
			return false;
		}
		*self = next;
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::REGIONS;

	#[test]
	fn enter_then_leave_returns_to_no_selection() {
		let mut selection = Selection::default();
		assert!(selection.apply(SelectionEvent::Enter(RegionId::Lampung), REGIONS));
		assert_eq!(selection, Selection::Selected(RegionId::Lampung));
		assert!(selection.apply(SelectionEvent::Leave(PointerKind::Hover), REGIONS));
		assert_eq!(selection, Selection::NoSelection);
	}

	#[test]
	fn touch_leave_keeps_selection() {
		let mut selection = Selection::default();
		selection.apply(SelectionEvent::Click(RegionId::Banten), REGIONS);
		assert!(!selection.apply(SelectionEvent::Leave(PointerKind::Touch), REGIONS));
		assert!(selection.is_selected(RegionId::Banten));
	}

	#[test]
	fn later_event_wins_and_only_one_region_is_selected() {
		let mut selection = Selection::default();
		selection.apply(SelectionEvent::Enter(RegionId::Jakarta), REGIONS);
		selection.apply(SelectionEvent::Click(RegionId::EastJava), REGIONS);
		let highlighted: Vec<_> = REGIONS
			.iter()
			.filter(|r| selection.is_selected(r.id))
			.map(|r| r.id)
			.collect();
		assert_eq!(highlighted, vec![RegionId::EastJava]);
	}

	#[test]
	fn unknown_region_is_ignored() {
		let subset = &REGIONS[..1];
		let mut selection = Selection::default();
		assert!(!selection.apply(SelectionEvent::Enter(RegionId::EastJava), subset));
		assert_eq!(selection, Selection::NoSelection);
	}

	#[test]
	fn repeated_enter_is_not_a_change() {
		let mut selection = Selection::default();
		assert!(selection.apply(SelectionEvent::Enter(RegionId::Jakarta), REGIONS));
		assert!(!selection.apply(SelectionEvent::Enter(RegionId::Jakarta), REGIONS));
	}

	#[test]
	fn pointer_type_classification() {
		assert_eq!(PointerKind::from_pointer_type("touch"), PointerKind::Touch);
		assert_eq!(PointerKind::from_pointer_type("mouse"), PointerKind::Hover);
		assert_eq!(PointerKind::from_pointer_type("pen"), PointerKind::Hover);
	}
}
