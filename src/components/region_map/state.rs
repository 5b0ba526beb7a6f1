use crate::data::{Region, RegionId};

use super::layout::{ADJACENCY, PLACEMENTS, build_links, build_nodes};
use super::selection::{PointerKind, SelectionEvent};
use super::types::{MapLink, MapNode};

/// Logical map space; everything is laid out in these units.
pub const MAP_WIDTH: f64 = 800.0;
pub const MAP_HEIGHT: f64 = 400.0;

/// Extra radius of a fully emphasised node, as a fraction of its base radius.
pub const EMPHASIS_GROWTH: f64 = 0.2;
/// Seconds for emphasis to go from baseline to full.
const EMPHASIS_DURATION: f64 = 0.3;

pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Map space -> canvas pixels: `screen = map * k + (x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl ViewTransform {
	/// Largest uniform scale that fits the map, centred.
	pub fn fit(width: f64, height: f64) -> Self {
		let k = (width / MAP_WIDTH).min(height / MAP_HEIGHT).max(f64::EPSILON);
		Self {
			x: (width - MAP_WIDTH * k) / 2.0,
			y: (height - MAP_HEIGHT * k) / 2.0,
			k,
		}
	}
}

pub struct RegionMapState {
	pub nodes: Vec<MapNode>,
	pub links: Vec<MapLink>,
	pub transform: ViewTransform,
	pub width: f64,
	pub height: f64,
	selected: Option<RegionId>,
	hovered: Option<RegionId>,
	emphasis: Vec<f64>,
}

impl RegionMapState {
	pub fn new(regions: &[Region], width: f64, height: f64) -> Self {
		let nodes = build_nodes(regions, PLACEMENTS);
		let links = build_links(&nodes, ADJACENCY);
		let emphasis = vec![0.0; nodes.len()];
		Self {
			nodes,
			links,
			transform: ViewTransform::fit(width, height),
			width,
			height,
			selected: None,
			hovered: None,
			emphasis,
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.transform = ViewTransform::fit(width, height);
	}

	pub fn screen_to_map(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Returns whether the selection changed.
	pub fn set_selected(&mut self, selected: Option<RegionId>) -> bool {
		if self.selected == selected {
			return false;
		}
		self.selected = selected;
		true
	}

	pub fn is_selected(&self, idx: usize) -> bool {
		self.selected.is_some() && self.selected == self.nodes.get(idx).map(|n| n.id())
	}

	/// Eased emphasis of node `idx`, 0 at baseline and 1 when fully selected.
	pub fn emphasis(&self, idx: usize) -> f64 {
		self.emphasis.get(idx).copied().map(ease_out_cubic).unwrap_or(0.0)
	}

	pub fn node_radius(&self, idx: usize) -> f64 {
		self.nodes[idx].base_radius() * (1.0 + EMPHASIS_GROWTH * self.emphasis(idx))
	}

	/// Paint order: the selected node last so it sits on top.
	pub fn draw_order(&self) -> Vec<usize> {
		let (mut order, raised): (Vec<usize>, Vec<usize>) =
			(0..self.nodes.len()).partition(|&idx| !self.is_selected(idx));
		order.extend(raised);
		order
	}

	/// Topmost node under a canvas pixel.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<RegionId> {
		let (mx, my) = self.screen_to_map(sx, sy);
		self.draw_order().into_iter().rev().find_map(|idx| {
			let node = &self.nodes[idx];
			let (dx, dy) = (node.x - mx, node.y - my);
			((dx * dx + dy * dy).sqrt() <= self.node_radius(idx)).then(|| node.id())
		})
	}

	/// Track the node under the pointer; yields an event only when it changes.
	pub fn pointer_moved(&mut self, sx: f64, sy: f64, kind: PointerKind) -> Option<SelectionEvent> {
		let hit = self.node_at_position(sx, sy);
		if hit == self.hovered {
			return None;
		}
		self.hovered = hit;
		Some(match hit {
			Some(id) => SelectionEvent::Enter(id),
			None => SelectionEvent::Leave(kind),
		})
	}

	pub fn pointer_left(&mut self, kind: PointerKind) -> Option<SelectionEvent> {
		self.hovered.take().map(|_| SelectionEvent::Leave(kind))
	}

	pub fn clicked(&self, sx: f64, sy: f64) -> Option<SelectionEvent> {
		self.node_at_position(sx, sy).map(SelectionEvent::Click)
	}

	/// Advance emphasis easing by `dt` seconds. Returns `true` while anything is still moving.
	pub fn tick(&mut self, dt: f64) -> bool {
		let step = dt / EMPHASIS_DURATION;
		let mut moving = false;
		for idx in 0..self.emphasis.len() {
			let target = if self.is_selected(idx) { 1.0 } else { 0.0 };
			let current = self.emphasis[idx];
			let next = if current < target {
				(current + step).min(target)
			} else {
				(current - step).max(target)
			};
			self.emphasis[idx] = next;
			moving |= next != target;
		}
		moving
	}

	/// Jump straight to the resting state for the current selection.
	pub fn settle(&mut self) {
		for idx in 0..self.emphasis.len() {
			self.emphasis[idx] = if self.is_selected(idx) { 1.0 } else { 0.0 };
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::REGIONS;

	fn state() -> RegionMapState {
		RegionMapState::new(REGIONS, MAP_WIDTH, MAP_HEIGHT)
	}

	fn node_pos(state: &RegionMapState, id: RegionId) -> (f64, f64) {
		let node = state.nodes.iter().find(|n| n.id() == id).unwrap();
		(node.x, node.y)
	}

	#[test]
	fn fit_centres_the_map() {
		let t = ViewTransform::fit(1600.0, 1000.0);
		assert_eq!(t.k, 2.0);
		assert_eq!(t.x, 0.0);
		assert_eq!(t.y, 100.0);
	}

	#[test]
	fn hit_test_uses_view_transform() {
		let mut s = state();
		s.resize(1600.0, 1000.0);
		let (x, y) = node_pos(&s, RegionId::NorthSumatra);
		let (sx, sy) = (x * 2.0, y * 2.0 + 100.0);
		assert_eq!(s.node_at_position(sx, sy), Some(RegionId::NorthSumatra));
		assert_eq!(s.node_at_position(5.0, 5.0), None);
	}

	#[test]
	fn selected_node_is_drawn_last_and_wins_hit_test() {
		let mut s = state();
		// Banten and Jakarta overlap; Jakarta is later in placement order.
		let (bx, by) = node_pos(&s, RegionId::Banten);
		let (jx, jy) = node_pos(&s, RegionId::Jakarta);
		let dist = ((jx - bx).powi(2) + (jy - by).powi(2)).sqrt();
		let t = 16.0 / dist;
		let (mx, my) = (bx + (jx - bx) * t, by + (jy - by) * t);
		assert_eq!(s.node_at_position(mx, my), Some(RegionId::Jakarta));

		s.set_selected(Some(RegionId::Banten));
		let order = s.draw_order();
		assert_eq!(s.nodes[*order.last().unwrap()].id(), RegionId::Banten);
		assert_eq!(s.node_at_position(mx, my), Some(RegionId::Banten));
	}

	#[test]
	fn pointer_events_fire_on_changes_only() {
		let mut s = state();
		let (x, y) = node_pos(&s, RegionId::EastJava);
		assert_eq!(
			s.pointer_moved(x, y, PointerKind::Hover),
			Some(SelectionEvent::Enter(RegionId::EastJava))
		);
		assert_eq!(s.pointer_moved(x + 1.0, y, PointerKind::Hover), None);
		assert_eq!(
			s.pointer_moved(790.0, 20.0, PointerKind::Hover),
			Some(SelectionEvent::Leave(PointerKind::Hover))
		);
		assert_eq!(s.pointer_left(PointerKind::Hover), None);
	}

	#[test]
	fn pointer_left_after_hover_emits_leave() {
		let mut s = state();
		let (x, y) = node_pos(&s, RegionId::Lampung);
		s.pointer_moved(x, y, PointerKind::Hover);
		assert_eq!(
			s.pointer_left(PointerKind::Hover),
			Some(SelectionEvent::Leave(PointerKind::Hover))
		);
		assert_eq!(s.pointer_left(PointerKind::Hover), None);
	}

	#[test]
	fn click_selects_node_under_pointer() {
		let s = state();
		let (x, y) = node_pos(&s, RegionId::Jakarta);
		assert_eq!(s.clicked(x + 3.0, y), Some(SelectionEvent::Click(RegionId::Jakarta)));
		assert_eq!(s.clicked(700.0, 380.0), None);
	}

	#[test]
	fn emphasis_eases_in_and_settles() {
		let mut s = state();
		s.set_selected(Some(RegionId::EastJava));
		let idx = s.nodes.iter().position(|n| n.id() == RegionId::EastJava).unwrap();
		let base = s.nodes[idx].base_radius();

		assert!(s.tick(0.1));
		assert!(s.node_radius(idx) > base);
		assert!(!s.tick(1.0));
		assert!((s.node_radius(idx) - base * 1.2).abs() < 1e-9);

		s.set_selected(None);
		assert!(!s.tick(1.0));
		assert_eq!(s.node_radius(idx), base);
	}

	#[test]
	fn settle_skips_animation() {
		let mut s = state();
		s.set_selected(Some(RegionId::Jakarta));
		s.settle();
		assert!(!s.tick(0.016));
	}
}
