use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::layout::ISLANDS;
use super::state::RegionMapState;

const ISLAND_FILL: &str = "#f1f5f9";
const ISLAND_STROKE: &str = "#cbd5e1";
const LINK_COLOR: &str = "#15803d";
const LABEL_COLOR: &str = "#1e293b";
const BASE_STROKE: (f64, f64, f64) = (255.0, 255.0, 255.0);
const SELECTED_STROKE: (f64, f64, f64) = (2.0, 136.0, 209.0);

fn lerp(a: f64, b: f64, t: f64) -> f64 {
	a + (b - a) * t
}

/// Node outline colour, white at baseline and `#0288d1` when selected.
pub fn stroke_color(t: f64) -> String {
	format!(
		"rgb({}, {}, {})",
		lerp(BASE_STROKE.0, SELECTED_STROKE.0, t).round(),
		lerp(BASE_STROKE.1, SELECTED_STROKE.1, t).round(),
		lerp(BASE_STROKE.2, SELECTED_STROKE.2, t).round(),
	)
}

pub fn render(state: &RegionMapState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_islands(ctx);
	draw_links(state, ctx);
	for idx in state.draw_order() {
		draw_node(state, ctx, idx);
	}
	ctx.restore();
}

fn draw_islands(ctx: &CanvasRenderingContext2d) {
	ctx.set_global_alpha(0.6);
	ctx.set_fill_style_str(ISLAND_FILL);
	ctx.set_stroke_style_str(ISLAND_STROKE);
	ctx.set_line_width(1.5);
	for island in ISLANDS {
		let Some((&(x0, y0), rest)) = island.outline.split_first() else {
			continue;
		};
		ctx.begin_path();
		ctx.move_to(x0, y0);
		for &(x, y) in rest {
			ctx.line_to(x, y);
		}
		ctx.close_path();
		ctx.fill();
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_links(state: &RegionMapState, ctx: &CanvasRenderingContext2d) {
	ctx.set_global_alpha(0.3);
	ctx.set_stroke_style_str(LINK_COLOR);
	ctx.set_line_width(1.5);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(4.0),
		&JsValue::from_f64(4.0),
	));
	for link in &state.links {
		let (a, b) = (&state.nodes[link.source], &state.nodes[link.target]);
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.set_global_alpha(1.0);
}

fn draw_node(state: &RegionMapState, ctx: &CanvasRenderingContext2d, idx: usize) {
	let node = &state.nodes[idx];
	let t = state.emphasis(idx);
	let (x, y) = (node.x, node.y);

	// halo
	ctx.set_global_alpha(0.15);
	ctx.begin_path();
	let _ = ctx.arc(x, y, node.halo_radius(), 0.0, 2.0 * PI);
	ctx.set_fill_style_str(node.color);
	ctx.fill();
	ctx.set_global_alpha(1.0);

	ctx.save();
	ctx.set_shadow_color("rgba(0, 0, 0, 0.1)");
	ctx.set_shadow_blur(6.0);
	ctx.set_shadow_offset_y(4.0);
	ctx.begin_path();
	let _ = ctx.arc(x, y, state.node_radius(idx), 0.0, 2.0 * PI);
	ctx.set_fill_style_str(node.color);
	ctx.fill();
	ctx.restore();

	ctx.begin_path();
	let _ = ctx.arc(x, y, state.node_radius(idx), 0.0, 2.0 * PI);
	ctx.set_stroke_style_str(&stroke_color(t));
	ctx.set_line_width(lerp(2.0, 4.0, t));
	ctx.stroke();

	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_fill_style_str("white");
	ctx.set_font("800 14px sans-serif");
	let _ = ctx.fill_text(&node.region.count.to_string(), x, y);

	let label = node.region.short_name();
	let label_y = y + node.label_dy();
	ctx.set_font("700 11px sans-serif");
	ctx.set_line_join("round");
	ctx.set_line_width(4.0);
	ctx.set_stroke_style_str("white");
	let _ = ctx.stroke_text(label, x, label_y);
	ctx.set_fill_style_str(LABEL_COLOR);
	let _ = ctx.fill_text(label, x, label_y);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stroke_color_endpoints() {
		assert_eq!(stroke_color(0.0), "rgb(255, 255, 255)");
		assert_eq!(stroke_color(1.0), "rgb(2, 136, 209)");
	}
}
