use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use web_sys::CanvasRenderingContext2d;

use crate::dom::{self, FrameLoop, WindowListener};

use super::state::{PARTICLE_COUNT, ParticleField};

const PARTICLE_COLOR: &str = "rgba(192, 202, 51, 0.3)";
const LINK_WIDTH: f64 = 0.5;

fn link_color(alpha: f64) -> String {
	format!("rgba(192, 202, 51, {alpha})")
}

fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, field.width, field.height);
	ctx.set_fill_style_str(PARTICLE_COLOR);
	for p in &field.particles {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, 2.0 * PI);
		ctx.fill();
	}
	ctx.set_line_width(LINK_WIDTH);
	for (i, j, alpha) in field.links() {
		let (a, b) = (&field.particles[i], &field.particles[j]);
		ctx.set_stroke_style_str(&link_color(alpha));
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

/// Drifting dots joined by faint lines, sized to the parent element.
#[component]
pub fn Particles() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let frames: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));
	let resize_listener: Rc<RefCell<Option<WindowListener>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if field.borrow().is_some() {
			return;
		}
		let Some((ctx, w, h)) = dom::prepare_canvas(&canvas, (1280.0, 800.0)) else {
			return;
		};
		let seed = js_sys::Date::now() as u64;
		*field.borrow_mut() = Some(ParticleField::new(PARTICLE_COUNT, w, h, seed));
		debug!("Particle field {w}x{h} seeded with {seed}");

		let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
		*resize_listener.borrow_mut() = WindowListener::add("resize", move || {
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				let (nw, nh) = dom::parent_size(&canvas_resize, (f.width, f.height));
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				f.reset(PARTICLE_COUNT, nw, nh);
			}
		});

		let field_anim = field.clone();
		let frame_loop = FrameLoop::new(move |_ts| {
			if !canvas.is_connected() {
				debug!("Particle canvas detached, stopping");
				return false;
			}
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.step();
				render(f, &ctx);
			}
			true
		});
		frame_loop.start();
		*frames.borrow_mut() = Some(frame_loop);
	});

	view! { <canvas node_ref=canvas_ref class="particles-canvas" aria-hidden="true" /> }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn particles_and_links_use_the_accent_colour() {
		assert_eq!(PARTICLE_COLOR, "rgba(192, 202, 51, 0.3)");
		assert_eq!(link_color(0.05), "rgba(192, 202, 51, 0.05)");
		assert_eq!(LINK_WIDTH, 0.5);
	}
}
