use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, PointerEvent};

use crate::data::{Region, RegionId};
use crate::dom::{self, FrameLoop, WindowListener};

use super::render;
use super::selection::{PointerKind, SelectionEvent};
use super::state::{MAP_HEIGHT, MAP_WIDTH, RegionMapState};

struct MapRuntime {
	state: RegionMapState,
	ctx: CanvasRenderingContext2d,
	last_frame: Option<f64>,
}

type Runtime = Rc<RefCell<Option<MapRuntime>>>;

/// Advance the emphasis easing by one frame; `false` once everything has settled.
fn advance(runtime: &Runtime, ts: f64) -> bool {
	let mut guard = runtime.borrow_mut();
	let Some(rt) = guard.as_mut() else {
		return false;
	};
	let dt = rt
		.last_frame
		.map(|last| ((ts - last) / 1000.0).clamp(0.0, 0.1))
		.unwrap_or(0.016);
	let keep_going = rt.state.tick(dt);
	render::render(&rt.state, &rt.ctx);
	rt.last_frame = keep_going.then_some(ts);
	keep_going
}

/// Pointer position in canvas pixels, corrected for CSS scaling of the element.
fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	let (sx, sy) = (
		if rect.width() > 0.0 {
			canvas.width() as f64 / rect.width()
		} else {
			1.0
		},
		if rect.height() > 0.0 {
			canvas.height() as f64 / rect.height()
		} else {
			1.0
		},
	);
	(
		(ev.client_x() as f64 - rect.left()) * sx,
		(ev.client_y() as f64 - rect.top()) * sy,
	)
}

/// Canvas view of the client regions. Selection is owned by the caller:
/// the map reads `selected` and reports pointer activity through `on_event`.
#[component]
pub fn RegionMap(
	regions: &'static [Region],
	#[prop(into)] selected: Signal<Option<RegionId>>,
	on_event: Callback<SelectionEvent>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let hovering = RwSignal::new(false);
	let runtime: Runtime = Rc::new(RefCell::new(None));
	let frames: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));
	let resize_listener: Rc<RefCell<Option<WindowListener>>> = Rc::new(RefCell::new(None));
	let (runtime_init, frames_init) = (runtime.clone(), frames.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if runtime_init.borrow().is_some() {
			return;
		}
		let Some((ctx, w, h)) = dom::prepare_canvas(&canvas, (MAP_WIDTH, MAP_HEIGHT)) else {
			return;
		};

		let mut state = RegionMapState::new(regions, w, h);
		state.set_selected(selected.get_untracked());
		state.settle();
		render::render(&state, &ctx);
		*runtime_init.borrow_mut() = Some(MapRuntime {
			state,
			ctx,
			last_frame: None,
		});

		let runtime_anim = runtime_init.clone();
		*frames_init.borrow_mut() = Some(FrameLoop::new(move |ts| advance(&runtime_anim, ts)));

		let (runtime_resize, canvas_resize) = (runtime_init.clone(), canvas.clone());
		*resize_listener.borrow_mut() = WindowListener::add("resize", move || {
			let mut guard = runtime_resize.borrow_mut();
			let Some(rt) = guard.as_mut() else {
				return;
			};
			let (nw, nh) = dom::parent_size(&canvas_resize, (rt.state.width, rt.state.height));
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			rt.state.resize(nw, nh);
			render::render(&rt.state, &rt.ctx);
		});
	});

	let (runtime_sync, frames_sync) = (runtime.clone(), frames.clone());
	Effect::new(move |_| {
		let current = selected.get();
		let changed = runtime_sync
			.borrow_mut()
			.as_mut()
			.map(|rt| rt.state.set_selected(current))
			.unwrap_or(false);
		if changed {
			debug!("Map selection -> {:?}", current.map(RegionId::code));
			if let Some(ref frame_loop) = *frames_sync.borrow() {
				frame_loop.start();
			}
		}
	});

	let runtime_pm = runtime.clone();
	let on_pointermove = move |ev: PointerEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = canvas_point(&canvas, &ev);
		let kind = PointerKind::from_pointer_type(&ev.pointer_type());
		let event = runtime_pm
			.borrow_mut()
			.as_mut()
			.and_then(|rt| rt.state.pointer_moved(x, y, kind));
		if let Some(event) = event {
			hovering.set(matches!(event, SelectionEvent::Enter(_)));
			on_event.run(event);
		}
	};

	let runtime_pl = runtime.clone();
	let on_pointerleave = move |ev: PointerEvent| {
		let kind = PointerKind::from_pointer_type(&ev.pointer_type());
		let event = runtime_pl
			.borrow_mut()
			.as_mut()
			.and_then(|rt| rt.state.pointer_left(kind));
		hovering.set(false);
		if let Some(event) = event {
			on_event.run(event);
		}
	};

	let runtime_click = runtime.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = canvas_point(&canvas, &ev);
		let event = runtime_click
			.borrow()
			.as_ref()
			.and_then(|rt| rt.state.clicked(x, y));
		if let Some(event) = event {
			ev.stop_propagation();
			on_event.run(event);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="region-map-canvas"
			aria-label="Map of client regions"
			on:pointermove=on_pointermove
			on:pointerleave=on_pointerleave
			on:click=on_click
			style=move || if hovering.get() { "cursor: pointer;" } else { "cursor: default;" }
		/>
	}
}
