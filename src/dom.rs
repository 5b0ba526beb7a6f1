//! Thin helpers over `web_sys` for the bits of DOM glue the widgets share.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A window event listener that is removed again when dropped.
pub struct WindowListener {
	event: &'static str,
	callback: Closure<dyn FnMut()>,
}

impl WindowListener {
	pub fn add(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let callback = Closure::<dyn FnMut()>::new(handler);
		if let Err(err) =
			window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
		{
			warn!("Could not listen for {event}: {err:?}");
			return None;
		}
		Some(Self { event, callback })
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		if let Some(window) = web_sys::window() {
			let _ = window.remove_event_listener_with_callback(
				self.event,
				self.callback.as_ref().unchecked_ref(),
			);
		}
	}
}

/// Schedule `callback` for the next animation frame, returning the request id.
fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(callback.as_ref().unchecked_ref())
		.ok()
}

type Slot<T> = Rc<RefCell<Option<T>>>;

/// Build a value that can reach its own slot without keeping it alive.
fn self_referencing<T>(make: impl FnOnce(Weak<RefCell<Option<T>>>) -> T) -> Slot<T> {
	let slot: Slot<T> = Rc::new(RefCell::new(None));
	let value = make(Rc::downgrade(&slot));
	*slot.borrow_mut() = Some(value);
	slot
}

/// A self-rescheduling animation-frame callback.
///
/// The callback only holds a weak handle on itself, so the loop lives exactly
/// as long as this value. Dropping it cancels any pending frame.
pub struct FrameLoop {
	callback: Slot<Closure<dyn FnMut(f64)>>,
	pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
	/// `step` gets the frame timestamp and returns whether to run again.
	pub fn new(mut step: impl FnMut(f64) -> bool + 'static) -> Self {
		let pending = Rc::new(Cell::new(None));
		let pending_inner = pending.clone();
		let callback = self_referencing(|this| {
			Closure::new(move |ts: f64| {
				pending_inner.set(None);
				if !step(ts) {
					return;
				}
				let Some(callback) = this.upgrade() else {
					return;
				};
				if let Some(ref cb) = *callback.borrow() {
					pending_inner.set(request_frame(cb));
				}
			})
		});
		Self { callback, pending }
	}

	/// Request a frame unless one is already queued.
	pub fn start(&self) {
		if self.is_pending() {
			return;
		}
		if let Some(ref cb) = *self.callback.borrow() {
			self.pending.set(request_frame(cb));
		}
	}

	pub fn is_pending(&self) -> bool {
		self.pending.get().is_some()
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		if let Some(id) = self.pending.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
	}
}

/// Size the canvas backing store to its parent and hand back the 2D context.
pub fn prepare_canvas(
	canvas: &HtmlCanvasElement,
	fallback: (f64, f64),
) -> Option<(CanvasRenderingContext2d, f64, f64)> {
	let (w, h) = parent_size(canvas, fallback);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	let ctx = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
	if ctx.is_none() {
		warn!("Canvas 2D context unavailable");
	}
	ctx.map(|ctx| (ctx, w, h))
}

pub fn parent_size(canvas: &HtmlCanvasElement, fallback: (f64, f64)) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or(fallback)
}

/// Language pinned by the deployment through `<html data-lang="..">`, if any.
///
/// `lang` itself is left to the app, which rewrites it on every switch.
pub fn served_lang() -> Option<String> {
	web_sys::window()?
		.document()?
		.document_element()?
		.get_attribute("data-lang")
}

pub fn open_in_new_tab(url: &str) {
	if let Some(window) = web_sys::window() {
		if let Err(err) = window.open_with_url_and_target(url, "_blank") {
			warn!("Could not open {url}: {err:?}");
		}
	}
}

pub fn alert(message: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(message);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct DropFlag(Rc<Cell<bool>>);

	impl Drop for DropFlag {
		fn drop(&mut self) {
			self.0.set(true);
		}
	}

	#[test]
	fn self_referencing_value_is_freed_with_its_owner() {
		let dropped = Rc::new(Cell::new(false));
		let flag = DropFlag(dropped.clone());
		let slot = self_referencing(|this| {
			Box::new(move || {
				let _keep = &flag;
				this.upgrade().is_some()
			}) as Box<dyn Fn() -> bool>
		});
		let weak = Rc::downgrade(&slot);
		assert!(slot.borrow().as_ref().is_some_and(|reach_self| reach_self()));
		assert_eq!(Rc::strong_count(&slot), 1);

		drop(slot);
		assert!(weak.upgrade().is_none());
		assert!(dropped.get());
	}
}
