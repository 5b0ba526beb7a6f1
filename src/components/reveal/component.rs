use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::state::{REVEAL_THRESHOLD, RevealAnimation, RevealState};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Keeps the observer callback alive and disconnects it on drop.
struct ObserverGuard {
	observer: IntersectionObserver,
	_callback: ObserverCallback,
}

impl ObserverGuard {
	fn observe(target: &Element, mut on_enter: impl FnMut() + 'static) -> Result<Self, JsValue> {
		let callback = ObserverCallback::new(
			move |entries: js_sys::Array, observer: IntersectionObserver| {
				let entered = entries
					.iter()
					.filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
					.any(|entry| entry.is_intersecting());
				if entered {
					observer.disconnect();
					on_enter();
				}
			},
		);
		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
		let observer =
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
		observer.observe(target);
		Ok(Self {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for ObserverGuard {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

/// Wraps its children and animates them in the first time they scroll into view.
#[component]
pub fn Reveal(
	#[prop(optional)] animation: RevealAnimation,
	/// Transition delay in milliseconds.
	#[prop(optional)]
	delay: u32,
	#[prop(into, optional)] class: String,
	children: Children,
) -> impl IntoView {
	let node_ref = NodeRef::<leptos::html::Div>::new();
	let state = RwSignal::new(RevealState::default());
	let guard: Rc<RefCell<Option<ObserverGuard>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(div) = node_ref.get() else {
			return;
		};
		if guard.borrow().is_some() || state.get_untracked().is_visible() {
			return;
		}
		let reveal = move || {
			if !state.get_untracked().is_visible() {
				debug!("Revealing {} block", animation.class_name());
				state.update(|s| {
					s.enter_viewport();
				});
			}
		};
		match ObserverGuard::observe(&div, reveal) {
			Ok(observer) => *guard.borrow_mut() = Some(observer),
			Err(err) => {
				warn!("IntersectionObserver unavailable, revealing immediately: {err:?}");
				state.update(|s| {
					s.enter_viewport();
				});
			}
		}
	});

	view! {
		<div
			node_ref=node_ref
			class=move || state.get().class_list(animation, &class)
			style=format!("transition-delay: {delay}ms;")
		>
			{children()}
		</div>
	}
}
