//! `requestAnimationFrame` driven loop with an explicit stop handle.
//!
//! Stopping is cooperative: [`LoopHandle::stop`] clears a flag, and the next
//! scheduled frame sees it, skips rendering, and releases the frame closure
//! together with everything it captured.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::prelude::*;

/// Milliseconds on the page's high resolution clock.
pub fn now_ms() -> f64 {
	web_sys::window()
		.and_then(|w| w.performance())
		.map(|p| p.now())
		.unwrap_or_else(js_sys::Date::now)
}

/// Stops a running [`AnimationLoop`].
///
/// Only atomics inside, so it can be moved into `Send + Sync` cleanup hooks.
#[derive(Clone, Debug)]
pub struct LoopHandle {
	running: Arc<AtomicBool>,
}

impl LoopHandle {
	fn new() -> Self {
		Self {
			running: Arc::new(AtomicBool::new(true)),
		}
	}

	/// Whether frames are still being rendered.
	pub fn is_running(&self) -> bool {
		self.running.load(Ordering::Relaxed)
	}

	/// Stop rendering; the loop winds down on its next frame. Idempotent.
	pub fn stop(&self) {
		if self.running.swap(false, Ordering::Relaxed) {
			log::debug!("nebula: animation loop stopped");
		}
	}
}

/// What a scheduled frame should do after running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FrameStep {
	/// Rendered; request the next frame.
	Continue,
	/// Stopped; drop the frame closure.
	Release,
}

fn run_frame<F: FnMut()>(handle: &LoopHandle, on_frame: &mut F) -> FrameStep {
	if !handle.is_running() {
		return FrameStep::Release;
	}
	on_frame();
	FrameStep::Continue
}

/// Empty `slot`, dropping its contents after the borrow ends.
fn release<T>(slot: &RefCell<Option<T>>) {
	let released = slot.borrow_mut().take();
	drop(released);
}

fn request(callback: &Closure<dyn FnMut()>) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
}

/// Calls a closure once per display refresh until stopped.
pub struct AnimationLoop;

impl AnimationLoop {
	/// Schedule `on_frame` on every animation frame until the handle is stopped.
	pub fn start<F>(mut on_frame: F) -> LoopHandle
	where
		F: FnMut() + 'static,
	{
		let handle = LoopHandle::new();
		let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
		let (callback_inner, handle_inner) = (callback.clone(), handle.clone());

		*callback.borrow_mut() = Some(Closure::new(move || {
			match run_frame(&handle_inner, &mut on_frame) {
				FrameStep::Continue => {
					if let Some(ref cb) = *callback_inner.borrow() {
						request(cb);
					}
				}
				// Breaks the closure's reference to its own slot. wasm-bindgen
				// defers freeing a closure that is still executing.
				FrameStep::Release => release(&*callback_inner),
			}
		}));
		if let Some(ref cb) = *callback.borrow() {
			request(cb);
		}
		handle
	}
}
