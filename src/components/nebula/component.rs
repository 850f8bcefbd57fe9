//! Leptos component wrapping the nebula canvas.
//!
//! The component creates an HTML canvas element and wires mouse handlers into
//! the simulation's pointer state. An animation loop runs via
//! `requestAnimationFrame`, rendering one simulation tick per frame. Cleanup
//! removes the window resize listener and stops the loop.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::canvas::CanvasSurface;
use super::config::NebulaConfig;
use super::frame::{AnimationLoop, now_ms};
use super::simulation::Simulation;
use super::theme::Theme;

type SharedSimulation = Rc<RefCell<Option<Simulation<CanvasSurface>>>>;

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Pointer position relative to the canvas' top-left corner.
fn canvas_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Renders the nebula on a canvas that fills the browser window and follows
/// window resizes.
#[component]
pub fn NebulaCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let simulation: SharedSimulation = Rc::new(RefCell::new(None));
	let simulation_init = simulation.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let theme = match Theme::nebula() {
			Ok(theme) => theme,
			Err(e) => {
				error!("nebula: rejecting theme: {}", e);
				return;
			}
		};

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("nebula: canvas has no 2d context");
			return;
		};

		let surface = CanvasSurface::new(canvas.clone(), ctx);
		let (w, h) = window_size(&window).unwrap_or((800.0, 600.0));
		surface.set_size(w, h);

		*simulation_init.borrow_mut() = Some(Simulation::new(
			surface,
			NebulaConfig::default(),
			theme,
		));
		info!("nebula: started on {}x{}", w, h);

		let simulation_resize = simulation_init.clone();
		let resize_listener = window_event_listener(ev::resize, move |_| {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
				return;
			};
			if let Some(ref mut sim) = *simulation_resize.borrow_mut() {
				sim.surface().set_size(nw, nh);
				sim.resize();
			}
		});

		let simulation_anim = simulation_init.clone();
		let animation = AnimationLoop::start(move || {
			if let Some(ref mut sim) = *simulation_anim.borrow_mut() {
				sim.tick(now_ms());
			}
		});
		on_cleanup(move || {
			resize_listener.remove();
			animation.stop();
		});
	});

	let simulation_mm = simulation.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = canvas_position(&canvas, &ev);

		if let Some(ref mut sim) = *simulation_mm.borrow_mut() {
			sim.on_pointer_move(x, y, now_ms());
		}
	};

	let simulation_ml = simulation.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut sim) = *simulation_ml.borrow_mut() {
			sim.on_pointer_leave();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="nebula-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block; background: rgb(0, 0, 5);"
		/>
	}
}
