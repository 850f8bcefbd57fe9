//! nebula: an ambient, pointer-reactive particle field for the browser.
//!
//! This crate provides a WASM canvas component that renders a drifting
//! "nebula" of particles which are pulled toward a moving pointer and pushed
//! away from a resting one.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Only referenced to enable its `js` backend on wasm.
#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub mod components;

pub use components::nebula::{NebulaCanvas, Simulation, Surface};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("nebula: logging initialized");
}

/// Main application component.
/// Renders the nebula across the whole viewport.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Nebula" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-nebula" style="position: fixed; inset: 0; overflow: hidden;">
			<NebulaCanvas />
		</div>
	}
}
