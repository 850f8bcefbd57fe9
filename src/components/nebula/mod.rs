//! Ambient particle nebula.
//!
//! Renders a field of softly glowing particles on an HTML canvas:
//! - Particles spawn near the center, drift outward, fade, and respawn
//! - A moving pointer pulls particles in; a resting pointer pushes them away
//! - A translucent overlay each frame leaves fading motion trails
//!
//! The simulation core ([`Simulation`]) paints through the [`Surface`] trait
//! and has no DOM dependency; [`NebulaCanvas`] connects it to the browser.
//!
//! # Example
//!
//! ```ignore
//! use nebula::NebulaCanvas;
//!
//! view! { <NebulaCanvas /> }
//! ```

mod canvas;
mod component;
pub mod config;
mod field;
mod frame;
mod particle;
mod pointer;
mod random;
mod render;
mod simulation;
mod surface;
pub mod theme;

pub use canvas::CanvasSurface;
pub use component::NebulaCanvas;
pub use config::NebulaConfig;
pub use field::ParticleField;
pub use frame::{AnimationLoop, LoopHandle};
pub use particle::{FrameContext, Particle};
pub use pointer::{PointerSample, PointerState};
pub use simulation::Simulation;
pub use surface::{Bounds, Surface};
pub use theme::{Color, Palette, PaletteError, Theme};
