//! UI components.

pub mod nebula;
