//! Drag-driven rearrangement of modules and overflow feedback.
//!
//! # Responsibility
//! - Apply drops: move to a side at an index, or disable.
//! - Compute per-side overflow against the physical notch width.
//! - Marshal drag events from OS input threads onto the owning thread.
//!
//! # Invariants
//! - `ArrangementEngine::move_module_to_side` is the only path that writes order arrays
//!   (besides reset), and it never leaves an id on both sides.
//! - Drop indices are clamped; nothing here fails on bad indices or ids.

pub mod drag;
mod engine;
pub mod overflow;

pub use engine::{ArrangementEngine, ArrangementPreview};
