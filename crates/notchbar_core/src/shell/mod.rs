//! Collapsed/expanded panel state machine.
//!
//! # Responsibility
//! - Drive hover and file-drag transitions with a debounced collapse.
//! - Track the active module and build the frame the UI renders.
//! - Report desired window size and region to the window collaborator.
//!
//! # Invariants
//! - At most one collapse is pending; scheduling a new one cancels the old.
//! - A due collapse re-checks hover and file-drag state before acting.
//! - The active index is always valid for the current enabled list.

pub mod geometry;
mod presentation;
pub mod timer;

pub use presentation::{PanelState, PresentationShell, ShellFrame};
