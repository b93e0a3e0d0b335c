//! Module catalog and derived, side-partitioned views.
//!
//! # Responsibility
//! - Own the static module catalog for the process lifetime.
//! - Own enablement, side assignments and per-side order arrays, and persist
//!   them through the preferences store.
//! - Notify observers after every persisted arrangement change.
//!
//! # Invariants
//! - A module id appears in at most one side's order array, at most once.
//! - Malformed persisted arrangement data is treated as absent.
//! - Lookups of unknown ids return `None`/no-op; nothing here panics.

pub mod events;
mod module_registry;
pub mod orders;

pub use module_registry::{ModuleRegistry, RegistryError};
