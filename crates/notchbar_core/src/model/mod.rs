//! Module contract shared by the registry, arrangement engine and shell.
//!
//! # Responsibility
//! - Define the capability interface every notch module implements.
//! - Define placement (`Side`) and the opaque rendered view handed to the UI.
//!
//! # Invariants
//! - A module id is stable for the whole process and is the only key used by
//!   enablement, side-assignment and order data.
//! - Enablement, effective side and order are never stored on the module
//!   itself; the registry owns them.

pub mod module;
pub mod side;
pub mod view;
