//! Module composition and layout core for the notch panel.
//! Owns which modules show, on which side of the notch, in what order, and
//! when the panel is collapsed or expanded. Platform UI lives elsewhere.

pub mod arrangement;
pub mod db;
pub mod logging;
pub mod model;
pub mod modules;
pub mod prefs;
pub mod registry;
pub mod shell;

pub use arrangement::drag::{DragEvent, DragInbox, DragPublisher, DropTarget};
pub use arrangement::overflow::{compute_overflow, Overflow, OverflowGeometry};
pub use arrangement::{ArrangementEngine, ArrangementPreview};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::module::{module_ids, ModuleHandle, NotchModule};
pub use model::side::Side;
pub use model::view::{ModuleView, Surface};
pub use modules::{
    default_catalog, BuiltinModules, CalculatorModule, CalendarModule, FileManagerModule,
    MediaControllerModule, TodoListModule,
};
pub use prefs::settings::LayoutSettings;
pub use prefs::store::{PreferencesStore, SqlitePreferencesStore};
pub use prefs::{PrefsError, PrefsResult};
pub use registry::events::{ArrangementEvent, SubscriptionId};
pub use registry::{ModuleRegistry, RegistryError};
pub use shell::geometry::{Rect, WindowGeometry};
pub use shell::{PanelState, PresentationShell, ShellFrame};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
