//! The `NotchModule` capability interface.

use crate::model::side::Side;
use crate::model::view::{ModuleView, Surface};
use std::sync::Arc;

/// Shared handle to one registered module.
pub type ModuleHandle = Arc<dyn NotchModule>;

/// Capability contract implemented by every panel module.
///
/// Modules describe themselves and render; the registry decides whether and
/// where they appear. `Send + Sync` lets OS integration threads hold a handle
/// to flip dynamic state such as "media is playing".
pub trait NotchModule: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    /// Glyph for the expanded tab bar.
    fn icon(&self) -> &str;
    /// Glyph for the collapsed icon strip.
    fn mini_icon(&self) -> &str;
    /// Placement used until the user assigns a side.
    fn default_side(&self) -> Side;
    /// Fallback ordering; higher sorts first.
    fn priority(&self) -> i32;

    /// Enablement used until the user toggles the module.
    fn default_enabled(&self) -> bool {
        true
    }

    /// Evaluated on every read; may change while the process runs.
    fn show_in_collapsed(&self) -> bool;

    fn render_collapsed(&self) -> ModuleView {
        ModuleView::new(self.id(), Surface::Collapsed, self.mini_icon(), self.name())
    }

    fn render_expanded(&self) -> ModuleView {
        ModuleView::new(self.id(), Surface::Expanded, self.icon(), self.name())
    }
}

/// Collects the ids of `modules` in order.
pub fn module_ids(modules: &[ModuleHandle]) -> Vec<String> {
    modules.iter().map(|module| module.id().to_string()).collect()
}
