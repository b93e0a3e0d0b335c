//! Preference key names.

use crate::model::side::Side;

/// Prefix shared by all per-module keys.
pub const MODULE_KEY_PREFIX: &str = "module.";
/// JSON object mapping module id to `left`/`right`.
pub const SIDE_ASSIGNMENTS_KEY: &str = "layout.side_assignments";
/// JSON array of module ids rendered left of the notch.
pub const LEFT_ORDER_KEY: &str = "layout.order.left";
/// JSON array of module ids rendered right of the notch.
pub const RIGHT_ORDER_KEY: &str = "layout.order.right";

pub const COLLAPSED_WIDTH_KEY: &str = "ui.collapsed_width";
pub const COLLAPSED_HEIGHT_KEY: &str = "ui.collapsed_height";
pub const EXPANDED_WIDTH_KEY: &str = "ui.expanded_width";
pub const EXPANDED_HEIGHT_KEY: &str = "ui.expanded_height";
pub const PADDING_KEY: &str = "ui.padding";
pub const ICON_WIDTH_KEY: &str = "ui.icon_width";
pub const ICON_SPACING_KEY: &str = "ui.icon_spacing";
pub const COLLAPSE_DELAY_MS_KEY: &str = "ui.collapse_delay_ms";

/// Enabled flag key for one module, e.g. `module.calendar.enabled`.
pub fn module_enabled_key(module_id: &str) -> String {
    format!("{MODULE_KEY_PREFIX}{module_id}.enabled")
}

pub fn order_key(side: Side) -> &'static str {
    match side {
        Side::Left => LEFT_ORDER_KEY,
        Side::Right => RIGHT_ORDER_KEY,
    }
}
