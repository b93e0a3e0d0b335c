//! Opaque render results handed to the UI layer.

/// Which panel surface a view was rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Collapsed,
    Expanded,
}

/// Render output of one module.
///
/// Core code only routes these to the UI; it never branches on their content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleView {
    pub module_id: String,
    pub surface: Surface,
    /// Symbolic glyph name resolved by the render layer.
    pub glyph: String,
    pub label: String,
    /// Short status text, e.g. a pending count.
    pub badge: Option<String>,
}

impl ModuleView {
    pub fn new(
        module_id: impl Into<String>,
        surface: Surface,
        glyph: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            module_id: module_id.into(),
            surface,
            glyph: glyph.into(),
            label: label.into(),
            badge: None,
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}
