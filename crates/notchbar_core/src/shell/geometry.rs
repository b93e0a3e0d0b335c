//! Window geometry collaborator.

use crate::shell::PanelState;

/// Rectangle in points, relative to the top-center of the notch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Rect of `width` x `height` hanging centered below the screen top.
    pub fn top_centered(width: f64, height: f64) -> Self {
        Self {
            x: -width / 2.0,
            y: 0.0,
            width,
            height,
        }
    }
}

/// Receives size and hit-region updates for the floating panel window.
///
/// Calls are fire-and-forget and may repeat the same values.
pub trait WindowGeometry {
    fn report_desired_size(&mut self, width: f64, height: f64);
    fn report_active_region(&mut self, rect: Rect, state: PanelState);
}

impl<T: WindowGeometry + ?Sized> WindowGeometry for &mut T {
    fn report_desired_size(&mut self, width: f64, height: f64) {
        (**self).report_desired_size(width, height);
    }

    fn report_active_region(&mut self, rect: Rect, state: PanelState) {
        (**self).report_active_region(rect, state);
    }
}
