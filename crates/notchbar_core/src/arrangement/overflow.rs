//! Icon-strip overflow beside the notch cutout.

use crate::prefs::settings::LayoutSettings;

/// Geometry inputs for overflow detection, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverflowGeometry {
    pub collapsed_width: f64,
    pub notch_width: f64,
    pub padding: f64,
    pub icon_width: f64,
    pub icon_spacing: f64,
}

impl OverflowGeometry {
    /// Combines stored layout settings with the measured notch width.
    pub fn from_settings(settings: &LayoutSettings, notch_width: f64) -> Self {
        Self {
            collapsed_width: settings.collapsed_width,
            notch_width,
            padding: settings.padding,
            icon_width: settings.icon_width,
            icon_spacing: settings.icon_spacing,
        }
    }

    /// Width available on one side of the notch.
    pub fn max_safe_width_per_side(&self) -> f64 {
        (self.collapsed_width - self.notch_width - 2.0 * self.padding) / 2.0
    }

    /// Width taken by `count` icons with spacing between them.
    pub fn side_width(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        count as f64 * (self.icon_width + self.icon_spacing) - self.icon_spacing
    }

    pub fn overflows(&self, count: usize) -> bool {
        count > 0 && self.side_width(count) > self.max_safe_width_per_side()
    }

    /// Largest icon count that still fits on one side.
    pub fn max_icons_per_side(&self) -> usize {
        let safe = self.max_safe_width_per_side();
        let step = self.icon_width + self.icon_spacing;
        if safe < self.icon_width || step <= 0.0 {
            return 0;
        }
        ((safe + self.icon_spacing) / step).floor() as usize
    }
}

/// Per-side overflow flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overflow {
    pub left_overflow: bool,
    pub right_overflow: bool,
}

impl Overflow {
    pub fn any(&self) -> bool {
        self.left_overflow || self.right_overflow
    }
}

/// Flags each side whose icon strip is wider than the safe width.
///
/// An empty side never overflows, even if the notch leaves no room at all.
pub fn compute_overflow(geometry: &OverflowGeometry, left_count: usize, right_count: usize) -> Overflow {
    Overflow {
        left_overflow: geometry.overflows(left_count),
        right_overflow: geometry.overflows(right_count),
    }
}
