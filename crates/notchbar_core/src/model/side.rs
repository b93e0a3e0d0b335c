//! Placement zones beside the notch cutout.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Left or right of the physical notch in the collapsed panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Stable string form used in logs and persisted maps.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Side;

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Side::Right).expect("serialize side");
        assert_eq!(json, "\"right\"");
        assert_eq!(Side::Left.to_string(), "left");
        assert!(serde_json::from_str::<Side>("\"Left\"").is_err());
        assert!(serde_json::from_str::<Side>("\"center\"").is_err());
    }
}
