use crate::model::module::NotchModule;
use crate::model::side::Side;

/// Legacy calculator. Off by default and never shown in the collapsed strip.
#[derive(Debug, Default)]
pub struct CalculatorModule;

impl CalculatorModule {
    pub fn new() -> Self {
        Self
    }
}

impl NotchModule for CalculatorModule {
    fn id(&self) -> &str {
        "calculator"
    }

    fn name(&self) -> &str {
        "Calculator"
    }

    fn icon(&self) -> &str {
        "function"
    }

    fn mini_icon(&self) -> &str {
        "plus.forwardslash.minus"
    }

    fn default_side(&self) -> Side {
        Side::Right
    }

    fn priority(&self) -> i32 {
        10
    }

    fn default_enabled(&self) -> bool {
        false
    }

    fn show_in_collapsed(&self) -> bool {
        false
    }
}
