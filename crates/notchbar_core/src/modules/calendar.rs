use crate::model::module::NotchModule;
use crate::model::side::Side;

/// Upcoming events for today.
#[derive(Debug, Default)]
pub struct CalendarModule;

impl CalendarModule {
    pub fn new() -> Self {
        Self
    }
}

impl NotchModule for CalendarModule {
    fn id(&self) -> &str {
        "calendar"
    }

    fn name(&self) -> &str {
        "Calendar"
    }

    fn icon(&self) -> &str {
        "calendar"
    }

    fn mini_icon(&self) -> &str {
        "calendar.circle"
    }

    fn default_side(&self) -> Side {
        Side::Left
    }

    fn priority(&self) -> i32 {
        90
    }

    fn show_in_collapsed(&self) -> bool {
        true
    }
}
