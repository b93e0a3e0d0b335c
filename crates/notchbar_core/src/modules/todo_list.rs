use crate::model::module::NotchModule;
use crate::model::side::Side;
use crate::model::view::{ModuleView, Surface};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Quick to-do list. Shows the pending count in the collapsed strip.
#[derive(Debug, Default)]
pub struct TodoListModule {
    pending: AtomicUsize,
}

impl TodoListModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pending_count(&self, count: usize) {
        self.pending.store(count, Ordering::Relaxed);
    }

    pub fn pending_count(&self) -> usize {
        self.pending.load(Ordering::Relaxed)
    }
}

impl NotchModule for TodoListModule {
    fn id(&self) -> &str {
        "todolist"
    }

    fn name(&self) -> &str {
        "To-Do"
    }

    fn icon(&self) -> &str {
        "checklist"
    }

    fn mini_icon(&self) -> &str {
        "checkmark.circle"
    }

    fn default_side(&self) -> Side {
        Side::Left
    }

    fn priority(&self) -> i32 {
        80
    }

    fn show_in_collapsed(&self) -> bool {
        true
    }

    fn render_collapsed(&self) -> ModuleView {
        let view = ModuleView::new(self.id(), Surface::Collapsed, self.mini_icon(), self.name());
        match self.pending_count() {
            0 => view,
            count => view.with_badge(count.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TodoListModule;
    use crate::model::module::NotchModule;

    #[test]
    fn collapsed_badge_tracks_pending_count() {
        let module = TodoListModule::new();
        assert_eq!(module.render_collapsed().badge, None);

        module.set_pending_count(3);
        assert_eq!(module.render_collapsed().badge.as_deref(), Some("3"));
    }
}
