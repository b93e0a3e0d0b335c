//! Arrangement change notifications.

use crate::model::side::Side;

/// Emitted after an arrangement mutation has been applied and persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrangementEvent {
    ModuleToggled { module_id: String, enabled: bool },
    ModuleMoved {
        module_id: String,
        side: Side,
        index: usize,
    },
    ModuleDisabled { module_id: String },
    LayoutReset,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&ArrangementEvent)>;

/// Ordered observer list; observers run in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        before != self.entries.len()
    }

    pub(crate) fn notify(&self, event: &ArrangementEvent) {
        for (_, observer) in &self.entries {
            observer(event);
        }
    }
}
