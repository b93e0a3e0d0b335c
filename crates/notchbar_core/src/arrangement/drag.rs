//! Drag events and their hand-off to the arrangement-owning thread.
//!
//! OS drag callbacks may arrive on input threads. They post into a
//! [`DragInbox`] through a cloneable [`DragPublisher`]; the thread that owns
//! the registry drains the inbox and applies each event in arrival order.

use crate::model::side::Side;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Where a dragged module icon was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Side { side: Side, index: usize },
    /// The "disabled" zone of the arrangement view.
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Started { module_id: String },
    Dropped { module_id: String, target: DropTarget },
}

/// Receiving end, owned by the thread that owns the registry.
pub struct DragInbox {
    sender: Sender<DragEvent>,
    receiver: Receiver<DragEvent>,
}

impl DragInbox {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    pub fn publisher(&self) -> DragPublisher {
        DragPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Takes every queued event without blocking.
    pub fn drain(&self) -> Vec<DragEvent> {
        let mut events = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        events
    }
}

impl Default for DragInbox {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending handle; `Send + Clone`, safe to hand to OS input threads.
#[derive(Clone)]
pub struct DragPublisher {
    sender: Sender<DragEvent>,
}

impl DragPublisher {
    /// Returns `false` when the inbox has been dropped.
    pub fn publish(&self, event: DragEvent) -> bool {
        self.sender.send(event).is_ok()
    }

    pub fn drag_started(&self, module_id: impl Into<String>) -> bool {
        self.publish(DragEvent::Started {
            module_id: module_id.into(),
        })
    }

    pub fn dropped(&self, module_id: impl Into<String>, target: DropTarget) -> bool {
        self.publish(DragEvent::Dropped {
            module_id: module_id.into(),
            target,
        })
    }
}
