//! Arrangement engine over a borrowed module registry.

use crate::arrangement::drag::{DragEvent, DragInbox, DropTarget};
use crate::arrangement::overflow::{compute_overflow, Overflow, OverflowGeometry};
use crate::model::module::{module_ids, ModuleHandle};
use crate::model::side::Side;
use crate::prefs::store::PreferencesStore;
use crate::registry::events::ArrangementEvent;
use crate::registry::orders::SideOrders;
use crate::registry::ModuleRegistry;
use log::{debug, info};

/// Visible id sequences a drop would produce, per side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrangementPreview {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl ArrangementPreview {
    pub fn get(&self, side: Side) -> &[String] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// Applies drag-and-drop arrangement changes to a registry.
///
/// Borrows the registry mutably for its lifetime, so at most one engine
/// writes arrangement state at a time.
pub struct ArrangementEngine<'reg, S: PreferencesStore> {
    registry: &'reg mut ModuleRegistry<S>,
}

impl<'reg, S: PreferencesStore> ArrangementEngine<'reg, S> {
    pub fn new(registry: &'reg mut ModuleRegistry<S>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ModuleRegistry<S> {
        &*self.registry
    }

    /// Places `id` on `side` at `at_index`, re-enabling it if needed.
    ///
    /// `at_index` is a position in the side's stored order array, clamped to
    /// its length. Unknown ids are ignored. Re-applying the current position
    /// still persists.
    pub fn move_module_to_side(&mut self, id: &str, side: Side, at_index: usize) {
        if self.registry.get_by_id(id).is_none() {
            debug!("event=module_move module=arrangement status=not_found module_id={id}");
            return;
        }

        let from = self.registry.orders().side_of(id);
        let (orders, index) = self.planned_orders(id, side, at_index);
        *self.registry.orders_mut() = orders;
        let reenabled = self.registry.set_enabled(id, true);
        self.registry.assign_side(id, side);
        self.registry.persist_orders();
        self.registry.persist_side_assignments();

        info!(
            "event=module_move module=arrangement status=ok module_id={id} from={} side={side} index={index} reenabled={reenabled}",
            from.map_or("none", Side::as_str)
        );
        if reenabled {
            self.registry.notify(&ArrangementEvent::ModuleToggled {
                module_id: id.to_string(),
                enabled: true,
            });
        }
        self.registry.notify(&ArrangementEvent::ModuleMoved {
            module_id: id.to_string(),
            side,
            index,
        });
    }

    /// Removes `id` from both sides and disables it.
    ///
    /// Disabling an already-disabled module never re-enables it; when nothing
    /// changes nothing is written.
    pub fn disable_module(&mut self, id: &str) {
        if self.registry.get_by_id(id).is_none() {
            debug!("event=module_disable module=arrangement status=not_found module_id={id}");
            return;
        }

        let removed = self.registry.orders_mut().remove(id);
        if removed {
            self.registry.persist_orders();
        }
        let disabled = self.registry.is_enabled(id) && self.registry.set_enabled(id, false);
        if !removed && !disabled {
            debug!("event=module_disable module=arrangement status=noop module_id={id}");
            return;
        }

        info!(
            "event=module_disable module=arrangement status=ok module_id={id} removed_from_order={removed}"
        );
        if disabled {
            self.registry.notify(&ArrangementEvent::ModuleToggled {
                module_id: id.to_string(),
                enabled: false,
            });
        }
        self.registry.notify(&ArrangementEvent::ModuleDisabled {
            module_id: id.to_string(),
        });
    }

    /// Forgets every user choice: sides, orders and enabled flags.
    pub fn reset_to_defaults(&mut self) {
        self.registry.clear_arrangement();
        info!("event=layout_reset module=arrangement status=ok");
        self.registry.notify(&ArrangementEvent::LayoutReset);
    }

    /// Modules in the disabled zone, in catalog order.
    pub fn disabled_modules(&self) -> Vec<ModuleHandle> {
        self.registry.disabled_modules()
    }

    /// Visible left/right sequences if `id` were dropped on `side` at
    /// `at_index`. Nothing is mutated or persisted.
    pub fn preview_move(&self, id: &str, side: Side, at_index: usize) -> Option<ArrangementPreview> {
        self.registry.get_by_id(id)?;
        let (orders, _) = self.planned_orders(id, side, at_index);
        let moved = Some((id, side));
        Some(ArrangementPreview {
            left: module_ids(&self.registry.side_list_with(Side::Left, &orders, moved)),
            right: module_ids(&self.registry.side_list_with(Side::Right, &orders, moved)),
        })
    }

    /// Overflow of the arrangement [`Self::preview_move`] would produce.
    pub fn preview_overflow(
        &self,
        id: &str,
        side: Side,
        at_index: usize,
        geometry: &OverflowGeometry,
    ) -> Option<Overflow> {
        let preview = self.preview_move(id, side, at_index)?;
        Some(compute_overflow(
            geometry,
            preview.left.len(),
            preview.right.len(),
        ))
    }

    /// Overflow of the current arrangement.
    pub fn overflow(&self, geometry: &OverflowGeometry) -> Overflow {
        compute_overflow(
            geometry,
            self.registry.side_list(Side::Left).len(),
            self.registry.side_list(Side::Right).len(),
        )
    }

    /// Applies one drag event; returns `true` for drops.
    pub fn apply_drag_event(&mut self, event: DragEvent) -> bool {
        match event {
            DragEvent::Started { module_id } => {
                debug!("event=drag_start module=arrangement status=ok module_id={module_id}");
                false
            }
            DragEvent::Dropped {
                module_id,
                target: DropTarget::Side { side, index },
            } => {
                self.move_module_to_side(&module_id, side, index);
                true
            }
            DragEvent::Dropped {
                module_id,
                target: DropTarget::Disabled,
            } => {
                self.disable_module(&module_id);
                true
            }
        }
    }

    /// Drains `inbox` and applies every queued event in order.
    ///
    /// Returns the number of drop events applied.
    pub fn drain_inbox(&mut self, inbox: &DragInbox) -> usize {
        inbox
            .drain()
            .into_iter()
            .map(|event| self.apply_drag_event(event))
            .filter(|applied| *applied)
            .count()
    }

    /// Order arrays after dropping `id` on `side`, and the index it landed at.
    fn planned_orders(&self, id: &str, side: Side, at_index: usize) -> (SideOrders, usize) {
        let mut orders = self.registry.orders().clone();
        let index = orders.insert_clamped(side, id, at_index);
        (orders, index)
    }
}
