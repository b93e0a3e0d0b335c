//! Module registry over a preferences store.

use crate::model::module::{ModuleHandle, NotchModule};
use crate::model::side::Side;
use crate::prefs::codec::{
    decode_bool, decode_order, decode_side_map, encode_bool, encode_order, encode_side_map,
};
use crate::prefs::keys::{module_enabled_key, order_key, SIDE_ASSIGNMENTS_KEY};
use crate::prefs::store::PreferencesStore;
use crate::prefs::PrefsResult;
use crate::registry::events::{ArrangementEvent, Observers, SubscriptionId};
use crate::registry::orders::SideOrders;
use log::{debug, error, info, warn};
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Catalog validation errors raised while building the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    EmptyCatalog,
    InvalidModuleId(String),
    DuplicateModuleId(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "module catalog must not be empty"),
            Self::InvalidModuleId(value) => write!(f, "module id is invalid: `{value}`"),
            Self::DuplicateModuleId(value) => write!(f, "module id already registered: {value}"),
        }
    }
}

impl Error for RegistryError {}

/// Owns the module catalog and every piece of arrangement state.
///
/// Reads are pure; the only writers are [`ModuleRegistry::toggle`] and the
/// arrangement engine. Each write is persisted before observers run.
pub struct ModuleRegistry<S: PreferencesStore> {
    store: S,
    catalog: Vec<ModuleHandle>,
    enabled: Vec<bool>,
    side_assignments: BTreeMap<String, Side>,
    orders: SideOrders,
    observers: Observers,
}

impl<S: PreferencesStore> ModuleRegistry<S> {
    /// Validates `catalog` and loads persisted arrangement state from `store`.
    ///
    /// Store read failures and malformed values are logged and replaced with
    /// defaults; only an invalid catalog is an error.
    pub fn load(store: S, catalog: Vec<ModuleHandle>) -> Result<Self, RegistryError> {
        validate_catalog(&catalog)?;

        let enabled = catalog
            .iter()
            .map(|module| load_enabled(&store, module.as_ref()))
            .collect::<Vec<_>>();
        let side_assignments = load_side_assignments(&store, &catalog);
        let orders = load_orders(&store, &catalog, &side_assignments);

        info!(
            "event=registry_load module=registry status=ok modules={} enabled={} assigned={} left_order={} right_order={}",
            catalog.len(),
            enabled.iter().filter(|flag| **flag).count(),
            side_assignments.len(),
            orders.get(Side::Left).len(),
            orders.get(Side::Right).len()
        );

        Ok(Self {
            store,
            catalog,
            enabled,
            side_assignments,
            orders,
            observers: Observers::default(),
        })
    }

    /// Full catalog in registration order.
    pub fn list_available(&self) -> &[ModuleHandle] {
        &self.catalog
    }

    /// Enabled modules by descending priority; ties keep registration order.
    pub fn list_enabled(&self) -> Vec<ModuleHandle> {
        let mut modules: Vec<ModuleHandle> = self
            .catalog
            .iter()
            .zip(&self.enabled)
            .filter(|(_, enabled)| **enabled)
            .map(|(module, _)| module.clone())
            .collect();
        modules.sort_by_key(|module| Reverse(module.priority()));
        modules
    }

    /// Catalog minus enabled modules, in registration order.
    pub fn disabled_modules(&self) -> Vec<ModuleHandle> {
        self.catalog
            .iter()
            .zip(&self.enabled)
            .filter(|(_, enabled)| !**enabled)
            .map(|(module, _)| module.clone())
            .collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<ModuleHandle> {
        self.index_of(id).map(|index| self.catalog[index].clone())
    }

    /// `false` for unknown ids.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.index_of(id)
            .map(|index| self.enabled[index])
            .unwrap_or(false)
    }

    /// Flips enablement of `id` and persists it. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            debug!("event=module_toggle module=registry status=not_found module_id={id}");
            return;
        };

        let enabled = !self.enabled[index];
        self.set_enabled(id, enabled);
        self.observers.notify(&ArrangementEvent::ModuleToggled {
            module_id: id.to_string(),
            enabled,
        });
    }

    /// User assignment if present, else the module's default side.
    pub fn effective_side(&self, module: &dyn NotchModule) -> Side {
        effective_side(&self.side_assignments, module)
    }

    /// Enabled modules on `side` in render order.
    ///
    /// With a user order array, listed ids come first in array order and the
    /// rest follow by priority. Without one, priority order applies.
    pub fn side_list(&self, side: Side) -> Vec<ModuleHandle> {
        self.side_list_with(side, &self.orders, None)
    }

    /// Enabled modules whose collapsed icon is currently visible.
    pub fn collapsed_modules(&self) -> Vec<ModuleHandle> {
        self.list_enabled()
            .into_iter()
            .filter(|module| module.show_in_collapsed())
            .collect()
    }

    /// [`Self::side_list`] restricted to modules visible while collapsed.
    pub fn collapsed_side_list(&self, side: Side) -> Vec<ModuleHandle> {
        self.side_list(side)
            .into_iter()
            .filter(|module| module.show_in_collapsed())
            .collect()
    }

    /// User order array for `side`; empty means priority fallback.
    pub fn order(&self, side: Side) -> &[String] {
        self.orders.get(side)
    }

    pub fn side_assignments(&self) -> &BTreeMap<String, Side> {
        &self.side_assignments
    }

    /// Registers `observer` for every subsequent arrangement change.
    pub fn subscribe(
        &mut self,
        observer: impl Fn(&ArrangementEvent) + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Side list over hypothetical `orders`.
    ///
    /// `moved` treats that module as enabled and placed on the given side,
    /// which lets the arrangement engine preview a drop before applying it.
    pub(crate) fn side_list_with(
        &self,
        side: Side,
        orders: &SideOrders,
        moved: Option<(&str, Side)>,
    ) -> Vec<ModuleHandle> {
        let mut modules: Vec<ModuleHandle> = self
            .catalog
            .iter()
            .zip(&self.enabled)
            .filter_map(|(module, enabled)| {
                let placed = match moved {
                    Some((id, moved_side)) if id == module.id() => Some(moved_side),
                    _ if *enabled => Some(self.effective_side(module.as_ref())),
                    _ => None,
                };
                (placed == Some(side)).then(|| module.clone())
            })
            .collect();
        modules.sort_by_key(|module| Reverse(module.priority()));

        let order = orders.get(side);
        if !order.is_empty() {
            modules.sort_by_key(|module| {
                order
                    .iter()
                    .position(|id| id == module.id())
                    .unwrap_or(usize::MAX)
            });
        }
        modules
    }

    /// Sets enablement and persists it without notifying observers.
    ///
    /// Returns whether the flag changed. Unknown ids are ignored.
    pub(crate) fn set_enabled(&mut self, id: &str, enabled: bool) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if self.enabled[index] == enabled {
            return false;
        }
        self.enabled[index] = enabled;
        self.persist(&module_enabled_key(id), Ok(encode_bool(enabled).to_string()));
        info!("event=module_toggle module=registry status=ok module_id={id} enabled={enabled}");
        true
    }

    pub(crate) fn orders_mut(&mut self) -> &mut SideOrders {
        &mut self.orders
    }

    pub(crate) fn orders(&self) -> &SideOrders {
        &self.orders
    }

    pub(crate) fn assign_side(&mut self, id: &str, side: Side) {
        self.side_assignments.insert(id.to_string(), side);
    }

    pub(crate) fn persist_orders(&self) {
        for side in Side::ALL {
            let key = order_key(side);
            self.persist(key, encode_order(key, self.orders.get(side)));
        }
    }

    pub(crate) fn persist_side_assignments(&self) {
        self.persist(
            SIDE_ASSIGNMENTS_KEY,
            encode_side_map(SIDE_ASSIGNMENTS_KEY, &self.side_assignments),
        );
    }

    /// Drops every user arrangement choice and removes the stored keys.
    pub(crate) fn clear_arrangement(&mut self) {
        self.side_assignments.clear();
        self.orders.clear();
        for (index, module) in self.catalog.iter().enumerate() {
            self.enabled[index] = module.default_enabled();
        }

        let mut keys: Vec<String> = self
            .catalog
            .iter()
            .map(|module| module_enabled_key(module.id()))
            .collect();
        keys.push(SIDE_ASSIGNMENTS_KEY.to_string());
        keys.extend(Side::ALL.map(|side| order_key(side).to_string()));
        for key in keys {
            if let Err(err) = self.store.remove(&key) {
                error!("event=prefs_remove module=registry status=error key={key} error={err}");
            }
        }
    }

    pub(crate) fn notify(&self, event: &ArrangementEvent) {
        self.observers.notify(event);
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.catalog.iter().position(|module| module.id() == id)
    }

    fn persist(&self, key: &str, value: PrefsResult<String>) {
        let result = value.and_then(|value| self.store.set(key, &value));
        if let Err(err) = result {
            error!("event=prefs_write module=registry status=error key={key} error={err}");
        }
    }
}

fn effective_side(assignments: &BTreeMap<String, Side>, module: &dyn NotchModule) -> Side {
    assignments
        .get(module.id())
        .copied()
        .unwrap_or_else(|| module.default_side())
}

fn is_valid_module_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' || ch == '-')
}

fn validate_catalog(catalog: &[ModuleHandle]) -> Result<(), RegistryError> {
    if catalog.is_empty() {
        return Err(RegistryError::EmptyCatalog);
    }
    let mut seen = HashSet::with_capacity(catalog.len());
    for module in catalog {
        let id = module.id();
        if !is_valid_module_id(id) {
            return Err(RegistryError::InvalidModuleId(id.to_string()));
        }
        if !seen.insert(id) {
            return Err(RegistryError::DuplicateModuleId(id.to_string()));
        }
    }
    Ok(())
}

fn read_raw(store: &impl PreferencesStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            warn!("event=prefs_read module=registry status=error key={key} error={err}");
            None
        }
    }
}

fn load_enabled(store: &impl PreferencesStore, module: &dyn NotchModule) -> bool {
    let key = module_enabled_key(module.id());
    match read_raw(store, &key).map(|raw| decode_bool(&raw)) {
        Some(Some(enabled)) => enabled,
        Some(None) => {
            warn!("event=prefs_read module=registry status=malformed key={key}");
            module.default_enabled()
        }
        None => module.default_enabled(),
    }
}

fn load_side_assignments(
    store: &impl PreferencesStore,
    catalog: &[ModuleHandle],
) -> BTreeMap<String, Side> {
    let Some(raw) = read_raw(store, SIDE_ASSIGNMENTS_KEY) else {
        return BTreeMap::new();
    };
    let Some(mut assignments) = decode_side_map(&raw) else {
        warn!("event=prefs_read module=registry status=malformed key={SIDE_ASSIGNMENTS_KEY}");
        return BTreeMap::new();
    };
    assignments.retain(|id, _| catalog.iter().any(|module| module.id() == id));
    assignments
}

fn load_orders(
    store: &impl PreferencesStore,
    catalog: &[ModuleHandle],
    assignments: &BTreeMap<String, Side>,
) -> SideOrders {
    let mut orders = SideOrders::default();
    for side in Side::ALL {
        let key = order_key(side);
        let Some(raw) = read_raw(store, key) else {
            continue;
        };
        let Some(ids) = decode_order(&raw) else {
            warn!("event=prefs_read module=registry status=malformed key={key}");
            continue;
        };
        let listed = ids.len();
        // Ids are only kept on the side the module is effectively placed.
        *orders.get_mut(side) = ids
            .into_iter()
            .filter(|id| {
                catalog
                    .iter()
                    .find(|module| module.id() == id)
                    .is_some_and(|module| effective_side(assignments, module.as_ref()) == side)
            })
            .collect();
        let dropped = listed - orders.get(side).len();
        if dropped > 0 {
            warn!("event=prefs_read module=registry status=sanitized key={key} dropped={dropped}");
        }
    }
    orders
}
