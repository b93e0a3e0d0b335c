//! Panel state machine and frame assembly.

use crate::model::module::ModuleHandle;
use crate::model::side::Side;
use crate::model::view::ModuleView;
use crate::prefs::settings::LayoutSettings;
use crate::prefs::store::PreferencesStore;
use crate::registry::ModuleRegistry;
use crate::shell::geometry::{Rect, WindowGeometry};
use crate::shell::timer::CollapseTimer;
use log::{debug, info};
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Window-content state of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Collapsed,
    Expanded,
}

impl Display for PanelState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collapsed => f.write_str("collapsed"),
            Self::Expanded => f.write_str("expanded"),
        }
    }
}

/// Everything the UI needs to draw one frame.
///
/// Collapsed frames carry the icon strips; expanded frames carry the tab
/// ids and the active module's expanded view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellFrame {
    pub state: PanelState,
    pub left_icons: Vec<ModuleView>,
    pub right_icons: Vec<ModuleView>,
    pub tabs: Vec<String>,
    pub active: Option<ModuleView>,
}

/// Hover-driven collapsed/expanded container.
///
/// Reads the registry but never writes arrangement state.
pub struct PresentationShell<G: WindowGeometry> {
    geometry: G,
    settings: LayoutSettings,
    state: PanelState,
    hovering: bool,
    file_dragging: bool,
    collapse: CollapseTimer,
    active_index: usize,
    active_id: Option<String>,
}

impl<G: WindowGeometry> PresentationShell<G> {
    /// Starts collapsed and reports the collapsed geometry once.
    pub fn new(geometry: G, settings: LayoutSettings) -> Self {
        let mut shell = Self {
            geometry,
            collapse: CollapseTimer::new(settings.collapse_delay()),
            settings,
            state: PanelState::Collapsed,
            hovering: false,
            file_dragging: false,
            active_index: 0,
            active_id: None,
        };
        shell.report_geometry();
        shell
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_file_dragging(&self) -> bool {
        self.file_dragging
    }

    pub fn collapse_pending(&self) -> bool {
        self.collapse.is_pending()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn pointer_entered(&mut self) {
        self.hovering = true;
        self.cancel_collapse();
        self.set_state(PanelState::Expanded);
    }

    /// Schedules a collapse after the configured delay.
    pub fn pointer_exited(&mut self, now: Instant) {
        self.hovering = false;
        self.schedule_collapse(now);
    }

    pub fn file_drag_entered(&mut self) {
        self.file_dragging = true;
        self.cancel_collapse();
        self.set_state(PanelState::Expanded);
    }

    /// Ends a file drag (drop or leave). Collapses later unless hovered.
    pub fn file_drag_exited(&mut self, now: Instant) {
        self.file_dragging = false;
        if !self.hovering {
            self.schedule_collapse(now);
        }
    }

    /// Fires a due collapse. Returns whether the panel collapsed.
    ///
    /// A due collapse is dropped when the pointer is back or a file drag is
    /// in progress.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.collapse.take_due(now) {
            return false;
        }
        if self.hovering || self.file_dragging {
            debug!(
                "event=collapse_fire module=shell status=stale hovering={} file_dragging={}",
                self.hovering, self.file_dragging
            );
            return false;
        }
        self.set_state(PanelState::Collapsed);
        true
    }

    /// Selects module `id` and expands, as when its collapsed icon is clicked.
    ///
    /// Returns `false` and changes nothing when `id` is not enabled.
    pub fn activate_module<S: PreferencesStore>(
        &mut self,
        registry: &ModuleRegistry<S>,
        id: &str,
    ) -> bool {
        let tabs = registry.list_enabled();
        let Some(index) = tabs.iter().position(|module| module.id() == id) else {
            debug!("event=module_activate module=shell status=not_found module_id={id}");
            return false;
        };
        self.cancel_collapse();
        self.set_active(index, Some(id.to_string()));
        self.set_state(PanelState::Expanded);
        true
    }

    /// Selects the tab at `index`, clamped to the enabled list.
    pub fn select_tab<S: PreferencesStore>(&mut self, registry: &ModuleRegistry<S>, index: usize) {
        let tabs = registry.list_enabled();
        if tabs.is_empty() {
            self.set_active(0, None);
            return;
        }
        let index = index.min(tabs.len() - 1);
        self.set_active(index, Some(tabs[index].id().to_string()));
    }

    /// Active module after clamping against the current enabled list.
    pub fn active_module<S: PreferencesStore>(
        &mut self,
        registry: &ModuleRegistry<S>,
    ) -> Option<ModuleHandle> {
        let tabs = registry.list_enabled();
        self.reconcile_active(&tabs)
    }

    /// Applies new layout settings and re-reports geometry.
    pub fn update_settings(&mut self, settings: LayoutSettings) {
        self.collapse.set_delay(settings.collapse_delay());
        self.settings = settings;
        self.report_geometry();
    }

    /// Builds the frame for the current state.
    pub fn render<S: PreferencesStore>(&mut self, registry: &ModuleRegistry<S>) -> ShellFrame {
        let tabs = registry.list_enabled();
        let active = self.reconcile_active(&tabs);

        match self.state {
            PanelState::Collapsed => ShellFrame {
                state: self.state,
                left_icons: collapsed_views(registry, Side::Left),
                right_icons: collapsed_views(registry, Side::Right),
                tabs: Vec::new(),
                active: None,
            },
            PanelState::Expanded => ShellFrame {
                state: self.state,
                left_icons: Vec::new(),
                right_icons: Vec::new(),
                tabs: tabs.iter().map(|module| module.id().to_string()).collect(),
                active: active.map(|module| module.render_expanded()),
            },
        }
    }

    /// Keeps the active selection valid for `tabs`.
    ///
    /// A selected module that is no longer enabled resets to the first tab;
    /// a bare index is clamped.
    fn reconcile_active(&mut self, tabs: &[ModuleHandle]) -> Option<ModuleHandle> {
        if tabs.is_empty() {
            self.set_active(0, None);
            return None;
        }

        let index = match &self.active_id {
            Some(id) => tabs
                .iter()
                .position(|module| module.id() == id.as_str())
                .unwrap_or(0),
            None => self.active_index.min(tabs.len() - 1),
        };
        let module = tabs[index].clone();
        self.set_active(index, Some(module.id().to_string()));
        Some(module)
    }

    fn set_active(&mut self, index: usize, id: Option<String>) {
        if self.active_index == index && self.active_id == id {
            return;
        }
        debug!(
            "event=module_activate module=shell status=ok index={} module_id={}",
            index,
            id.as_deref().unwrap_or("none")
        );
        self.active_index = index;
        self.active_id = id;
        self.report_geometry();
    }

    fn schedule_collapse(&mut self, now: Instant) {
        if self.state == PanelState::Expanded {
            self.collapse.schedule(now);
        }
    }

    fn cancel_collapse(&mut self) {
        if self.collapse.cancel() {
            debug!("event=collapse_cancel module=shell status=ok");
        }
    }

    fn set_state(&mut self, state: PanelState) {
        if self.state == state {
            return;
        }
        info!(
            "event=panel_state module=shell status=ok from={} to={}",
            self.state, state
        );
        self.state = state;
        self.report_geometry();
    }

    fn report_geometry(&mut self) {
        let (width, height) = match self.state {
            PanelState::Collapsed => (self.settings.collapsed_width, self.settings.collapsed_height),
            PanelState::Expanded => (self.settings.expanded_width, self.settings.expanded_height),
        };
        self.geometry.report_desired_size(width, height);
        self.geometry
            .report_active_region(Rect::top_centered(width, height), self.state);
    }
}

fn collapsed_views<S: PreferencesStore>(registry: &ModuleRegistry<S>, side: Side) -> Vec<ModuleView> {
    registry
        .collapsed_side_list(side)
        .iter()
        .map(|module| module.render_collapsed())
        .collect()
}
