use notchbar_core::db::open_db_in_memory;
use notchbar_core::prefs::keys::COLLAPSE_DELAY_MS_KEY;
use notchbar_core::{
    ArrangementEngine, BuiltinModules, LayoutSettings, ModuleRegistry, PanelState,
    PreferencesStore, PresentationShell, Rect, Side, SqlitePreferencesStore, Surface,
    WindowGeometry,
};
use std::time::{Duration, Instant};

#[derive(Default)]
struct RecordingGeometry {
    sizes: Vec<(f64, f64)>,
    states: Vec<PanelState>,
}

impl WindowGeometry for RecordingGeometry {
    fn report_desired_size(&mut self, width: f64, height: f64) {
        self.sizes.push((width, height));
    }

    fn report_active_region(&mut self, _rect: Rect, state: PanelState) {
        self.states.push(state);
    }
}

#[test]
fn hover_flicker_within_delay_never_collapses() {
    let start = Instant::now();
    let mut shell = PresentationShell::new(RecordingGeometry::default(), LayoutSettings::default());

    shell.pointer_entered();
    shell.pointer_exited(start + Duration::from_millis(10));
    assert!(!shell.tick(start + Duration::from_millis(60)));
    shell.pointer_entered();

    for ms in [100, 260, 500, 2_000] {
        assert!(!shell.tick(start + Duration::from_millis(ms)));
        assert_eq!(shell.state(), PanelState::Expanded);
    }
    assert_eq!(
        shell.geometry().states,
        vec![PanelState::Collapsed, PanelState::Expanded]
    );
}

#[test]
fn collapsed_frame_shows_dynamic_icons_per_side() {
    let conn = open_db_in_memory().unwrap();
    let store = SqlitePreferencesStore::new(&conn);
    let modules = BuiltinModules::new();
    let registry = ModuleRegistry::load(&store, modules.catalog()).unwrap();
    let mut shell = PresentationShell::new(RecordingGeometry::default(), LayoutSettings::default());

    let frame = shell.render(&registry);
    assert_eq!(frame.state, PanelState::Collapsed);
    let left: Vec<_> = frame.left_icons.iter().map(|view| view.module_id.as_str()).collect();
    assert_eq!(left, vec!["calendar", "todolist"]);
    assert!(frame.right_icons.is_empty());
    assert!(frame.left_icons.iter().all(|view| view.surface == Surface::Collapsed));

    modules.media.set_playing(true);
    modules.file_manager.set_tray_file_count(2);
    let frame = shell.render(&registry);
    let right: Vec<_> = frame.right_icons.iter().map(|view| view.module_id.as_str()).collect();
    assert_eq!(right, vec!["media", "filemanager"]);
    assert_eq!(frame.right_icons[1].badge.as_deref(), Some("2"));
}

#[test]
fn activating_collapsed_icon_expands_and_selects_module() {
    let conn = open_db_in_memory().unwrap();
    let store = SqlitePreferencesStore::new(&conn);
    let registry = ModuleRegistry::load(&store, BuiltinModules::new().catalog()).unwrap();
    let mut shell = PresentationShell::new(RecordingGeometry::default(), LayoutSettings::default());

    assert!(shell.activate_module(&registry, "todolist"));
    assert!(!shell.activate_module(&registry, "calculator"));

    let frame = shell.render(&registry);
    assert_eq!(frame.state, PanelState::Expanded);
    assert_eq!(frame.tabs, vec!["media", "calendar", "todolist", "filemanager"]);
    let active = frame.active.expect("active module");
    assert_eq!(active.module_id, "todolist");
    assert_eq!(active.surface, Surface::Expanded);
    assert_eq!(shell.active_index(), 2);

    let settings = LayoutSettings::default();
    assert_eq!(
        shell.geometry().sizes.last(),
        Some(&(settings.expanded_width, settings.expanded_height))
    );
}

#[test]
fn active_module_resets_when_disabled() {
    let conn = open_db_in_memory().unwrap();
    let store = SqlitePreferencesStore::new(&conn);
    let mut registry = ModuleRegistry::load(&store, BuiltinModules::new().catalog()).unwrap();
    let mut shell = PresentationShell::new(RecordingGeometry::default(), LayoutSettings::default());
    assert!(shell.activate_module(&registry, "filemanager"));

    ArrangementEngine::new(&mut registry).disable_module("filemanager");

    let active = shell.active_module(&registry).expect("active module");
    assert_eq!(active.id(), "media");
    assert_eq!(shell.active_index(), 0);
}

#[test]
fn tab_selection_is_clamped() {
    let conn = open_db_in_memory().unwrap();
    let store = SqlitePreferencesStore::new(&conn);
    let mut registry = ModuleRegistry::load(&store, BuiltinModules::new().catalog()).unwrap();
    let mut shell = PresentationShell::new(RecordingGeometry::default(), LayoutSettings::default());

    shell.select_tab(&registry, 42);
    assert_eq!(shell.active_index(), 3);
    assert_eq!(shell.active_module(&registry).unwrap().id(), "filemanager");

    let mut engine = ArrangementEngine::new(&mut registry);
    for id in ["calendar", "todolist", "media", "filemanager"] {
        engine.disable_module(id);
    }
    assert!(shell.active_module(&registry).is_none());
    assert!(shell.render(&registry).tabs.is_empty());

    ArrangementEngine::new(&mut registry).move_module_to_side("media", Side::Left, 0);
    assert_eq!(shell.active_module(&registry).unwrap().id(), "media");
}

#[test]
fn settings_update_changes_delay_and_reports_geometry() {
    let start = Instant::now();
    let mut shell = PresentationShell::new(RecordingGeometry::default(), LayoutSettings::default());
    shell.update_settings(LayoutSettings {
        collapse_delay_ms: 1_000.0,
        collapsed_width: 340.0,
        ..LayoutSettings::default()
    });
    assert_eq!(shell.geometry().sizes.last().map(|size| size.0), Some(340.0));

    shell.pointer_entered();
    shell.pointer_exited(start);
    assert!(!shell.tick(start + Duration::from_millis(500)));
    assert!(shell.tick(start + Duration::from_millis(1_000)));
    assert_eq!(shell.state(), PanelState::Collapsed);
}

#[test]
fn corrupt_stored_delay_still_builds_shell_with_default_delay() {
    let conn = open_db_in_memory().unwrap();
    let store = SqlitePreferencesStore::new(&conn);
    store.set(COLLAPSE_DELAY_MS_KEY, "1e300").unwrap();

    let start = Instant::now();
    let mut shell = PresentationShell::new(RecordingGeometry::default(), LayoutSettings::load(&store));
    shell.pointer_entered();
    shell.pointer_exited(start);

    assert!(!shell.tick(start + Duration::from_millis(249)));
    assert!(shell.tick(start + Duration::from_millis(250)));
    assert_eq!(shell.state(), PanelState::Collapsed);
}
