//! CLI smoke probe.
//!
//! # Responsibility
//! - Verify `notchbar_core` linkage and print the stored arrangement.
//! - Usage: `notchbar_cli [PREFS_DB_PATH] [NOTCH_WIDTH]`; without a path an
//!   in-memory database with default preferences is used.

use notchbar_core::db::{open_db, open_db_in_memory};
use notchbar_core::{
    default_catalog, module_ids, ArrangementEngine, LayoutSettings, ModuleRegistry,
    OverflowGeometry, Side, SqlitePreferencesStore,
};
use std::process::ExitCode;

const DEFAULT_NOTCH_WIDTH: f64 = 185.0;

fn main() -> ExitCode {
    println!("notchbar_core ping={}", notchbar_core::ping());
    println!("notchbar_core version={}", notchbar_core::core_version());

    let mut args = std::env::args().skip(1);
    let db_path = args.next();
    let notch_width = match args.next().map(|raw| raw.parse::<f64>()) {
        None => DEFAULT_NOTCH_WIDTH,
        Some(Ok(width)) if width.is_finite() && width >= 0.0 => width,
        Some(_) => {
            eprintln!("notch width must be a non-negative number");
            return ExitCode::FAILURE;
        }
    };

    let conn = match db_path.as_deref() {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    };
    let conn = match conn {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open preferences: {err}");
            return ExitCode::FAILURE;
        }
    };

    let store = SqlitePreferencesStore::new(&conn);
    let settings = LayoutSettings::load(&store);
    let mut registry = match ModuleRegistry::load(&store, default_catalog()) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("failed to build module registry: {err}");
            return ExitCode::FAILURE;
        }
    };

    for side in Side::ALL {
        println!("{side}={}", module_ids(&registry.side_list(side)).join(","));
    }
    println!(
        "disabled={}",
        module_ids(&registry.disabled_modules()).join(",")
    );

    let engine = ArrangementEngine::new(&mut registry);
    let geometry = OverflowGeometry::from_settings(&settings, notch_width);
    let overflow = engine.overflow(&geometry);
    println!(
        "overflow left={} right={} max_icons_per_side={}",
        overflow.left_overflow,
        overflow.right_overflow,
        geometry.max_icons_per_side()
    );

    ExitCode::SUCCESS
}
