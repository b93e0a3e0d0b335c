//! Numeric layout settings consumed by overflow math and the shell.

use crate::prefs::codec::decode_f64;
use crate::prefs::keys::{
    COLLAPSED_HEIGHT_KEY, COLLAPSED_WIDTH_KEY, COLLAPSE_DELAY_MS_KEY, EXPANDED_HEIGHT_KEY,
    EXPANDED_WIDTH_KEY, ICON_SPACING_KEY, ICON_WIDTH_KEY, PADDING_KEY,
};
use crate::prefs::store::PreferencesStore;
use crate::prefs::PrefsResult;
use log::warn;
use std::time::Duration;

pub const DEFAULT_COLLAPSED_WIDTH: f64 = 310.0;
pub const DEFAULT_COLLAPSED_HEIGHT: f64 = 32.0;
pub const DEFAULT_EXPANDED_WIDTH: f64 = 500.0;
pub const DEFAULT_EXPANDED_HEIGHT: f64 = 250.0;
pub const DEFAULT_PADDING: f64 = 12.0;
pub const DEFAULT_ICON_WIDTH: f64 = 28.0;
pub const DEFAULT_ICON_SPACING: f64 = 4.0;
pub const DEFAULT_COLLAPSE_DELAY_MS: f64 = 250.0;
pub const MAX_COLLAPSE_DELAY_MS: f64 = 60_000.0;

const ALL_KEYS: [&str; 8] = [
    COLLAPSED_WIDTH_KEY,
    COLLAPSED_HEIGHT_KEY,
    EXPANDED_WIDTH_KEY,
    EXPANDED_HEIGHT_KEY,
    PADDING_KEY,
    ICON_WIDTH_KEY,
    ICON_SPACING_KEY,
    COLLAPSE_DELAY_MS_KEY,
];

/// Panel geometry and timing, in points and milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSettings {
    pub collapsed_width: f64,
    pub collapsed_height: f64,
    pub expanded_width: f64,
    pub expanded_height: f64,
    pub padding: f64,
    pub icon_width: f64,
    pub icon_spacing: f64,
    pub collapse_delay_ms: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            collapsed_width: DEFAULT_COLLAPSED_WIDTH,
            collapsed_height: DEFAULT_COLLAPSED_HEIGHT,
            expanded_width: DEFAULT_EXPANDED_WIDTH,
            expanded_height: DEFAULT_EXPANDED_HEIGHT,
            padding: DEFAULT_PADDING,
            icon_width: DEFAULT_ICON_WIDTH,
            icon_spacing: DEFAULT_ICON_SPACING,
            collapse_delay_ms: DEFAULT_COLLAPSE_DELAY_MS,
        }
    }
}

impl LayoutSettings {
    /// Reads every setting, falling back per key on absent or invalid values.
    ///
    /// Sizes must be positive; padding, spacing and delay may be zero. The
    /// delay is capped at [`MAX_COLLAPSE_DELAY_MS`].
    pub fn load(store: &impl PreferencesStore) -> Self {
        let defaults = Self::default();
        Self {
            collapsed_width: read_positive(store, COLLAPSED_WIDTH_KEY, defaults.collapsed_width),
            collapsed_height: read_positive(
                store,
                COLLAPSED_HEIGHT_KEY,
                defaults.collapsed_height,
            ),
            expanded_width: read_positive(store, EXPANDED_WIDTH_KEY, defaults.expanded_width),
            expanded_height: read_positive(store, EXPANDED_HEIGHT_KEY, defaults.expanded_height),
            padding: read_non_negative(store, PADDING_KEY, defaults.padding),
            icon_width: read_positive(store, ICON_WIDTH_KEY, defaults.icon_width),
            icon_spacing: read_non_negative(store, ICON_SPACING_KEY, defaults.icon_spacing),
            collapse_delay_ms: read_number(
                store,
                COLLAPSE_DELAY_MS_KEY,
                defaults.collapse_delay_ms,
                |value| (0.0..=MAX_COLLAPSE_DELAY_MS).contains(&value),
            ),
        }
    }

    pub fn save(&self, store: &impl PreferencesStore) -> PrefsResult<()> {
        let values = [
            self.collapsed_width,
            self.collapsed_height,
            self.expanded_width,
            self.expanded_height,
            self.padding,
            self.icon_width,
            self.icon_spacing,
            self.collapse_delay_ms,
        ];
        for (key, value) in ALL_KEYS.iter().zip(values) {
            store.set(key, &value.to_string())?;
        }
        Ok(())
    }

    /// Collapse delay as a duration; out-of-range values use the default.
    pub fn collapse_delay(&self) -> Duration {
        let default = Duration::from_millis(DEFAULT_COLLAPSE_DELAY_MS as u64);
        if !(0.0..=MAX_COLLAPSE_DELAY_MS).contains(&self.collapse_delay_ms) {
            return default;
        }
        Duration::try_from_secs_f64(self.collapse_delay_ms / 1000.0).unwrap_or(default)
    }
}

/// Removes every stored layout setting so defaults apply again.
pub fn reset_layout_settings(store: &impl PreferencesStore) -> PrefsResult<()> {
    for key in ALL_KEYS {
        store.remove(key)?;
    }
    Ok(())
}

fn read_positive(store: &impl PreferencesStore, key: &str, default: f64) -> f64 {
    read_number(store, key, default, |value| value > 0.0)
}

fn read_non_negative(store: &impl PreferencesStore, key: &str, default: f64) -> f64 {
    read_number(store, key, default, |value| value >= 0.0)
}

fn read_number(
    store: &impl PreferencesStore,
    key: &str,
    default: f64,
    accept: impl Fn(f64) -> bool,
) -> f64 {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default,
        Err(err) => {
            warn!("event=settings_read module=prefs status=error key={key} error={err}");
            return default;
        }
    };
    match decode_f64(&raw).filter(|value| accept(*value)) {
        Some(value) => value,
        None => {
            warn!("event=settings_read module=prefs status=invalid key={key}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{reset_layout_settings, LayoutSettings};
    use crate::db::open_db_in_memory;
    use crate::prefs::keys::{
        COLLAPSED_WIDTH_KEY, COLLAPSE_DELAY_MS_KEY, ICON_WIDTH_KEY, PADDING_KEY,
    };
    use crate::prefs::store::{PreferencesStore, SqlitePreferencesStore};
    use std::time::Duration;

    #[test]
    fn load_uses_defaults_on_empty_store() {
        let conn = open_db_in_memory().expect("open db");
        let store = SqlitePreferencesStore::new(&conn);

        let settings = LayoutSettings::load(&store);
        assert_eq!(settings, LayoutSettings::default());
        assert_eq!(settings.collapse_delay(), Duration::from_millis(250));
    }

    #[test]
    fn load_falls_back_per_key_on_invalid_values() {
        let conn = open_db_in_memory().expect("open db");
        let store = SqlitePreferencesStore::new(&conn);
        store.set(COLLAPSED_WIDTH_KEY, "340").expect("set width");
        store.set(ICON_WIDTH_KEY, "0").expect("set icon width");
        store.set(PADDING_KEY, "-3").expect("set padding");

        let settings = LayoutSettings::load(&store);
        assert_eq!(settings.collapsed_width, 340.0);
        assert_eq!(settings.icon_width, 28.0);
        assert_eq!(settings.padding, 12.0);
    }

    #[test]
    fn huge_collapse_delay_falls_back_to_default() {
        let conn = open_db_in_memory().expect("open db");
        let store = SqlitePreferencesStore::new(&conn);
        store.set(COLLAPSE_DELAY_MS_KEY, "1e300").expect("set delay");

        let settings = LayoutSettings::load(&store);
        assert_eq!(settings.collapse_delay_ms, 250.0);
        assert_eq!(settings.collapse_delay(), Duration::from_millis(250));

        store.set(COLLAPSE_DELAY_MS_KEY, "60000").expect("set max delay");
        assert_eq!(
            LayoutSettings::load(&store).collapse_delay(),
            Duration::from_secs(60)
        );
    }

    #[test]
    fn out_of_range_delay_in_memory_uses_default_duration() {
        let settings = LayoutSettings {
            collapse_delay_ms: f64::MAX,
            ..LayoutSettings::default()
        };
        assert_eq!(settings.collapse_delay(), Duration::from_millis(250));

        let negative = LayoutSettings {
            collapse_delay_ms: -5.0,
            ..LayoutSettings::default()
        };
        assert_eq!(negative.collapse_delay(), Duration::from_millis(250));
    }

    #[test]
    fn save_then_reset_round_trips_through_store() {
        let conn = open_db_in_memory().expect("open db");
        let store = SqlitePreferencesStore::new(&conn);
        let custom = LayoutSettings {
            padding: 0.0,
            icon_spacing: 6.0,
            ..LayoutSettings::default()
        };

        custom.save(&store).expect("save");
        assert_eq!(LayoutSettings::load(&store), custom);

        reset_layout_settings(&store).expect("reset");
        assert_eq!(LayoutSettings::load(&store), LayoutSettings::default());
    }
}
