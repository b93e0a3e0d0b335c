//! Preferences store contract and SQLite implementation.

use crate::prefs::PrefsResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Durable string key/value store.
///
/// Implementations must apply each `set` before returning so that a read in
/// the same event-loop turn observes it.
pub trait PreferencesStore {
    fn get(&self, key: &str) -> PrefsResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PrefsResult<()>;
    fn remove(&self, key: &str) -> PrefsResult<()>;

    /// Returns the stored value or `default` when the key is absent.
    fn get_or(&self, key: &str, default: &str) -> PrefsResult<String> {
        Ok(self.get(key)?.unwrap_or_else(|| default.to_string()))
    }
}

impl<T: PreferencesStore + ?Sized> PreferencesStore for &T {
    fn get(&self, key: &str) -> PrefsResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> PrefsResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> PrefsResult<()> {
        (**self).remove(key)
    }
}

/// Preferences stored in the `preferences` table of a migrated connection.
pub struct SqlitePreferencesStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferencesStore<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PreferencesStore for SqlitePreferencesStore<'_> {
    fn get(&self, key: &str) -> PrefsResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> PrefsResult<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> PrefsResult<()> {
        self.conn
            .execute("DELETE FROM preferences WHERE key = ?1;", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{PreferencesStore, SqlitePreferencesStore};
    use crate::db::open_db_in_memory;

    #[test]
    fn set_overwrites_and_remove_clears() {
        let conn = open_db_in_memory().expect("open db");
        let store = SqlitePreferencesStore::new(&conn);

        assert_eq!(store.get("ui.padding").expect("get"), None);
        store.set("ui.padding", "12").expect("set");
        store.set("ui.padding", "16").expect("overwrite");
        assert_eq!(store.get("ui.padding").expect("get").as_deref(), Some("16"));

        store.remove("ui.padding").expect("remove");
        assert_eq!(store.get_or("ui.padding", "12").expect("get_or"), "12");
    }
}
