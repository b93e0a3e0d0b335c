use notchbar_core::db::migrations::{latest_version, user_version};
use notchbar_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn in_memory_database_has_preferences_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(user_version(&conn).unwrap(), latest_version());
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'preferences'
            );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn reopening_file_database_keeps_schema_and_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.sqlite3");

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO preferences (key, value) VALUES ('ui.padding', '10');",
        [],
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(user_version(&conn).unwrap(), latest_version());
    let value: String = conn
        .query_row(
            "SELECT value FROM preferences WHERE key = 'ui.padding';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(value, "10");
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}
