use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::{get_value, set_value};
use crate::error::Result;

pub const RECORDS_KEY: &str = "records";
pub const OPTIONS_KEY: &str = "options";

/// Load the JSON blob under `key`, falling back to `default` when it is
/// missing, unreadable, or doesn't parse. Failures are logged, never returned.
pub fn load_or_default<T, F>(conn: &Connection, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let raw = match get_value(conn, key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored value, using defaults");
            return default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to parse stored value, using defaults");
            default()
        }
    }
}

/// Serialize the whole collection and write it under `key`.
pub fn save<T: Serialize + ?Sized>(conn: &Connection, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    set_value(conn, key, &json)?;
    tracing::debug!(key, bytes = json.len(), "saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::get_connection;
    use crate::models::{Options, Record};

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(&dir.path().join("test.db")).unwrap();
        (dir, conn)
    }

    #[test]
    fn test_missing_records_default_to_empty() {
        let (_dir, conn) = test_db();
        let records: Vec<Record> = load_or_default(&conn, RECORDS_KEY, Vec::new);
        assert!(records.is_empty());
    }

    #[test]
    fn test_corrupt_options_fall_back_to_seed() {
        let (_dir, conn) = test_db();
        set_value(&conn, OPTIONS_KEY, "{not json").unwrap();
        let options: Options = load_or_default(&conn, OPTIONS_KEY, Options::default);
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        let (_dir, conn) = test_db();
        set_value(&conn, RECORDS_KEY, r#"{"id": 1}"#).unwrap();
        let records: Vec<Record> = load_or_default(&conn, RECORDS_KEY, Vec::new);
        assert!(records.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, conn) = test_db();
        let mut options = Options::default();
        options.stations.push("KEXP".to_string());
        save(&conn, OPTIONS_KEY, &options).unwrap();
        let loaded: Options = load_or_default(&conn, OPTIONS_KEY, Options::default);
        assert_eq!(loaded.stations.last().map(String::as_str), Some("KEXP"));
    }

    #[test]
    fn test_reads_camel_case_blob() {
        let (_dir, conn) = test_db();
        let blob = r#"[{"id":1709650000000,"date":"2024-03-05","text":"x","quickbooksText":"y","paid":true,"invoiced":false}]"#;
        set_value(&conn, RECORDS_KEY, blob).unwrap();
        let records: Vec<Record> = load_or_default(&conn, RECORDS_KEY, Vec::new);
        assert_eq!(records.len(), 1);
        assert!(records[0].paid);
        assert_eq!(records[0].quickbooks_text, "y");
    }
}
