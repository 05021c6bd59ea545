use anyhow::{bail, Context, Result};
use rusqlite::Connection;

const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Brings the store to `CURRENT_SCHEMA_VERSION`. A fresh file (`user_version`
/// 0) gets the key-value table; a file written by a newer build is refused.
pub fn run_migrations(conn: &mut Connection) -> Result<()> {
    let version: i32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .context("reading user_version")?;

    match version {
        CURRENT_SCHEMA_VERSION => return Ok(()),
        0 => {}
        newer if newer > CURRENT_SCHEMA_VERSION => bail!(
            "store version {newer} is newer than supported schema {CURRENT_SCHEMA_VERSION}"
        ),
        other => bail!("unrecognized store version {other}"),
    }

    let tx = conn.transaction().context("opening schema transaction")?;
    tx.execute_batch(include_str!("schemas/schema_v1.sql"))
        .context("creating kv_entries")?;
    tx.pragma_update(None, "user_version", CURRENT_SCHEMA_VERSION)
        .context("stamping user_version")?;
    tx.commit().context("committing schema")?;

    log::info!("Key-value store initialized at schema version {CURRENT_SCHEMA_VERSION}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_version(conn: &Connection) -> i32 {
        conn.pragma_query_value(None, "user_version", |row| row.get(0))
            .expect("read user_version")
    }

    #[test]
    fn migrates_fresh_database_to_current_version() {
        let mut conn = Connection::open_in_memory().expect("open in-memory db");
        run_migrations(&mut conn).expect("migrations succeed");
        assert_eq!(user_version(&conn), CURRENT_SCHEMA_VERSION);

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv_entries'",
                [],
                |row| row.get(0),
            )
            .expect("query sqlite_master");
        assert_eq!(tables, 1);
    }

    #[test]
    fn rerunning_is_a_no_op() {
        let mut conn = Connection::open_in_memory().expect("open in-memory db");
        run_migrations(&mut conn).expect("first run");
        run_migrations(&mut conn).expect("second run");
        assert_eq!(user_version(&conn), CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn refuses_newer_schema() {
        let mut conn = Connection::open_in_memory().expect("open in-memory db");
        conn.pragma_update(None, "user_version", CURRENT_SCHEMA_VERSION + 1)
            .expect("bump version");
        let err = run_migrations(&mut conn).unwrap_err();
        assert!(err.to_string().contains("newer than supported"));
    }

    #[test]
    fn keeps_existing_entries_when_already_current() {
        let mut conn = Connection::open_in_memory().expect("open in-memory db");
        run_migrations(&mut conn).expect("first run");
        conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at) VALUES ('survey_done', 'true', '2026-10-19T00:00:00Z')",
            [],
        )
        .expect("insert entry");

        run_migrations(&mut conn).expect("second run");
        let value: String = conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = 'survey_done'",
                [],
                |row| row.get(0),
            )
            .expect("entry survives");
        assert_eq!(value, "true");
    }
}
