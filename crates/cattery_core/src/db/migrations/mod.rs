//! Cattery schema versions and the runner that applies them.
//!
//! Each entry upgrades the schema by exactly one version. The whole pending
//! range runs in one transaction, so a failing script leaves the previous
//! version in place.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// `(version, script)` pairs, strictly increasing by one.
const SCHEMA_SCRIPTS: &[(u32, &str)] = &[(1, include_str!("0001_init.sql"))];

/// Returns the schema version this binary writes.
pub fn latest_version() -> u32 {
    SCHEMA_SCRIPTS.last().map_or(0, |&(version, _)| version)
}

/// Upgrades `conn` to [`latest_version`], refusing databases from newer builds.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from = current_user_version(conn)?;
    let to = latest_version();

    if from > to {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: to,
        });
    }

    let pending: Vec<_> = SCHEMA_SCRIPTS
        .iter()
        .filter(|&&(version, _)| version > from)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for &&(version, script) in &pending {
        tx.execute_batch(script)
            .and_then(|()| tx.pragma_update(None, "user_version", version))
            .map_err(|source| DbError::Migration { version, source })?;
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from_version={from} to_version={to}");
    Ok(())
}

/// Reads the schema version mirrored in `PRAGMA user_version`.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))?;
    Ok(version)
}
