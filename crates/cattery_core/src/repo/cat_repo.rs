//! Cat repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide save/find APIs over `cats` with owners joined in.
//! - Persist transient owners together with the cat referencing them.
//!
//! # Invariants
//! - `save` runs in one IMMEDIATE transaction: either the owner and the cat
//!   are both written, or neither is.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::cat::{Cat, CatId};
use crate::model::owner::{Owner, OwnerId};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};

const CAT_SELECT_SQL: &str = "SELECT
    c.id,
    c.name,
    c.age,
    c.owner_id,
    o.name AS owner_name
FROM cats c
LEFT JOIN owners o ON o.id = c.owner_id";

const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    ("owners", &["id", "name"]),
    ("cats", &["id", "name", "age", "owner_id"]),
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for cat persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A cat referenced an owner id that was never persisted.
    UnknownOwner(OwnerId),
    InvalidData(String),
    /// A previous holder of the connection panicked mid-operation.
    LockPoisoned,
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UnknownOwner(id) => write!(f, "owner not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted cat data: {message}"),
            Self::LockPoisoned => write!(f, "database connection lock poisoned"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind required {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence gateway for cats and, transitively, their owners.
pub trait CatRepository: Send + Sync {
    /// Inserts the cat, or updates it when `cat.id` names an existing row.
    ///
    /// A transient owner is inserted first and linked by its new id.
    /// Returns the stored record with every id populated.
    fn save(&self, cat: &Cat) -> RepoResult<Cat>;
    /// Returns every stored cat in ascending id order.
    fn find_all(&self) -> RepoResult<Vec<Cat>>;
    fn find_by_id(&self, id: CatId) -> RepoResult<Option<Cat>>;
    /// Returns cats linked to `owner_id`; unknown owners yield an empty list.
    fn find_by_owner(&self, owner_id: OwnerId) -> RepoResult<Vec<Cat>>;
}

impl<R: CatRepository + ?Sized> CatRepository for Box<R> {
    fn save(&self, cat: &Cat) -> RepoResult<Cat> {
        (**self).save(cat)
    }

    fn find_all(&self) -> RepoResult<Vec<Cat>> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: CatId) -> RepoResult<Option<Cat>> {
        (**self).find_by_id(id)
    }

    fn find_by_owner(&self, owner_id: OwnerId) -> RepoResult<Vec<Cat>> {
        (**self).find_by_owner(owner_id)
    }
}

/// SQLite-backed cat repository owning its connection.
pub struct SqliteCatRepository {
    conn: Mutex<Connection>,
}

impl SqliteCatRepository {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        ensure_connection_ready(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| RepoError::LockPoisoned)
    }
}

impl CatRepository for SqliteCatRepository {
    fn save(&self, cat: &Cat) -> RepoResult<Cat> {
        let mut conn = self.lock()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let owner = match cat.owner.as_ref() {
            Some(owner) => Some(persist_owner_in_tx(&tx, owner)?),
            None => None,
        };
        let owner_id = owner.as_ref().and_then(|owner| owner.id);

        let id = match cat.id {
            Some(id) if update_cat_in_tx(&tx, id, cat, owner_id)? => id,
            _ => insert_cat_in_tx(&tx, cat, owner_id)?,
        };

        tx.commit()?;

        Ok(Cat {
            id: Some(id),
            name: cat.name.clone(),
            age: cat.age,
            owner,
        })
    }

    fn find_all(&self) -> RepoResult<Vec<Cat>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{CAT_SELECT_SQL} ORDER BY c.id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut cats = Vec::new();
        while let Some(row) = rows.next()? {
            cats.push(parse_cat_row(row)?);
        }
        Ok(cats)
    }

    fn find_by_id(&self, id: CatId) -> RepoResult<Option<Cat>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{CAT_SELECT_SQL} WHERE c.id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_cat_row(row)?));
        }

        Ok(None)
    }

    fn find_by_owner(&self, owner_id: OwnerId) -> RepoResult<Vec<Cat>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "{CAT_SELECT_SQL}
             WHERE c.owner_id = ?1
             ORDER BY c.id ASC;"
        ))?;
        let mut rows = stmt.query([owner_id])?;
        let mut cats = Vec::new();
        while let Some(row) = rows.next()? {
            cats.push(parse_cat_row(row)?);
        }
        Ok(cats)
    }
}

/// Inserts a transient owner, or resolves a persisted one to its stored row.
fn persist_owner_in_tx(tx: &Transaction<'_>, owner: &Owner) -> RepoResult<Owner> {
    match owner.id {
        None => {
            tx.execute(
                "INSERT INTO owners (name) VALUES (?1);",
                [owner.name.as_deref()],
            )?;
            let id = tx.last_insert_rowid();
            debug!("event=owner_cascade module=repo status=ok owner_id={id}");
            Ok(Owner {
                id: Some(id),
                name: owner.name.clone(),
            })
        }
        Some(id) => {
            let name = tx
                .query_row("SELECT name FROM owners WHERE id = ?1;", [id], |row| {
                    row.get::<_, Option<String>>(0)
                })
                .optional()?
                .ok_or(RepoError::UnknownOwner(id))?;
            Ok(Owner { id: Some(id), name })
        }
    }
}

fn insert_cat_in_tx(
    tx: &Transaction<'_>,
    cat: &Cat,
    owner_id: Option<OwnerId>,
) -> RepoResult<CatId> {
    tx.execute(
        "INSERT INTO cats (name, age, owner_id) VALUES (?1, ?2, ?3);",
        params![cat.name.as_deref(), cat.age, owner_id],
    )?;
    Ok(tx.last_insert_rowid())
}

/// Returns `false` when no row with `id` exists, leaving the insert to the caller.
fn update_cat_in_tx(
    tx: &Transaction<'_>,
    id: CatId,
    cat: &Cat,
    owner_id: Option<OwnerId>,
) -> RepoResult<bool> {
    let changed = tx.execute(
        "UPDATE cats
         SET
            name = ?2,
            age = ?3,
            owner_id = ?4
         WHERE id = ?1;",
        params![id, cat.name.as_deref(), cat.age, owner_id],
    )?;
    Ok(changed > 0)
}

fn parse_cat_row(row: &Row<'_>) -> RepoResult<Cat> {
    let id: CatId = row.get("id")?;
    let raw_age: i64 = row.get("age")?;
    let age = i32::try_from(raw_age).map_err(|_| {
        RepoError::InvalidData(format!("age `{raw_age}` out of range in cats.age (id {id})"))
    })?;

    let owner = match row.get::<_, Option<OwnerId>>("owner_id")? {
        Some(owner_id) => Some(Owner {
            id: Some(owner_id),
            name: row.get("owner_name")?,
        }),
        None => None,
    };

    Ok(Cat {
        id: Some(id),
        name: row.get("name")?,
        age,
        owner,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version < expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for &(table, columns) in REQUIRED_COLUMNS {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
        for &column in columns {
            if !table_has_column(conn, table, column)? {
                return Err(RepoError::MissingRequiredColumn { table, column });
            }
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
