//! Cat domain model.
//!
//! # Invariants
//! - `id` is `None` only before the first save.
//! - `owner`, when set on a persisted cat, refers to a persisted owner.

use crate::model::owner::{Owner, OwnerId};
use serde::{Deserialize, Deserializer, Serialize};

/// Storage-generated cat identifier.
pub type CatId = i64;

/// A cat, optionally linked to one owner.
///
/// Every field is optional in payloads: a missing or `null` `age` becomes `0`
/// and a missing `name` or `owner` stays `null`. Nothing is validated, so negative
/// ages are stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    #[serde(default)]
    pub id: Option<CatId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub age: i32,
    /// Serialized as `null` when absent, never skipped.
    #[serde(default)]
    pub owner: Option<Owner>,
}

impl Cat {
    /// Creates a transient cat without an owner.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            age,
            owner: None,
        }
    }

    /// Builder-style owner assignment, replacing any previous owner.
    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Returns the owner id when an owner is set and persisted.
    pub fn owner_id(&self) -> Option<OwnerId> {
        self.owner.as_ref().and_then(|owner| owner.id)
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or_default())
}
