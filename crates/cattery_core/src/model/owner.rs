//! Owner domain model.

use serde::{Deserialize, Serialize};

/// Storage-generated owner identifier.
pub type OwnerId = i64;

/// Person owning zero or more cats.
///
/// Owners are only ever created by cascading a cat save; they are never
/// updated or removed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// `None` until the owner has been persisted.
    #[serde(default)]
    pub id: Option<OwnerId>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Owner {
    /// Creates a transient owner that will be inserted on the next cat save.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    /// Creates a reference to an already persisted owner.
    pub fn with_id(id: OwnerId) -> Self {
        Self { id: Some(id), name: None }
    }

    /// Returns whether this owner still needs an id from storage.
    pub fn is_transient(&self) -> bool {
        self.id.is_none()
    }
}
