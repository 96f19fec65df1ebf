//! Cat use-case service.
//!
//! # Responsibility
//! - Provide the create/list/lookup entry points served over HTTP.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Create entry points never update an existing cat: incoming ids are dropped.
//! - `add_cat_to_default_owner` inserts a fresh owner row on every call.

use crate::model::cat::{Cat, CatId};
use crate::model::owner::{Owner, OwnerId};
use crate::repo::cat_repo::{CatRepository, RepoResult};

/// Name given to the owner created by `add_cat_to_default_owner`.
pub const DEFAULT_OWNER_NAME: &str = "sebi";

/// Use-case service wrapper for cat operations.
pub struct CatService<R: CatRepository> {
    repo: R,
}

impl<R: CatRepository> CatService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new cat, cascading a transient owner when one is attached.
    pub fn add_cat(&self, mut cat: Cat) -> RepoResult<Cat> {
        cat.id = None;
        self.repo.save(&cat)
    }

    pub fn list_cats(&self) -> RepoResult<Vec<Cat>> {
        self.repo.find_all()
    }

    /// Returns `Ok(None)` for ids that were never issued.
    pub fn get_cat(&self, id: CatId) -> RepoResult<Option<Cat>> {
        self.repo.find_by_id(id)
    }

    /// Persists a new cat owned by a brand-new owner named [`DEFAULT_OWNER_NAME`].
    ///
    /// # Contract
    /// - Any owner in the payload is replaced.
    /// - Existing owners with the same name are never reused, so two calls
    ///   yield two distinct owner ids.
    pub fn add_cat_to_default_owner(&self, cat: Cat) -> RepoResult<Cat> {
        self.add_cat(cat.with_owner(Owner::new(DEFAULT_OWNER_NAME)))
    }

    pub fn list_cats_by_owner(&self, owner_id: OwnerId) -> RepoResult<Vec<Cat>> {
        self.repo.find_by_owner(owner_id)
    }
}
