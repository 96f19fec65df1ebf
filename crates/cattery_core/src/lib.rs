//! Core domain logic for the cattery service.
//! Owns the cat/owner model, SQLite persistence and use-case services.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging};
pub use model::cat::{Cat, CatId};
pub use model::owner::{Owner, OwnerId};
pub use repo::cat_repo::{CatRepository, RepoError, RepoResult, SqliteCatRepository};
pub use service::cat_service::{CatService, DEFAULT_OWNER_NAME};

/// Minimal health-check probe.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
