//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the cat persistence gateway contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Absence is reported as `None` or an empty list, never as an error.
//! - Owner cascade and cat write happen in one transaction.

pub mod cat_repo;
