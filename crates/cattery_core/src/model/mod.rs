//! Cat and owner domain model.
//!
//! # Responsibility
//! - Define the records exchanged between persistence and HTTP layers.
//! - Keep one serialized shape for requests, responses and storage.
//!
//! # Invariants
//! - A record without an id is transient; storage assigns ids on save.
//! - Ids never change once assigned.

pub mod cat;
pub mod owner;
