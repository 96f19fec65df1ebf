//! HTTP surface of the cattery service.
//!
//! Exposes `cattery_core` cat operations as a small JSON API:
//!
//! | Method | Path                | Operation                    |
//! |--------|---------------------|------------------------------|
//! | POST   | `/cats`             | add a cat (cascades owner)   |
//! | GET    | `/cats`             | list all cats                |
//! | GET    | `/cats/{id}`        | one cat or `null`            |
//! | POST   | `/cats/addToOwner`  | add a cat with a new owner   |
//! | GET    | `/cats/owner/{id}`  | cats of one owner            |

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::{build_router, AppState};
