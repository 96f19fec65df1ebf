//! Route registration and shared application state.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use cattery_core::{CatRepository, CatService};

use crate::handlers;

/// Cat service shared by every request.
pub type SharedCatService = Arc<CatService<Box<dyn CatRepository>>>;

/// Application shared state.
#[derive(Clone)]
pub struct AppState {
    pub cats: SharedCatService,
}

impl AppState {
    /// Wraps a repository in the service every handler talks to.
    pub fn new(repo: impl CatRepository + 'static) -> Self {
        let repo: Box<dyn CatRepository> = Box::new(repo);
        Self {
            cats: Arc::new(CatService::new(repo)),
        }
    }
}

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/version", get(handlers::version))
        .route("/cats", post(handlers::add_cat).get(handlers::list_cats))
        .route("/cats/addToOwner", post(handlers::add_cat_to_owner))
        .route("/cats/owner/{id}", get(handlers::list_cats_by_owner))
        .route("/cats/{id}", get(handlers::get_cat))
        .with_state(state)
}
