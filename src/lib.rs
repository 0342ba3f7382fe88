//! tunebook library - GraphQL API over a small music catalog
//!
//! Books and authors live in in-memory collections; songs persist in a
//! SQLite table. Both are exposed through a single GraphQL endpoint.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod library;
pub mod schema;

pub use config::Config;
pub use error::{Error, Result};
pub use library::Library;
pub use schema::{build_schema, TunebookSchema};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Executable GraphQL schema with its context data attached
    pub schema: TunebookSchema,
}

impl AppState {
    /// Create new application state
    ///
    /// The pool and library move into the schema as context data; the
    /// resolvers are their only consumers.
    pub fn new(db: SqlitePool, library: Library) -> Self {
        Self {
            schema: build_schema(db, library),
        }
    }
}

/// Build application router
///
/// GET /graphql serves the GraphiQL explorer, POST /graphql executes
/// operations, and /health answers monitoring probes.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/graphql", get(api::graphiql).post(api::graphql_handler))
        .merge(api::health_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
}
