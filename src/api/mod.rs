//! HTTP API handlers for tunebook

pub mod graphql;
pub mod health;

pub use graphql::{graphiql, graphql_handler};
pub use health::health_routes;
