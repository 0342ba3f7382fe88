//! GraphQL endpoint
//!
//! One route carries the whole API: POST executes operations against the
//! schema, GET serves the GraphiQL explorer pointed back at the same
//! path.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::AppState;

/// POST /graphql
///
/// Execute a GraphQL request. Field errors surface in the response's
/// `errors` array; the HTTP status stays 200.
pub async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GET /graphql
///
/// Serve the GraphiQL explorer for interactive use.
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
