//! 路由模块

use axum::{
    routing::{get, post},
    Router,
};
use crate::handlers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::new_query_page))
        .route("/newQuery.html", get(handlers::new_query_page))
        .route("/oldQueries.html", get(handlers::old_queries_page))
        .route("/query", post(handlers::submit_query))
        .route("/oldQueries", get(handlers::old_queries))
        .route("/api/health", get(handlers::health_check))
}
