use axum::{
    extract::Query,
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use crate::templates::{render, IndexTemplate};

#[derive(Debug, Deserialize)]
pub struct IndexParams {
    pub flash: Option<String>,
}

/// Landing page with the search form.
pub async fn index(Query(params): Query<IndexParams>) -> impl IntoResponse {
    Html(render(IndexTemplate {
        flash: params.flash,
    }))
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
