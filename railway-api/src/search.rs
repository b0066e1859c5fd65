use axum::{
    extract::{Form, State},
    response::Html,
    routing::post,
    Router,
};
use serde::Deserialize;

use railway_core::search::SearchQuery;
use railway_store::ScheduleRepository;

use crate::error::AppError;
use crate::state::AppState;
use crate::templates::{render, SearchTemplate, TripView};

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub source: String,
    pub destination: String,
    pub date: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/search", post(search_trips))
}

async fn search_trips(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    let query = SearchQuery::parse(&form.source, &form.destination, &form.date)
        .map_err(AppError::from_domain)?;

    let trips = ScheduleRepository::search_trips(&state.db.pool, &query).await?;
    tracing::debug!(
        source = %query.source,
        destination = %query.destination,
        matches = trips.len(),
        "trip search"
    );

    Ok(Html(render(SearchTemplate {
        source: query.source,
        destination: query.destination,
        date: query.date.format("%Y-%m-%d").to_string(),
        trips: trips.into_iter().map(TripView::from).collect(),
    })))
}
