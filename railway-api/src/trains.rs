use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use railway_store::TrainRepository;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TrainDto {
    pub id: i64,
    pub name: String,
    pub source: String,
    pub destination: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/trains", get(list_trains))
}

async fn list_trains(State(state): State<AppState>) -> Result<Json<Vec<TrainDto>>, AppError> {
    let trains = TrainRepository::list_all(&state.db.pool).await?;
    Ok(Json(
        trains
            .into_iter()
            .map(|t| TrainDto {
                id: t.id,
                name: t.name,
                source: t.source,
                destination: t.destination,
            })
            .collect(),
    ))
}
