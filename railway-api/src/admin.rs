//! Read-only administrative listings. No mutation endpoints exist; trains
//! and schedules are seeded by an external loading process.

use axum::{extract::State, response::Html, routing::get, Router};

use railway_store::{ScheduleRepository, TrainRepository};

use crate::error::AppError;
use crate::state::AppState;
use crate::templates::{
    render, AdminDashboardTemplate, AdminSchedulesTemplate, AdminTrainsTemplate, ScheduleRowView,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/dashboard", get(dashboard))
        .route("/admin/trains", get(list_trains))
        .route("/admin/schedules", get(list_schedules))
}

async fn dashboard() -> Html<String> {
    Html(render(AdminDashboardTemplate))
}

async fn list_trains(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let trains = TrainRepository::list_all(&state.db.pool).await?;
    Ok(Html(render(AdminTrainsTemplate { trains })))
}

async fn list_schedules(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let schedules = ScheduleRepository::list_all(&state.db.pool).await?;
    Ok(Html(render(AdminSchedulesTemplate {
        schedules: schedules.into_iter().map(ScheduleRowView::from).collect(),
    })))
}
