use axum::{
    extract::{Form, Path, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use railway_core::booking::BookingRequest;
use railway_store::{BookingRepository, ScheduleRepository};

use crate::error::AppError;
use crate::state::AppState;
use crate::templates::{render, BookingTemplate, ConfirmationTemplate, ScheduleView};

#[derive(Debug, Deserialize)]
pub struct BookingForm {
    pub seats: String,
    pub name: String,
    pub email: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/book/{schedule_id}", get(booking_form).post(create_booking))
}

async fn booking_form(
    State(state): State<AppState>,
    Path(schedule_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let detail = ScheduleRepository::find_detail(&state.db.pool, schedule_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("schedule {}", schedule_id)))?;
    let available = BookingRepository::available_seats(&state.db.pool, schedule_id)
        .await?
        .unwrap_or(0);

    Ok(Html(render(BookingTemplate {
        schedule: ScheduleView::new(detail, available),
    })))
}

async fn create_booking(
    State(state): State<AppState>,
    Path(schedule_id): Path<i64>,
    Form(form): Form<BookingForm>,
) -> Result<Html<String>, AppError> {
    let req = BookingRequest::parse(&form.seats, &form.name, &form.email)
        .map_err(AppError::from_domain)?;

    let booking = BookingRepository::commit_booking(&state.db.pool, schedule_id, &req)
        .await
        .map_err(AppError::from_domain)?;

    Ok(Html(render(ConfirmationTemplate {
        pnr: booking.pnr,
        seats: booking.seats,
    })))
}
