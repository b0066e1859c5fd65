//! Askama templates and their view models.

use askama::Template;

use railway_core::models::{ScheduleDetail, Train};
use railway_core::search::TripOption;

/// Landing page with the search form and an optional flash message.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub flash: Option<String>,
}

/// Search results list.
#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub source: String,
    pub destination: String,
    pub date: String,
    pub trips: Vec<TripView>,
}

/// Booking form for one schedule.
#[derive(Template)]
#[template(path = "booking.html")]
pub struct BookingTemplate {
    pub schedule: ScheduleView,
}

/// Booking confirmation with the reservation code.
#[derive(Template)]
#[template(path = "confirmation.html")]
pub struct ConfirmationTemplate {
    pub pnr: String,
    pub seats: i64,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate;

#[derive(Template)]
#[template(path = "admin/trains.html")]
pub struct AdminTrainsTemplate {
    pub trains: Vec<Train>,
}

#[derive(Template)]
#[template(path = "admin/schedules.html")]
pub struct AdminSchedulesTemplate {
    pub schedules: Vec<ScheduleRowView>,
}

// ============================================================================
// View models (times and prices preformatted in Rust, not in the template)
// ============================================================================

#[derive(Debug, Clone)]
pub struct TripView {
    pub schedule_id: i64,
    pub train_name: String,
    pub departure: String,
    pub arrival: String,
    pub price: String,
    pub available_seats: i64,
}

impl From<TripOption> for TripView {
    fn from(trip: TripOption) -> Self {
        Self {
            schedule_id: trip.schedule_id,
            train_name: trip.train_name,
            departure: trip.departure.format("%H:%M").to_string(),
            arrival: trip.arrival.format("%H:%M").to_string(),
            price: format!("{:.2}", trip.price),
            available_seats: trip.available_seats,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleView {
    pub id: i64,
    pub train_name: String,
    pub source: String,
    pub destination: String,
    pub departure: String,
    pub price: String,
    pub available_seats: i64,
}

impl ScheduleView {
    pub fn new(detail: ScheduleDetail, available_seats: i64) -> Self {
        Self {
            id: detail.id,
            train_name: detail.train_name,
            source: detail.source,
            destination: detail.destination,
            departure: detail.departure.format("%Y-%m-%d %H:%M").to_string(),
            price: format!("{:.2}", detail.price),
            available_seats,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleRowView {
    pub id: i64,
    pub train_name: String,
    pub departure: String,
    pub arrival: String,
    pub price: String,
}

impl From<ScheduleDetail> for ScheduleRowView {
    fn from(detail: ScheduleDetail) -> Self {
        Self {
            id: detail.id,
            train_name: detail.train_name,
            departure: detail.departure.format("%Y-%m-%d %H:%M").to_string(),
            arrival: detail.arrival.format("%Y-%m-%d %H:%M").to_string(),
            price: format!("{:.2}", detail.price),
        }
    }
}

/// Render a template, degrading to an inline error string rather than
/// panicking inside a handler.
pub fn render<T: Template>(template: T) -> String {
    template
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e))
}
