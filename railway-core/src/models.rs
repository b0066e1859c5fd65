use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Train {
    pub id: i64,
    pub name: String,
    pub source: String,
    pub destination: String,
    pub total_seats: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Schedule {
    pub id: i64,
    pub train_id: i64,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub price: f64,
}

/// A schedule joined with its parent train, as the booking and admin
/// surfaces need it.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ScheduleDetail {
    pub id: i64,
    pub train_id: i64,
    pub train_name: String,
    pub source: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub price: f64,
    pub total_seats: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    pub id: i64,
    pub schedule_id: i64,
    pub user_id: i64,
    pub seats: i64,
    pub booking_time: NaiveDateTime,
    pub status: String,
    pub pnr: String,
}

/// Booking status values. Only `Confirmed` is ever written; the column is
/// free text so further states can be introduced without a schema change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
        }
    }
}
