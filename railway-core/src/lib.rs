pub mod booking;
pub mod models;
pub mod pnr;
pub mod search;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Not enough seats available: requested {requested}, available {available}")]
    InsufficientSeats { requested: i64, available: i64 },
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type BookingResult<T> = Result<T, BookingError>;
