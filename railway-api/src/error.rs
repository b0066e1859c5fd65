use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use railway_core::BookingError;

/// Flash shown on the landing page after an insufficient-seats redirect.
const SEATS_FLASH: &str = "/?flash=Not%20enough%20seats%20available";

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    SeatsUnavailable,
    Anyhow(anyhow::Error),
}

impl AppError {
    pub fn from_domain(err: BookingError) -> Self {
        match err {
            BookingError::Validation(msg) => AppError::BadRequest(msg),
            BookingError::NotFound(msg) => AppError::NotFound(msg),
            BookingError::InsufficientSeats { .. } => AppError::SeatsUnavailable,
            BookingError::Storage(msg) => AppError::Anyhow(anyhow::anyhow!(msg)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Html(format!("<h1>Bad request</h1><p>{}</p>", msg)),
            )
                .into_response(),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Html(format!("<h1>Not found</h1><p>{}</p>", msg)),
            )
                .into_response(),
            AppError::SeatsUnavailable => Redirect::to(SEATS_FLASH).into_response(),
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html("<h1>Internal Server Error</h1>".to_string()),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
