use serde::Deserialize;

use crate::{BookingError, BookingResult};

/// A validated booking request for a schedule: seat count plus the
/// prospective passenger's display name and email.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub seats: i64,
    pub name: String,
    pub email: String,
}

impl BookingRequest {
    pub fn parse(seats: &str, name: &str, email: &str) -> BookingResult<Self> {
        let seats: i64 = seats.trim().parse().map_err(|_| {
            BookingError::Validation(format!("invalid seat count '{}'", seats))
        })?;
        if seats <= 0 {
            return Err(BookingError::Validation(
                "seat count must be a positive integer".to_string(),
            ));
        }
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(BookingError::Validation(
                "name and email are required".to_string(),
            ));
        }
        Ok(Self {
            seats,
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_request() {
        let req = BookingRequest::parse("2", "Alice", "alice@example.com").expect("should parse");
        assert_eq!(req.seats, 2);
        assert_eq!(req.name, "Alice");
        assert_eq!(req.email, "alice@example.com");
    }

    #[test]
    fn rejects_a_non_numeric_seat_count() {
        let err = BookingRequest::parse("two", "Alice", "alice@example.com").unwrap_err();
        assert!(matches!(err, BookingError::Validation(_)));
    }

    #[test]
    fn rejects_zero_and_negative_seats() {
        assert!(BookingRequest::parse("0", "Alice", "alice@example.com").is_err());
        assert!(BookingRequest::parse("-3", "Alice", "alice@example.com").is_err());
    }

    #[test]
    fn rejects_missing_contact_details() {
        assert!(BookingRequest::parse("1", "", "alice@example.com").is_err());
        assert!(BookingRequest::parse("1", "Alice", "  ").is_err());
    }
}
