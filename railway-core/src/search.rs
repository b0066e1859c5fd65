use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{BookingError, BookingResult};

/// A validated trip search: exact source/destination station names and the
/// calendar date of departure (time of day is ignored for matching).
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub source: String,
    pub destination: String,
    pub date: NaiveDate,
}

impl SearchQuery {
    pub fn parse(source: &str, destination: &str, date: &str) -> BookingResult<Self> {
        let source = source.trim();
        let destination = destination.trim();
        if source.is_empty() || destination.is_empty() {
            return Err(BookingError::Validation(
                "source and destination are required".to_string(),
            ));
        }
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
            BookingError::Validation(format!("invalid date '{}', expected YYYY-MM-DD", date))
        })?;
        Ok(Self {
            source: source.to_string(),
            destination: destination.to_string(),
            date,
        })
    }
}

/// One search result: a schedule plus its computed seat availability.
/// `available_seats` is signed and deliberately not clamped at zero, so an
/// oversold schedule reports a negative count instead of hiding it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TripOption {
    pub schedule_id: i64,
    pub train_name: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub price: f64,
    pub available_seats: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_a_well_formed_query() {
        let query = SearchQuery::parse("CityA", "CityB", "2024-01-01").expect("should parse");
        assert_eq!(query.source, "CityA");
        assert_eq!(query.destination, "CityB");
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let query = SearchQuery::parse(" CityA ", "CityB", " 2024-01-01 ").expect("should parse");
        assert_eq!(query.source, "CityA");
    }

    #[test]
    fn rejects_a_malformed_date() {
        let err = SearchQuery::parse("CityA", "CityB", "01/01/2024").unwrap_err();
        assert!(matches!(err, BookingError::Validation(_)));
    }

    #[test]
    fn rejects_empty_stations() {
        let err = SearchQuery::parse("", "CityB", "2024-01-01").unwrap_err();
        assert!(matches!(err, BookingError::Validation(_)));
    }
}
