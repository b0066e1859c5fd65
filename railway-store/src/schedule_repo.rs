use railway_core::models::{BookingStatus, ScheduleDetail};
use railway_core::search::{SearchQuery, TripOption};
use sqlx::{Executor, Sqlite, SqlitePool};

pub struct ScheduleRepository;

impl ScheduleRepository {
    pub async fn find_detail<'e, E>(
        exec: E,
        schedule_id: i64,
    ) -> Result<Option<ScheduleDetail>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, ScheduleDetail>(
            r#"
            SELECT s.id, s.train_id, t.name AS train_name, t.source, t.destination,
                   s.departure, s.arrival, s.price, t.total_seats
            FROM schedules s
            JOIN trains t ON s.train_id = t.id
            WHERE s.id = ?
            "#,
        )
        .bind(schedule_id)
        .fetch_optional(exec)
        .await
    }

    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<ScheduleDetail>, sqlx::Error> {
        sqlx::query_as::<_, ScheduleDetail>(
            r#"
            SELECT s.id, s.train_id, t.name AS train_name, t.source, t.destination,
                   s.departure, s.arrival, s.price, t.total_seats
            FROM schedules s
            JOIN trains t ON s.train_id = t.id
            ORDER BY s.id
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Exact, case-sensitive station match; the departure is matched on its
    /// calendar date, ignoring time of day. Results come back in storage
    /// order with their availability computed in the same query.
    pub async fn search_trips(
        pool: &SqlitePool,
        query: &SearchQuery,
    ) -> Result<Vec<TripOption>, sqlx::Error> {
        sqlx::query_as::<_, TripOption>(
            r#"
            SELECT s.id AS schedule_id, t.name AS train_name, s.departure, s.arrival, s.price,
                   t.total_seats - COALESCE((
                       SELECT SUM(b.seats) FROM bookings b
                       WHERE b.schedule_id = s.id AND b.status = ?
                   ), 0) AS available_seats
            FROM schedules s
            JOIN trains t ON s.train_id = t.id
            WHERE t.source = ? AND t.destination = ? AND DATE(s.departure) = ?
            "#,
        )
        .bind(BookingStatus::Confirmed.as_str())
        .bind(&query.source)
        .bind(&query.destination)
        .bind(query.date)
        .fetch_all(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DbClient;

    async fn seed(pool: &SqlitePool) {
        sqlx::query(
            "INSERT INTO trains (name, source, destination, total_seats) \
             VALUES ('Express1', 'CityA', 'CityB', 100)",
        )
        .execute(pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO schedules (train_id, departure, arrival, price) \
             VALUES (1, '2024-01-01 08:00:00', '2024-01-01 12:00:00', 49.5)",
        )
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn search_matches_stations_and_date() {
        let db = DbClient::connect_in_memory().await.unwrap();
        seed(&db.pool).await;

        let query = SearchQuery::parse("CityA", "CityB", "2024-01-01").unwrap();
        let trips = ScheduleRepository::search_trips(&db.pool, &query)
            .await
            .unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].schedule_id, 1);
        assert_eq!(trips[0].train_name, "Express1");
        assert_eq!(trips[0].available_seats, 100);
    }

    #[tokio::test]
    async fn search_is_exact_and_case_sensitive() {
        let db = DbClient::connect_in_memory().await.unwrap();
        seed(&db.pool).await;

        for (source, destination, date) in [
            ("citya", "CityB", "2024-01-01"),
            ("CityA", "CityC", "2024-01-01"),
            ("CityB", "CityA", "2024-01-01"),
            ("CityA", "CityB", "2024-01-02"),
        ] {
            let query = SearchQuery::parse(source, destination, date).unwrap();
            let trips = ScheduleRepository::search_trips(&db.pool, &query)
                .await
                .unwrap();
            assert!(trips.is_empty(), "unexpected match for {source}->{destination} on {date}");
        }
    }

    #[tokio::test]
    async fn find_detail_joins_the_parent_train() {
        let db = DbClient::connect_in_memory().await.unwrap();
        seed(&db.pool).await;

        let detail = ScheduleRepository::find_detail(&db.pool, 1)
            .await
            .unwrap()
            .expect("schedule 1 should exist");
        assert_eq!(detail.train_name, "Express1");
        assert_eq!(detail.total_seats, 100);
        assert_eq!(detail.source, "CityA");

        assert!(ScheduleRepository::find_detail(&db.pool, 999)
            .await
            .unwrap()
            .is_none());
    }
}
