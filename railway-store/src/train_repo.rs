use railway_core::models::Train;
use sqlx::SqlitePool;

pub struct TrainRepository;

impl TrainRepository {
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Train>, sqlx::Error> {
        sqlx::query_as::<_, Train>(
            "SELECT id, name, source, destination, total_seats FROM trains ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }
}
