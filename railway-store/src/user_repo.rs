use railway_core::models::User;
use sqlx::{Executor, Sqlite};

pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_email<'e, E>(exec: E, email: &str) -> Result<Option<User>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(exec)
        .await
    }

    /// Lazily created users have no password hash; no authentication flow
    /// ever reads one.
    pub async fn create<'e, E>(exec: E, username: &str, email: &str) -> Result<User, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("INSERT INTO users (username, email) VALUES (?, ?)")
            .bind(username)
            .bind(email)
            .execute(exec)
            .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: None,
        })
    }
}
