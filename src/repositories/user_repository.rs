use async_trait::async_trait;

use crate::models::user::User;
use crate::repositories::pg_store::sql_state;
use crate::repositories::{PgStore, UserRepository};
use crate::utils::errors::{db_error, AppError, AppResult};

#[async_trait]
impl UserRepository for PgStore {
    async fn create_user(&self, username: &str, password_hash: &str) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password)
            VALUES ($1, $2)
            RETURNING id, username, password, created_date
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match sql_state(&e).as_deref() {
            Some("23505") => AppError::Conflict(format!("username '{}' is already taken", username)),
            _ => db_error("creating user")(e),
        })?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, created_date FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding user"))?;

        Ok(user)
    }
}
