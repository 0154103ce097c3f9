use sqlx::{Executor, Postgres};

/// Whether a user row exists for `user_id`. Tokens are issued elsewhere, so a
/// well-formed token may still name a user this database does not know.
pub async fn exists<'e, E>(executor: E, user_id: i64) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)
        "#,
    )
    .bind(user_id)
    .fetch_one(executor)
    .await
}
