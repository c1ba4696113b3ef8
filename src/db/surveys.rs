use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Survey;

pub async fn create(pool: &PgPool, id: Uuid, html: &str) -> Result<Survey, sqlx::Error> {
    sqlx::query_as::<_, Survey>("INSERT INTO surveys (id, html) VALUES ($1, $2) RETURNING *")
        .bind(id)
        .bind(html)
        .fetch_one(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Survey>, sqlx::Error> {
    sqlx::query_as::<_, Survey>("SELECT * FROM surveys WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<Survey>, sqlx::Error> {
    sqlx::query_as::<_, Survey>("SELECT * FROM surveys ORDER BY created_at ASC, id ASC")
        .fetch_all(pool)
        .await
}
