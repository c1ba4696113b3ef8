use sqlx::PgPool;
use uuid::Uuid;

use crate::models::SurveyResponse;

pub async fn create(
    pool: &PgPool,
    id: Uuid,
    survey_id: Uuid,
    data: &serde_json::Value,
) -> Result<SurveyResponse, sqlx::Error> {
    sqlx::query_as::<_, SurveyResponse>(
        "INSERT INTO responses (id, survey_id, data) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(id)
    .bind(survey_id)
    .bind(data)
    .fetch_one(pool)
    .await
}

pub async fn count_by_survey(pool: &PgPool, survey_id: Uuid) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM responses WHERE survey_id = $1")
        .bind(survey_id)
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn list_by_survey(
    pool: &PgPool,
    survey_id: Uuid,
) -> Result<Vec<SurveyResponse>, sqlx::Error> {
    sqlx::query_as::<_, SurveyResponse>(
        "SELECT * FROM responses WHERE survey_id = $1 ORDER BY created_at ASC, id ASC",
    )
    .bind(survey_id)
    .fetch_all(pool)
    .await
}
