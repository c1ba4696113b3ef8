use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: Uuid,
    /// Generated markup, stored and served as-is.
    pub html: String,
    pub created_at: DateTime<Utc>,
}

impl Survey {
    pub fn link(&self) -> String {
        format!("/survey/{}", self.id)
    }

    pub fn responses_link(&self) -> String {
        format!("/survey/{}/responses", self.id)
    }
}
