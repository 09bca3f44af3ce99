//! Solution model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Solution database model, one row per (user, hole, lang)
#[derive(Debug, Clone, FromRow)]
pub struct Solution {
    pub user_id: i64,
    pub hole: String,
    pub lang: String,
    pub code: String,
    pub success: bool,
    pub submitted: DateTime<Utc>,
}
