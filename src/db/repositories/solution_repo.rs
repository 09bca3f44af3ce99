//! Solution repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{db::store::SolutionStore, error::AppResult, models::Solution};

/// PostgreSQL-backed solution store
#[derive(Clone)]
pub struct SolutionRepository {
    pool: PgPool,
}

impl SolutionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SolutionStore for SolutionRepository {
    async fn latest_successful_lang(&self, user_id: i64, hole: &str) -> AppResult<Option<String>> {
        let lang = sqlx::query_scalar::<_, String>(
            r#"
            SELECT lang
              FROM solutions
             WHERE user_id = $1 AND hole = $2 AND success
          ORDER BY submitted DESC, lang
             LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(hole)
        .fetch_optional(&self.pool)
        .await?;

        Ok(lang)
    }

    async fn solutions(&self, user_id: i64, hole: &str) -> AppResult<Vec<Solution>> {
        let solutions = sqlx::query_as::<_, Solution>(
            r#"
            SELECT user_id, hole, lang, code, success, submitted
              FROM solutions
             WHERE user_id = $1 AND hole = $2
          ORDER BY lang
            "#,
        )
        .bind(user_id)
        .bind(hole)
        .fetch_all(&self.pool)
        .await?;

        Ok(solutions)
    }
}
