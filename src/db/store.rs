//! Read side of the solutions store
//!
//! Both reads distinguish "no rows" (`None` / empty) from a failing store
//! (`Err`). They are independent and may observe different snapshots.

use async_trait::async_trait;

use crate::{error::AppResult, models::Solution};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SolutionStore: Send + Sync {
    /// Language of the most recently submitted passing solution
    async fn latest_successful_lang(&self, user_id: i64, hole: &str) -> AppResult<Option<String>>;

    /// Every solution the user has for `hole`, ordered by language
    async fn solutions(&self, user_id: i64, hole: &str) -> AppResult<Vec<Solution>>;
}
