//! Hydration attributes for the `#hole` element
//!
//! A user's solution history is embedded as `data-*` attributes so the hole
//! script can restore editor state without another round trip:
//!
//! - ` data-lang="go"` names the language of the latest passing solution,
//! - ` data-<lang>="<code>"` carries the stored code of every attempted language.

use crate::{db::SolutionStore, error::AppResult, utils::escape_quotes};

/// Fragment naming the language of the most recent passing solution
pub async fn latest_successful_language(
    store: &dyn SolutionStore,
    user_id: i64,
    hole: &str,
) -> AppResult<Option<String>> {
    let lang = store.latest_successful_lang(user_id, hole).await?;

    Ok(lang.map(|lang| format!(r#" data-lang="{lang}""#)))
}

/// Fragment carrying the stored code of every language attempted on `hole`
pub async fn all_language_code(
    store: &dyn SolutionStore,
    user_id: i64,
    hole: &str,
) -> AppResult<Option<String>> {
    let solutions = store.solutions(user_id, hole).await?;
    if solutions.is_empty() {
        return Ok(None);
    }

    let mut fragment = String::new();
    for solution in &solutions {
        fragment.push_str(" data-");
        fragment.push_str(&solution.lang);
        fragment.push_str("=\"");
        fragment.push_str(&escape_quotes(&solution.code));
        fragment.push('"');
    }

    Ok(Some(fragment))
}

/// Both hydration fragments for one (user, hole) pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hydration {
    pub lang: Option<String>,
    pub code: Option<String>,
}

impl Hydration {
    /// Run both reads concurrently; any store failure aborts the pair.
    pub async fn fetch(store: &dyn SolutionStore, user_id: i64, hole: &str) -> AppResult<Self> {
        let (lang, code) = tokio::try_join!(
            latest_successful_language(store, user_id, hole),
            all_language_code(store, user_id, hole),
        )?;

        Ok(Self { lang, code })
    }

    pub fn is_empty(&self) -> bool {
        self.lang.is_none() && self.code.is_none()
    }

    /// Attributes in emission order, lang first
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.lang.iter().chain(self.code.iter()).map(String::as_str)
    }
}
