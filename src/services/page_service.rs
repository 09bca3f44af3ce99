//! Hole page service

use tracing::debug;

use crate::{
    error::AppResult,
    middleware::Identity,
    page::{Hydration, PageWriter},
    state::AppState,
};

/// Page service for composing hole pages
pub struct PageService;

impl PageService {
    /// Render the full document for `hole_id` as seen by `identity`.
    ///
    /// The store is only read for authenticated callers. The document is
    /// built in memory, so a store failure leaves nothing half-written.
    pub async fn render_hole(
        state: &AppState,
        identity: &Identity,
        hole_id: &str,
    ) -> AppResult<String> {
        let hole = state.catalog().hole(hole_id);
        let assets = state.assets();

        let page = PageWriter::new()
            .site_header(assets, identity, &hole.name)
            .head(assets);

        let page = match identity.user() {
            None => page.anonymous(),
            Some(user) => {
                let hydration = Hydration::fetch(state.store(), user.id, hole_id).await?;
                debug!(
                    user_id = user.id,
                    hole = %hole_id,
                    hydrated = !hydration.is_empty(),
                    "Fetched solution state"
                );
                page.hydrated(&hydration)
            }
        };

        Ok(page.body(hole).roster(state.catalog().langs()).finish())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{
        catalog::Catalog,
        config::{AssetsConfig, SessionConfig},
        db::store::MockSolutionStore,
        error::AppError,
        middleware::{AuthenticatedUser, SessionResolver},
        models::{Hole, Lang, Solution},
    };

    fn catalog() -> Catalog {
        Catalog::new(
            vec![Hole {
                id: "fizzbuzz".to_string(),
                name: "FizzBuzz".to_string(),
                preamble: "Print the numbers from 1 to 100.".to_string(),
            }],
            vec![
                Lang {
                    id: "c".to_string(),
                    name: "C".to_string(),
                },
                Lang {
                    id: "go".to_string(),
                    name: "Go".to_string(),
                },
                Lang {
                    id: "python".to_string(),
                    name: "Python".to_string(),
                },
            ],
        )
        .unwrap()
    }

    fn state(store: MockSolutionStore) -> AppState {
        let sessions = SessionResolver::new(&SessionConfig {
            secret: "secret".to_string(),
            cookie_name: "__Host-session".to_string(),
        });
        AppState::new(Arc::new(store), catalog(), sessions, AssetsConfig::default())
    }

    fn user(id: i64) -> Identity {
        Identity(Some(AuthenticatedUser {
            id,
            login: "alice".to_string(),
        }))
    }

    fn solution(lang: &str, code: &str, success: bool, minute: u32) -> Solution {
        Solution {
            user_id: 1,
            hole: "fizzbuzz".to_string(),
            lang: lang.to_string(),
            code: code.to_string(),
            success,
            submitted: Utc.with_ymd_and_hms(2024, 5, 1, 10, minute, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_anonymous_never_queries_store() {
        let mut store = MockSolutionStore::new();
        store.expect_latest_successful_lang().never();
        store.expect_solutions().never();

        let page = PageService::render_hole(&state(store), &Identity::anonymous(), "fizzbuzz")
            .await
            .unwrap();

        assert!(page.contains("client_id=7f6709819023e9215205&scope=user:email"));
        assert!(!page.contains("data-"));
        assert!(page.contains("<h1>FizzBuzz</h1>"));
    }

    #[tokio::test]
    async fn test_failed_and_successful_languages() {
        let mut store = MockSolutionStore::new();
        store
            .expect_latest_successful_lang()
            .withf(|user_id, hole| *user_id == 1 && hole.to_string() == "fizzbuzz")
            .returning(|_, _| Ok(Some("go".to_string())));
        store.expect_solutions().returning(|_, _| {
            Ok(vec![
                solution("c", "puts(\"x\")", false, 1),
                solution("go", "fmt.Print(1)", true, 2),
            ])
        });

        let page = PageService::render_hole(&state(store), &user(1), "fizzbuzz")
            .await
            .unwrap();

        assert!(page.contains(
            r#"<main id=hole data-lang="go" data-c="puts(&#34;x&#34;)" data-go="fmt.Print(1)">"#
        ));
        assert!(!page.contains("id=alert"));
    }

    #[tokio::test]
    async fn test_end_to_end_fizzbuzz() {
        let mut store = MockSolutionStore::new();
        store
            .expect_latest_successful_lang()
            .returning(|_, _| Ok(Some("go".to_string())));
        store
            .expect_solutions()
            .returning(|_, _| Ok(vec![solution("go", r#"x := "a"b""#, true, 0)]));

        let page = PageService::render_hole(&state(store), &user(1), "fizzbuzz")
            .await
            .unwrap();

        let lang = page.find(r#"data-lang="go""#).unwrap();
        let code = page.find(r#"data-go="x := &#34;a&#34;b&#34;""#).unwrap();
        let title = page.find("<h1>FizzBuzz</h1>").unwrap();
        assert!(lang < title && code < title);
    }

    #[tokio::test]
    async fn test_no_solutions_renders_bare_hole() {
        let mut store = MockSolutionStore::new();
        store
            .expect_latest_successful_lang()
            .returning(|_, _| Ok(None));
        store.expect_solutions().returning(|_, _| Ok(Vec::new()));

        let page = PageService::render_hole(&state(store), &user(1), "fizzbuzz")
            .await
            .unwrap();

        assert!(page.contains("<main id=hole><h1>FizzBuzz</h1>"));
        assert!(!page.contains("data-"));
    }

    #[tokio::test]
    async fn test_unknown_hole_renders_blank() {
        let mut store = MockSolutionStore::new();
        store
            .expect_latest_successful_lang()
            .returning(|_, _| Ok(None));
        store.expect_solutions().returning(|_, _| Ok(Vec::new()));

        let page = PageService::render_hole(&state(store), &user(1), "no-such-hole")
            .await
            .unwrap();

        assert!(page.contains("<h1></h1><p></p>"));
        assert_eq!(page.matches("not tried").count(), 3);
    }

    #[tokio::test]
    async fn test_store_failure_aborts() {
        let mut store = MockSolutionStore::new();
        store
            .expect_latest_successful_lang()
            .returning(|_, _| Err(AppError::Database("timeout".to_string())));
        store.expect_solutions().returning(|_, _| Ok(Vec::new()));

        let result = PageService::render_hole(&state(store), &user(1), "fizzbuzz").await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_rendering_is_idempotent() {
        let mut store = MockSolutionStore::new();
        store
            .expect_latest_successful_lang()
            .times(2)
            .returning(|_, _| Ok(Some("python".to_string())));
        store
            .expect_solutions()
            .times(2)
            .returning(|_, _| Ok(vec![solution("python", "print(\"hi\")", true, 5)]));

        let state = state(store);
        let first = PageService::render_hole(&state, &user(1), "fizzbuzz").await.unwrap();
        let second = PageService::render_hole(&state, &user(1), "fizzbuzz").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_roster_independent_of_auth() {
        let roster = |page: &str| {
            let start = page.find("<div id=tabs>").unwrap();
            page[start..].to_string()
        };

        let mut store = MockSolutionStore::new();
        store
            .expect_latest_successful_lang()
            .returning(|_, _| Ok(Some("c".to_string())));
        store
            .expect_solutions()
            .returning(|_, _| Ok(vec![solution("c", "main;", true, 3)]));
        let state = state(store);

        let anonymous = PageService::render_hole(&state, &Identity::anonymous(), "fizzbuzz")
            .await
            .unwrap();
        let signed_in = PageService::render_hole(&state, &user(1), "fizzbuzz").await.unwrap();

        assert_eq!(roster(&anonymous), roster(&signed_in));
        assert_eq!(
            roster(&anonymous),
            "<div id=tabs><a href=#c title=\"C\">not tried</a>\
             <a href=#go title=\"Go\">not tried</a>\
             <a href=#python title=\"Python\">not tried</a></div></main>"
        );
    }
}
