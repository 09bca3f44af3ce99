//! Hole handler implementations

use axum::{extract::State, http::Uri, response::Html};

use crate::{error::AppResult, middleware::Identity, services::PageService, state::AppState};

/// Render the interactive page for one hole
///
/// The hole id is the raw request path minus its leading slash. Unknown
/// holes, including `/` and multi-segment paths, still render with a blank
/// name and preamble.
pub async fn get_hole(
    State(state): State<AppState>,
    identity: Identity,
    uri: Uri,
) -> AppResult<Html<String>> {
    let hole = hole_id(&uri);
    let page = PageService::render_hole(&state, &identity, hole).await?;
    Ok(Html(page))
}

fn hole_id(uri: &Uri) -> &str {
    uri.path().strip_prefix('/').unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hole_id_strips_leading_slash() {
        assert_eq!(hole_id(&Uri::from_static("/fizzbuzz")), "fizzbuzz");
        assert_eq!(hole_id(&Uri::from_static("/fizzbuzz?x=1")), "fizzbuzz");
        assert_eq!(hole_id(&Uri::from_static("/")), "");
        assert_eq!(hole_id(&Uri::from_static("/a/b")), "a/b");
    }
}
