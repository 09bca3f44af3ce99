//! Identity resolution middleware
//!
//! Resolves the caller from a signed session token. Resolution never
//! rejects a request: anything short of a valid token is anonymous.

use std::convert::Infallible;

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::SessionConfig,
    constants::BEARER_PREFIX,
    state::AppState,
};

/// Session token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub login: String,
    pub exp: i64,
    pub iat: i64,
}

/// Caller with a valid session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub login: String,
}

/// Resolved caller identity; `None` is anonymous
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity(pub Option<AuthenticatedUser>);

impl Identity {
    pub fn anonymous() -> Self {
        Self(None)
    }

    /// Stable user id, with `0` standing for anonymous
    pub fn user_id(&self) -> i64 {
        self.0.as_ref().map_or(0, |u| u.id)
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.0.as_ref()
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Identity>().cloned().unwrap_or_default())
    }
}

/// Verifies session tokens from the cookie or the Authorization header
#[derive(Debug, Clone)]
pub struct SessionResolver {
    secret: String,
    cookie_name: String,
}

impl SessionResolver {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            cookie_name: config.cookie_name.clone(),
        }
    }

    /// Resolve the caller behind `headers`
    pub fn resolve(&self, headers: &HeaderMap) -> Identity {
        let Some(token) = self.token(headers) else {
            return Identity::anonymous();
        };

        let claims = match decode::<Claims>(
            &token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        ) {
            Ok(data) => data.claims,
            Err(e) => {
                debug!(error = ?e, "Session token rejected");
                return Identity::anonymous();
            }
        };

        match claims.sub.parse::<i64>() {
            Ok(0) => Identity::anonymous(),
            Ok(id) => Identity(Some(AuthenticatedUser {
                id,
                login: claims.login,
            })),
            Err(e) => {
                debug!(sub = %claims.sub, error = ?e, "Invalid user ID in session token");
                Identity::anonymous()
            }
        }
    }

    fn token(&self, headers: &HeaderMap) -> Option<String> {
        extract_cookie(headers, &self.cookie_name).or_else(|| {
            headers
                .get(header::AUTHORIZATION)?
                .to_str()
                .ok()?
                .strip_prefix(BEARER_PREFIX)
                .map(str::to_string)
        })
    }
}

/// Extract a cookie value from headers
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name && !value.is_empty()).then(|| value.to_string())
        })
}

/// Resolve the caller once and make it available to handlers
pub async fn identity_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let identity = state.sessions().resolve(request.headers());
    if let Some(user) = identity.user() {
        debug!(path = %request.uri().path(), user_id = user.id, login = %user.login, "Session resolved");
    }

    request.extensions_mut().insert(identity);
    next.run(request).await
}
