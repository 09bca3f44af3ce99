//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// SESSION DEFAULTS
// =============================================================================

/// Default name of the cookie carrying the session token
pub const DEFAULT_SESSION_COOKIE: &str = "__Host-session";

/// Authorization header scheme accepted as a fallback to the cookie
pub const BEARER_PREFIX: &str = "Bearer ";

// =============================================================================
// ASSET DEFAULTS
// =============================================================================

pub const DEFAULT_BASE_CSS_PATH: &str = "/assets/base.css";
pub const DEFAULT_HOLE_CSS_PATH: &str = "/assets/hole.css";
pub const DEFAULT_HOLE_JS_PATH: &str = "/assets/hole.js";

/// Directory served under `/assets`
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Default location of the hole and language catalog
pub const DEFAULT_CATALOG_PATH: &str = "catalog.toml";

// =============================================================================
// GITHUB OAUTH
// =============================================================================

/// OAuth application registered with GitHub. The authorize link must carry
/// exactly this client id for the callback configuration to accept it.
pub const GITHUB_CLIENT_ID: &str = "7f6709819023e9215205";

pub const GITHUB_SCOPE: &str = "user:email";

pub const GITHUB_AUTHORIZE_URL: &str = "//github.com/login/oauth/authorize";

// =============================================================================
// ROSTER
// =============================================================================

/// Label shown on every language tab before the client reconciles state
pub const NOT_TRIED_LABEL: &str = "not tried";
