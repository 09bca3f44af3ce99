//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_BASE_CSS_PATH, DEFAULT_CATALOG_PATH, DEFAULT_DATABASE_MAX_CONNECTIONS,
    DEFAULT_HOLE_CSS_PATH, DEFAULT_HOLE_JS_PATH, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_SESSION_COOKIE, DEFAULT_STATIC_DIR,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub assets: AssetsConfig,
    pub catalog: CatalogConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Session token configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC secret the session JWT is signed with
    pub secret: String,
    pub cookie_name: String,
}

/// Paths of the stylesheets and scripts referenced by rendered pages
#[derive(Debug, Clone)]
pub struct AssetsConfig {
    pub base_css: String,
    pub hole_css: String,
    pub hole_js: String,
    pub static_dir: PathBuf,
}

/// Static catalog configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            session: SessionConfig::from_env()?,
            assets: AssetsConfig::from_env(),
            catalog: CatalogConfig::from_env(),
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl SessionConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("SESSION_SECRET")
                .map_err(|_| ConfigError::Missing("SESSION_SECRET".to_string()))?,
            cookie_name: env::var("SESSION_COOKIE")
                .unwrap_or_else(|_| DEFAULT_SESSION_COOKIE.to_string()),
        })
    }
}

impl AssetsConfig {
    fn from_env() -> Self {
        Self {
            base_css: env::var("BASE_CSS_PATH").unwrap_or_else(|_| DEFAULT_BASE_CSS_PATH.to_string()),
            hole_css: env::var("HOLE_CSS_PATH").unwrap_or_else(|_| DEFAULT_HOLE_CSS_PATH.to_string()),
            hole_js: env::var("HOLE_JS_PATH").unwrap_or_else(|_| DEFAULT_HOLE_JS_PATH.to_string()),
            static_dir: PathBuf::from(
                env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
            ),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_css: DEFAULT_BASE_CSS_PATH.to_string(),
            hole_css: DEFAULT_HOLE_CSS_PATH.to_string(),
            hole_js: DEFAULT_HOLE_JS_PATH.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl CatalogConfig {
    fn from_env() -> Self {
        Self {
            path: PathBuf::from(
                env::var("CATALOG_PATH").unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string()),
            ),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
