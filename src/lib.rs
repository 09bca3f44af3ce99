//! Hole pages for a code-golf competition site
//!
//! This library renders the interactive page for a single hole: its
//! description, the caller's previous solutions embedded for the editor,
//! and the tab roster of every supported language.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Page composition
//! - **Page**: Staged HTML writer and hydration encoder
//! - **Repositories**: Database access behind the `SolutionStore` trait
//! - **Catalog**: Static holes and languages loaded at startup

pub mod catalog;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod page;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
