//! Utility functions

pub mod html;

pub use html::escape_quotes;
