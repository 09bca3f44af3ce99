//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod hole;
pub mod lang;
pub mod solution;

pub use hole::*;
pub use lang::*;
pub use solution::*;
