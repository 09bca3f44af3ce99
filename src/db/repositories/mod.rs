//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod solution_repo;

pub use solution_repo::SolutionRepository;
