//! Hole page rendering
//!
//! - **composer**: staged writer enforcing the page's emission order
//! - **hydration**: `data-*` attributes built from the user's solutions

pub mod composer;
pub mod hydration;

pub use composer::PageWriter;
pub use hydration::Hydration;
