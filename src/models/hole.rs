//! Hole model

use serde::Deserialize;

/// A single coding challenge
///
/// `preamble` is pre-rendered markup and is emitted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Hole {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub preamble: String,
}
