//! Language model

use serde::Deserialize;

/// A supported language as shown in the roster
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Lang {
    /// Short code, also used as the `data-*` attribute suffix
    pub id: String,
    pub name: String,
}
