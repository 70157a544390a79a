//! Core types shared across the adapter.

use serde::{Deserialize, Serialize};

/// Type tag attached to every browsable object.
///
/// Folders use the adapter tag; items use the remote document type
/// (e.g. `CMPicture`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHubType(String);

impl ContentHubType {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHubType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
