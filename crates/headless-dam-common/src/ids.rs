//! Connection-scoped object identifiers.
//!
//! Every folder and item exposed by an adapter is addressed by the id of the
//! connection it belongs to plus an identifier local to that connection.

use serde::{Deserialize, Serialize};

/// Unique identifier for a folder or item within one adapter connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectId {
    connection_id: String,
    external_id: String,
}

impl ObjectId {
    /// Create an id from a connection id and an external id.
    #[must_use]
    pub fn new<C: Into<String>, E: Into<String>>(connection_id: C, external_id: E) -> Self {
        Self {
            connection_id: connection_id.into(),
            external_id: external_id.into(),
        }
    }

    /// The connection this id belongs to.
    pub fn connection_id(&self) -> &str {
        &self.connection_id
    }

    /// The identifier local to the connection.
    pub fn external_id(&self) -> &str {
        &self.external_id
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.connection_id, self.external_id)
    }
}
