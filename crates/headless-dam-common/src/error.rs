//! Error types shared by the connector and the adapter.
//!
//! Remote absence (not found, forbidden) is not an error: callers see it as
//! `Ok(None)` or an empty list. Everything here is a real failure.

/// Common error type for the headless DAM adapter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required settings are missing or invalid for a connection.
    #[error("Configuration error for connection '{connection}': {message}")]
    Configuration { connection: String, message: String },

    /// An identifier does not address any object this adapter knows about.
    #[error("Invalid headless DAM id '{0}'")]
    UnsupportedId(String),

    /// The remote server answered with a non-success status.
    #[error("REST call to '{url}' failed with status {status}: {body}")]
    Remote {
        url: String,
        status: u16,
        body: String,
    },

    /// The request never produced a response (connect, TLS, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote server returned data that cannot be used as-is.
    #[error("Bad remote data: {0}")]
    BadRemoteData(String),

    /// The capability exists in the contract but is not implemented.
    #[error("Not supported: {0}")]
    NotSupported(String),
}

impl Error {
    /// Create a new Configuration error.
    pub fn configuration<C: Into<String>, M: Into<String>>(connection: C, message: M) -> Self {
        Self::Configuration {
            connection: connection.into(),
            message: message.into(),
        }
    }

    /// Create a new UnsupportedId error.
    pub fn unsupported_id<S: Into<String>>(id: S) -> Self {
        Self::UnsupportedId(id.into())
    }

    /// Create a new Remote error.
    pub fn remote<U: Into<String>, B: Into<String>>(url: U, status: u16, body: B) -> Self {
        Self::Remote {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// Create a new Transport error.
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new BadRemoteData error.
    pub fn bad_remote_data<S: Into<String>>(msg: S) -> Self {
        Self::BadRemoteData(msg.into())
    }

    /// Create a new NotSupported error.
    pub fn not_supported<S: Into<String>>(msg: S) -> Self {
        Self::NotSupported(msg.into())
    }

    /// HTTP status of a failed remote call, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::configuration("dam-1", "No siteId set");
        assert_eq!(
            err.to_string(),
            "Configuration error for connection 'dam-1': No siteId set"
        );

        let err = Error::unsupported_id("bogus");
        assert_eq!(err.to_string(), "Invalid headless DAM id 'bogus'");

        let err = Error::remote("https://host/graphql", 500, "boom");
        assert_eq!(
            err.to_string(),
            "REST call to 'https://host/graphql' failed with status 500: boom"
        );

        let err = Error::bad_remote_data("picture has no crops");
        assert_eq!(err.to_string(), "Bad remote data: picture has no crops");

        let err = Error::not_supported("transformer");
        assert_eq!(err.to_string(), "Not supported: transformer");
    }

    #[test]
    fn test_status_only_for_remote() {
        assert_eq!(Error::remote("u", 502, "").status(), Some(502));
        assert_eq!(Error::transport("refused").status(), None);
        assert_eq!(Error::unsupported_id("x").status(), None);
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            Error::configuration("c", "m"),
            Error::Configuration { .. }
        ));
        assert!(matches!(Error::transport("t"), Error::Transport(_)));
        assert!(matches!(Error::bad_remote_data("b"), Error::BadRemoteData(_)));
        assert!(matches!(Error::not_supported("n"), Error::NotSupported(_)));
    }
}
