use std::time::Duration;

use headless_dam_client::{ConnectorOptions, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};

/// Settings of one headless DAM connection
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlessDamSettings {
    /// Base URL of the headless server
    #[serde(default)]
    pub headless_server_url: Option<String>,

    /// Site whose media is browsed
    #[serde(default)]
    pub site_id: Option<String>,

    /// Skip TLS certificate and hostname verification (self-signed servers only)
    #[serde(default)]
    pub insecure_transport: bool,

    /// Timeout of a single request to the headless server (default: 30, 0 means default)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for HeadlessDamSettings {
    fn default() -> Self {
        Self {
            headless_server_url: None,
            site_id: None,
            insecure_transport: false,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl HeadlessDamSettings {
    pub fn new<U: Into<String>, S: Into<String>>(headless_server_url: U, site_id: S) -> Self {
        Self {
            headless_server_url: Some(headless_server_url.into()),
            site_id: Some(site_id.into()),
            ..Self::default()
        }
    }

    /// Transport options for the connector. A zero timeout falls back to the default.
    pub fn connector_options(&self) -> ConnectorOptions {
        let timeout = match self.request_timeout_secs {
            0 => DEFAULT_TIMEOUT,
            secs => Duration::from_secs(secs),
        };
        ConnectorOptions {
            insecure_transport: self.insecure_transport,
            timeout,
        }
    }
}
