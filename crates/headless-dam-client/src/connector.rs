//! HTTP transport to the headless server's GraphQL endpoint.
//!
//! Each call is one POST and one response: no retry, no backoff. Responses
//! are classified as follows:
//!
//! - 2xx: the body is decoded and its `data.content` node returned.
//! - 404 and 403: `Ok(None)`, the caller sees "nothing here".
//! - anything else: [`Error::Remote`] with the status and the response body.

use std::time::Duration;

use headless_dam_common::{Error, Result};
use reqwest::header::{ACCEPT, ACCEPT_CHARSET, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::{debug, trace, warn};

use crate::documents::{ContentDocument, QueryResponseDocument};
use crate::query::{ContentQuery, GraphQlQuery, QueryPayload, SearchQuery};

/// Path of the GraphQL endpoint below the server base URL.
pub const GRAPHQL_ENDPOINT: &str = "graphql";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const JSON: &str = "application/json";

/// Transport settings for [`HeadlessServerConnector`].
#[derive(Debug, Clone)]
pub struct ConnectorOptions {
    /// Accept any certificate and hostname presented by the server.
    ///
    /// Only meant for headless servers running with self-signed certificates
    /// in a private network segment.
    pub insecure_transport: bool,
    /// Overall timeout of a single request.
    pub timeout: Duration,
}

impl Default for ConnectorOptions {
    fn default() -> Self {
        Self {
            insecure_transport: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Client for the headless server's GraphQL endpoint.
///
/// Cheap to share: the inner [`reqwest::Client`] pools connections and may be
/// used from many tasks at once.
#[derive(Debug, Clone)]
pub struct HeadlessServerConnector {
    client: Client,
    server_url: String,
    endpoint: String,
}

impl HeadlessServerConnector {
    /// Create a connector for the server at `server_url`.
    pub fn new(server_url: &str, options: &ConnectorOptions) -> Result<Self> {
        let mut builder = Client::builder().timeout(options.timeout);

        if options.insecure_transport {
            // Certificate chain and hostname checks are both disabled here.
            warn!(
                server_url,
                "TLS certificate and hostname verification disabled for headless server"
            );
            builder = builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }

        let client = builder
            .build()
            .map_err(|e| Error::transport(format!("Failed to build HTTP client: {e}")))?;

        let endpoint = if server_url.ends_with('/') {
            format!("{server_url}{GRAPHQL_ENDPOINT}")
        } else {
            format!("{server_url}/{GRAPHQL_ENDPOINT}")
        };

        Ok(Self {
            client,
            server_url: server_url.to_string(),
            endpoint,
        })
    }

    /// Base URL of the headless server.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Full URL requests are POSTed to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch a single content node by id.
    ///
    /// The returned document has its `content` field set.
    pub async fn fetch_by_id(&self, id: &str) -> Result<Option<ContentDocument>> {
        self.execute(&ContentQuery::new(id)).await
    }

    /// Search all documents of `doc_type` in `site_id`.
    ///
    /// The returned document has its `search` field set.
    pub async fn fetch_by_type(
        &self,
        site_id: &str,
        doc_type: &str,
    ) -> Result<Option<ContentDocument>> {
        self.execute(&SearchQuery::new(site_id, doc_type)).await
    }

    /// Send any query and return the `data.content` node of the response.
    pub async fn execute<Q: GraphQlQuery + ?Sized>(
        &self,
        query: &Q,
    ) -> Result<Option<ContentDocument>> {
        debug!(query = query.label(), endpoint = %self.endpoint, "Sending headless query");

        let Some(response) = self.post(query.payload()).await? else {
            return Ok(None);
        };

        match response.data {
            Some(data) => {
                if !response.errors.is_empty() {
                    warn!(
                        query = query.label(),
                        errors = %join_messages(&response.errors),
                        "Headless query returned partial data"
                    );
                }
                Ok(data.content)
            }
            None if !response.errors.is_empty() => Err(Error::bad_remote_data(format!(
                "GraphQL {} query failed: {}",
                query.label(),
                join_messages(&response.errors)
            ))),
            None => Ok(None),
        }
    }

    async fn post(&self, payload: QueryPayload) -> Result<Option<QueryResponseDocument>> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .header(ACCEPT_CHARSET, "utf-8")
            .body(payload.into_string())
            .send()
            .await
            .map_err(|e| Error::transport(format!("Request to '{}' failed: {e}", self.endpoint)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return self.classify_failure(status, body);
        }

        let document = response.json::<QueryResponseDocument>().await.map_err(|e| {
            if e.is_decode() {
                Error::bad_remote_data(format!(
                    "Malformed response from '{}': {e}",
                    self.endpoint
                ))
            } else {
                Error::transport(format!(
                    "Failed to read response from '{}': {e}",
                    self.endpoint
                ))
            }
        })?;

        Ok(Some(document))
    }

    fn classify_failure<T>(&self, status: StatusCode, body: String) -> Result<Option<T>> {
        match status {
            StatusCode::NOT_FOUND => {
                trace!(
                    url = %self.server_url,
                    %status,
                    "Result will be interpreted as 'no result found'"
                );
                Ok(None)
            }
            // Permission denial is reported as absence, same as not found.
            StatusCode::FORBIDDEN => {
                warn!(
                    url = %self.server_url,
                    %body,
                    "Forbidden, not allowed to make this request"
                );
                Ok(None)
            }
            _ => {
                warn!(url = %self.server_url, %status, %body, "Headless call failed");
                Err(Error::remote(&self.endpoint, status.as_u16(), body))
            }
        }
    }
}

fn join_messages(errors: &[crate::documents::GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
