//! Shared test harness for adapter integration tests.
//!
//! Provides [`TestHarness`], which starts a mock headless server and builds a
//! [`HeadlessDamAdapter`] pointed at it.

#![allow(dead_code)]

use headless_dam::config::HeadlessDamSettings;
use headless_dam::HeadlessDamAdapter;
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CONNECTION_ID: &str = "headless-dam-test";
pub const SITE_ID: &str = "corporate";

/// Route test logs through `RUST_LOG` when set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A mock headless server with an adapter bound to it.
pub struct TestHarness {
    pub server: MockServer,
    pub adapter: HeadlessDamAdapter,
}

impl TestHarness {
    pub async fn new() -> Self {
        init_tracing();
        let server = MockServer::start().await;
        // No trailing slash: the adapter must add it.
        let settings = HeadlessDamSettings::new(server.uri(), SITE_ID);
        let adapter = HeadlessDamAdapter::new(&settings, CONNECTION_ID).unwrap();
        Self { server, adapter }
    }

    /// Answer search queries for `doc_type` with `results`.
    pub async fn mock_search(&self, doc_type: &str, results: Vec<Value>) {
        let body = json!({
            "data": {"content": {"search": {
                "numFound": results.len(),
                "result": results
            }}}
        });
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_string_contains(format!(r#"docTypes: [\"{doc_type}\"]"#)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer the get-by-id query for `id` with `document`.
    pub async fn mock_content(&self, id: &str, document: Value) {
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_string_contains(format!(r#"content(id:\"{id}\")"#)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"content": {"content": document}}
            })))
            .mount(&self.server)
            .await;
    }

    /// Answer every request with `status` and `body`.
    pub async fn mock_status(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }
}

pub fn document(id: &str, name: &str, doc_type: &str) -> Value {
    json!({
        "name": name,
        "title": format!("{name} title"),
        "type": doc_type,
        "link": {"id": id},
        "teaserText": "<div><p>teaser</p></div>",
        "picture": null
    })
}

pub fn picture(id: &str, name: &str) -> Value {
    json!({
        "name": name,
        "title": format!("{name} title"),
        "type": "CMPicture",
        "link": {"id": id},
        "picture": {
            "uriTemplate": format!("/caas/v1/media/{id}/data/{{cropName}}/{{width}}"),
            "crops": [
                {"name": "portrait_ratio1x1", "minWidth": 200},
                {"name": "landscape_ratio16x9", "minWidth": 100}
            ],
            "data": {"size": 51200, "contentType": "image/jpeg"}
        }
    })
}
