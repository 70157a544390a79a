//! Headless-DAM-Client: talks GraphQL to the headless content server.
//!
//! - [`query`] -- Fixed GraphQL payloads (get-by-id, search-by-type).
//! - [`documents`] -- Typed response documents and default image URL resolution.
//! - [`connector`] -- HTTP transport and failure classification.
//!
//! # Examples
//!
//! ```no_run
//! use headless_dam_client::{ConnectorOptions, HeadlessServerConnector};
//!
//! # async fn run() -> headless_dam_common::Result<()> {
//! let connector = HeadlessServerConnector::new(
//!     "https://headless.example.com/",
//!     &ConnectorOptions::default(),
//! )?;
//! if let Some(content) = connector.fetch_by_id("4711").await? {
//!     println!("{:?}", content.content.map(|doc| doc.name));
//! }
//! # Ok(())
//! # }
//! ```

pub mod connector;
pub mod documents;
pub mod query;

pub use connector::{ConnectorOptions, HeadlessServerConnector, DEFAULT_TIMEOUT, GRAPHQL_ENDPOINT};
pub use documents::{
    resolve_default_url, BlobDocument, ContentDocument, CropDocument, LinkDocument,
    PictureDocument, SearchResultDocument, TeasableDocument,
};
pub use query::{ContentQuery, GraphQlQuery, QueryPayload, SearchQuery, SEARCH_LIMIT};
