//! Content hub contract consumed by the hosting studio.
//!
//! The studio browses every connected repository through the same small
//! model: folders contain sub-folders and items, items render a details view
//! and expose blobs. An adapter implements [`ContentHubAdapter`] for one
//! configured connection and is created by a [`ContentHubAdapterFactory`].
//!
//! # Module layout
//!
//! - [`blob`] -- URL-backed blobs and their builder.
//! - [`details`] -- Sections and elements of an item's details view.
//! - [`search`] -- Search requests and results.

pub mod blob;
pub mod details;
pub mod search;

use async_trait::async_trait;
use headless_dam_common::{ContentHubType, ObjectId, Result};

pub use blob::{ContentHubBlob, UrlBlobBuilder};
pub use details::{DetailsElement, DetailsSection, DetailsValue};
pub use search::{ContentHubSearchResult, SearchRequest, Sort};

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

/// Anything the studio can show in its tree or list views.
pub trait ContentHubObject: Send + Sync {
    fn id(&self) -> &ObjectId;

    fn name(&self) -> &str;

    fn display_name(&self) -> &str {
        self.name()
    }

    fn hub_type(&self) -> ContentHubType;
}

/// A node that groups other objects.
pub trait Folder: ContentHubObject {}

/// A leaf backed by one remote document.
pub trait Item: ContentHubObject {
    /// Short description shown next to the name.
    fn description(&self) -> Option<&str>;

    /// Content type to use when the item is turned into studio content.
    fn studio_content_type(&self) -> &str;

    /// Sections of the details/preview panel.
    fn details(&self) -> Result<Vec<DetailsSection>>;

    /// Blob for `classifier`, if the item has one.
    fn blob(&self, classifier: &str) -> Result<Option<ContentHubBlob>>;
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// Content a transformer produced from an item.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedContent {
    pub name: String,
    pub content_type: String,
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// Turns items into studio content (drag and drop import).
#[async_trait]
pub trait ContentHubTransformer: Send + Sync {
    async fn transform(&self, item: &dyn Item) -> Result<TransformedContent>;
}

/// Free-text search over a connection.
#[async_trait]
pub trait ContentHubSearchService: Send + Sync {
    type Item: Item;

    async fn search(&self, request: &SearchRequest) -> Result<ContentHubSearchResult<Self::Item>>;

    /// Whether [`SearchRequest::below_folder`] is honoured.
    fn supports_search_below_folder(&self) -> bool;
}

/// Browsing entry point for one configured connection.
#[async_trait]
pub trait ContentHubAdapter: Send + Sync {
    type Folder: Folder;
    type Item: Item;

    fn root_folder(&self) -> &Self::Folder;

    /// Look up a folder. Ids that name no folder are an error.
    fn folder(&self, id: &ObjectId) -> Result<&Self::Folder>;

    /// Look up an item. `Ok(None)` when the remote side has nothing.
    async fn item(&self, id: &ObjectId) -> Result<Option<Self::Item>>;

    async fn items(&self, folder: &Self::Folder) -> Result<Vec<Self::Item>>;

    fn sub_folders(&self, folder: &Self::Folder) -> Vec<&Self::Folder>;

    fn parent(&self, object: &dyn ContentHubObject) -> Option<&Self::Folder>;

    fn transformer(&self) -> Result<&dyn ContentHubTransformer>;

    fn search_service(&self) -> Option<&dyn ContentHubSearchService<Item = Self::Item>>;

    fn supported_types(&self) -> Vec<ContentHubType>;
}

/// Creates adapters for connections of one kind.
pub trait ContentHubAdapterFactory: Send + Sync {
    type Settings;
    type Adapter: ContentHubAdapter;

    /// Identifier connections use to select this factory.
    fn id(&self) -> &'static str;

    fn create_adapter(&self, settings: &Self::Settings, connection_id: &str)
        -> Result<Self::Adapter>;
}
