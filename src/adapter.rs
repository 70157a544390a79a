//! Content hub adapter for a headless server's media assets.
//!
//! The adapter exposes a fixed, two-level hierarchy (see [`FixedFolder`]).
//! Folders live for the lifetime of the adapter; items are fetched from the
//! headless server on every request and never cached.

use async_trait::async_trait;
use headless_dam_client::{HeadlessServerConnector, TeasableDocument};
use headless_dam_common::{ContentHubType, Error, ObjectId, Result};
use tracing::{debug, error};

use crate::config::HeadlessDamSettings;
use crate::folder::{FixedFolder, HeadlessDamFolder};
use crate::hub::{
    ContentHubAdapter, ContentHubObject, ContentHubSearchResult, ContentHubSearchService,
    ContentHubTransformer, SearchRequest,
};
use crate::item::HeadlessDamItem;

/// Browses the audio, video, and picture documents of one site.
pub struct HeadlessDamAdapter {
    connection_id: String,
    server_url: String,
    site_id: String,
    root: HeadlessDamFolder,
    audio: HeadlessDamFolder,
    video: HeadlessDamFolder,
    pictures: HeadlessDamFolder,
    connector: HeadlessServerConnector,
}

impl HeadlessDamAdapter {
    /// Create an adapter for `connection_id`.
    ///
    /// Fails when the server URL or site id is missing or empty. The server
    /// URL is normalized to end with `/`.
    pub fn new(settings: &HeadlessDamSettings, connection_id: &str) -> Result<Self> {
        Self::build(settings, connection_id).inspect_err(|e| {
            error!(
                connection = connection_id,
                "Failed to initialize adapter for Headless DAM: {}", e
            );
        })
    }

    fn build(settings: &HeadlessDamSettings, connection_id: &str) -> Result<Self> {
        let server_url = required(settings.headless_server_url.as_deref()).ok_or_else(|| {
            Error::configuration(
                connection_id,
                format!("No headlessServerUrl set for content hub adapter connection '{connection_id}'"),
            )
        })?;
        let site_id = required(settings.site_id.as_deref()).ok_or_else(|| {
            Error::configuration(
                connection_id,
                format!("No siteId set for content hub adapter connection '{connection_id}'"),
            )
        })?;

        let server_url = if server_url.ends_with('/') {
            server_url.to_string()
        } else {
            format!("{server_url}/")
        };

        let connector = HeadlessServerConnector::new(&server_url, &settings.connector_options())
            .map_err(|e| Error::configuration(connection_id, e.to_string()))?;

        let folder = |kind| HeadlessDamFolder::new(kind, connection_id, &server_url);

        Ok(Self {
            root: folder(FixedFolder::Root),
            audio: folder(FixedFolder::Audio),
            video: folder(FixedFolder::Video),
            pictures: folder(FixedFolder::Pictures),
            connection_id: connection_id.to_string(),
            site_id: site_id.to_string(),
            server_url,
            connector,
        })
    }

    pub fn connection_id(&self) -> &str {
        &self.connection_id
    }

    /// Normalized server URL, always ending with `/`.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    fn fixed(&self, kind: FixedFolder) -> &HeadlessDamFolder {
        match kind {
            FixedFolder::Root => &self.root,
            FixedFolder::Audio => &self.audio,
            FixedFolder::Video => &self.video,
            FixedFolder::Pictures => &self.pictures,
        }
    }

    fn to_items(&self, documents: Vec<TeasableDocument>) -> Result<Vec<HeadlessDamItem>> {
        documents
            .into_iter()
            .map(|document| {
                let link_id = document.link_id().ok_or_else(|| {
                    Error::bad_remote_data(format!(
                        "search result '{}' has no link id",
                        document.name
                    ))
                })?;
                let id = ObjectId::new(&self.connection_id, link_id);
                Ok(HeadlessDamItem::new(document, id, &self.server_url))
            })
            .collect()
    }
}

fn required(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[async_trait]
impl ContentHubAdapter for HeadlessDamAdapter {
    type Folder = HeadlessDamFolder;
    type Item = HeadlessDamItem;

    fn root_folder(&self) -> &HeadlessDamFolder {
        &self.root
    }

    fn folder(&self, id: &ObjectId) -> Result<&HeadlessDamFolder> {
        FixedFolder::from_external_id(id.external_id())
            .map(|kind| self.fixed(kind))
            .ok_or_else(|| Error::unsupported_id(id.external_id()))
    }

    async fn item(&self, id: &ObjectId) -> Result<Option<HeadlessDamItem>> {
        let content = self.connector.fetch_by_id(id.external_id()).await?;
        let Some(document) = content.and_then(|c| c.content) else {
            debug!(id = %id, "No headless content found");
            return Ok(None);
        };
        Ok(Some(HeadlessDamItem::new(document, id.clone(), &self.server_url)))
    }

    async fn items(&self, folder: &HeadlessDamFolder) -> Result<Vec<HeadlessDamItem>> {
        let Some(doc_type) = folder.kind().content_type() else {
            return Ok(Vec::new());
        };

        let content = self.connector.fetch_by_type(&self.site_id, doc_type).await?;
        let Some(search) = content.and_then(|c| c.search) else {
            debug!(folder = %folder.id(), "No headless search result");
            return Ok(Vec::new());
        };

        debug!(
            folder = %folder.id(),
            num_found = search.num_found,
            returned = search.result.len(),
            "Listed headless documents"
        );
        self.to_items(search.result)
    }

    fn sub_folders(&self, folder: &HeadlessDamFolder) -> Vec<&HeadlessDamFolder> {
        match folder.kind() {
            FixedFolder::Root => FixedFolder::CHILDREN
                .into_iter()
                .map(|kind| self.fixed(kind))
                .collect(),
            FixedFolder::Audio | FixedFolder::Video | FixedFolder::Pictures => Vec::new(),
        }
    }

    fn parent(&self, object: &dyn ContentHubObject) -> Option<&HeadlessDamFolder> {
        if object.id().external_id() == FixedFolder::Root.external_id() {
            return None;
        }
        Some(&self.root)
    }

    fn transformer(&self) -> Result<&dyn ContentHubTransformer> {
        Err(Error::not_supported(
            "content transformation is not available for headless DAM connections",
        ))
    }

    fn search_service(&self) -> Option<&dyn ContentHubSearchService<Item = HeadlessDamItem>> {
        Some(self)
    }

    fn supported_types(&self) -> Vec<ContentHubType> {
        Vec::new()
    }
}

#[async_trait]
impl ContentHubSearchService for HeadlessDamAdapter {
    type Item = HeadlessDamItem;

    /// Free-text search is not wired to the headless server; always empty.
    async fn search(
        &self,
        request: &SearchRequest,
    ) -> Result<ContentHubSearchResult<HeadlessDamItem>> {
        debug!(query = %request.query, "Headless DAM search is not implemented, returning no hits");
        Ok(ContentHubSearchResult::empty())
    }

    fn supports_search_below_folder(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    fn adapter() -> HeadlessDamAdapter {
        HeadlessDamAdapter::new(
            &HeadlessDamSettings::new("https://headless.example.com", "corporate"),
            "dam",
        )
        .unwrap()
    }

    #[test]
    fn test_server_url_is_normalized() {
        let adapter = adapter();
        assert_eq!(adapter.server_url(), "https://headless.example.com/");
        assert_eq!(adapter.root_folder().name(), "https://headless.example.com/");
        assert_eq!(adapter.site_id(), "corporate");
        assert_eq!(adapter.connection_id(), "dam");
    }

    #[test]
    fn test_missing_server_url() {
        let settings = HeadlessDamSettings {
            site_id: Some("corporate".into()),
            ..HeadlessDamSettings::default()
        };
        let err = HeadlessDamAdapter::new(&settings, "conn-a").err().unwrap();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("headlessServerUrl"));
        assert!(err.to_string().contains("conn-a"));
    }

    #[test]
    fn test_empty_site_id() {
        let settings = HeadlessDamSettings::new("https://host", "");
        let err = HeadlessDamAdapter::new(&settings, "conn-b").err().unwrap();
        assert!(err.to_string().contains("siteId"));
        assert!(err.to_string().contains("conn-b"));
    }

    #[test]
    fn test_root_has_no_items_without_remote_call() {
        let adapter = adapter();
        let items = block_on(adapter.items(adapter.root_folder())).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_transformer_is_not_supported() {
        assert!(matches!(
            adapter().transformer().err().unwrap(),
            Error::NotSupported(_)
        ));
    }

    #[test]
    fn test_search_is_an_empty_stub() {
        let adapter = adapter();
        let service = adapter.search_service().unwrap();
        assert!(!service.supports_search_below_folder());
        let result = block_on(service.search(&SearchRequest::new("harbour"))).unwrap();
        assert!(result.is_empty());
        assert!(adapter.supported_types().is_empty());
    }
}
