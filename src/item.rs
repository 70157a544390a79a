//! Items and their details view.
//!
//! An item wraps one remote teasable document. Picture items preview their
//! default rendition; everything else shows its name with a type icon. Both
//! are followed by a metadata section with name, id, and type, leaving out
//! values the remote side did not send.

use headless_dam_client::TeasableDocument;
use headless_dam_common::{ContentHubType, Error, ObjectId, Result};

use crate::hub::{
    ContentHubBlob, ContentHubObject, DetailsElement, DetailsSection, Item, UrlBlobBuilder,
};

const PICTURE_TYPE: &str = "CMPicture";
const PREVIEW_CLASSIFIER: &str = "preview";

/// A remote document exposed as a content hub item.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessDamItem {
    id: ObjectId,
    document: TeasableDocument,
    server_url: String,
}

impl HeadlessDamItem {
    pub fn new<S: Into<String>>(document: TeasableDocument, id: ObjectId, server_url: S) -> Self {
        Self {
            id,
            document,
            server_url: server_url.into(),
        }
    }

    pub fn document(&self) -> &TeasableDocument {
        &self.document
    }

    fn is_picture(&self) -> bool {
        self.document.doc_type == PICTURE_TYPE
    }

    fn default_image_url(&self) -> Result<Option<String>> {
        self.document
            .picture
            .as_ref()
            .map(|picture| picture.default_image_url(&self.server_url))
            .transpose()
    }

    fn url_blob(&self, classifier: &str, url: String) -> ContentHubBlob {
        let data = self.document.picture.as_ref().and_then(|p| p.data.as_ref());
        UrlBlobBuilder::new(self.id.clone(), classifier, url)
            .with_etag()
            .with_content_type(data.and_then(|d| d.content_type.clone()))
            .with_length(data.and_then(|d| d.size))
            .build()
    }

    fn content_details(&self) -> Vec<DetailsSection> {
        let main = vec![DetailsElement::type_icon(self.document.name.as_str())];
        vec![DetailsSection::plain("main", main), self.metadata_section()]
    }

    fn picture_details(&self) -> Result<Vec<DetailsSection>> {
        let url = self.default_image_url()?.ok_or_else(|| {
            Error::bad_remote_data(format!("picture '{}' has no picture descriptor", self.id))
        })?;
        let preview = self.url_blob(PREVIEW_CLASSIFIER, url);
        let main = vec![DetailsElement::blob(self.document.name.as_str(), preview)];
        Ok(vec![DetailsSection::plain("main", main), self.metadata_section()])
    }

    fn metadata_section(&self) -> DetailsSection {
        let name = Some(self.document.name.as_str()).filter(|n| !n.is_empty());
        let doc_type = Some(self.document.doc_type.as_str()).filter(|t| !t.is_empty());
        let elements = [
            ("name", name),
            ("id", self.document.link_id()),
            ("type", doc_type),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| DetailsElement::text(label, v)))
        .collect();

        DetailsSection::new("metadata", elements)
    }
}

impl ContentHubObject for HeadlessDamItem {
    fn id(&self) -> &ObjectId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.document.name
    }

    fn hub_type(&self) -> ContentHubType {
        ContentHubType::new(self.document.doc_type.as_str())
    }
}

impl Item for HeadlessDamItem {
    fn description(&self) -> Option<&str> {
        self.document.title.as_deref()
    }

    fn studio_content_type(&self) -> &str {
        &self.document.doc_type
    }

    fn details(&self) -> Result<Vec<DetailsSection>> {
        if self.is_picture() {
            return self.picture_details();
        }
        Ok(self.content_details())
    }

    /// Only the default rendition exists, whatever the classifier.
    fn blob(&self, classifier: &str) -> Result<Option<ContentHubBlob>> {
        Ok(self
            .default_image_url()?
            .map(|url| self.url_blob(classifier, url)))
    }
}
