//! URL-backed blobs.

use headless_dam_common::ObjectId;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// A binary the studio fetches from `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentHubBlob {
    pub object_id: ObjectId,
    pub classifier: String,
    pub url: String,
    pub etag: Option<String>,
    pub content_type: Option<String>,
    pub length: Option<u64>,
}

/// Builder for [`ContentHubBlob`].
///
/// ```
/// use headless_dam::hub::UrlBlobBuilder;
/// use headless_dam_common::ObjectId;
///
/// let blob = UrlBlobBuilder::new(ObjectId::new("dam", "7"), "preview", "https://host/img.jpg")
///     .with_etag()
///     .build();
/// assert_eq!(blob.classifier, "preview");
/// assert_eq!(blob.etag.as_ref().map(String::len), Some(64));
/// ```
#[derive(Debug, Clone)]
pub struct UrlBlobBuilder {
    blob: ContentHubBlob,
}

impl UrlBlobBuilder {
    pub fn new<C: Into<String>, U: Into<String>>(object_id: ObjectId, classifier: C, url: U) -> Self {
        Self {
            blob: ContentHubBlob {
                object_id,
                classifier: classifier.into(),
                url: url.into(),
                etag: None,
                content_type: None,
                length: None,
            },
        }
    }

    /// Derive the ETag from the URL, so it changes whenever the URL does.
    pub fn with_etag(mut self) -> Self {
        let digest = Sha256::digest(self.blob.url.as_bytes());
        self.blob.etag = Some(hex::encode(digest));
        self
    }

    pub fn with_content_type(mut self, content_type: Option<String>) -> Self {
        self.blob.content_type = content_type;
        self
    }

    pub fn with_length(mut self, length: Option<u64>) -> Self {
        self.blob.length = length;
        self
    }

    pub fn build(self) -> ContentHubBlob {
        self.blob
    }
}
