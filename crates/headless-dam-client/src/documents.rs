//! Typed GraphQL response documents.
//!
//! Every response is wrapped as `{"data": {"content": ...}}`. The inner
//! `content` node holds either a single teasable document (`content`) or a
//! search result (`search`), depending on which query was sent.

use headless_dam_common::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};

const CROP_NAME_TOKEN: &str = "{cropName}";
const WIDTH_TOKEN: &str = "{width}";

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Top-level GraphQL response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct QueryResponseDocument {
    pub data: Option<DataDocument>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct DataDocument {
    pub content: Option<ContentDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// The `content` root node of a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    /// Set by the get-by-id query.
    pub content: Option<TeasableDocument>,
    /// Set by the search query.
    pub search: Option<SearchResultDocument>,
}

/// Result node of a search query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_found: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: Vec<TeasableDocument>,
}

/// A remote document exposing the common teaser fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeasableDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub title: Option<String>,
    /// Document type tag, e.g. `CMPicture`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub doc_type: String,
    pub link: Option<LinkDocument>,
    pub teaser_text: Option<String>,
    pub remote_link: Option<String>,
    pub creation_date: Option<String>,
    pub picture: Option<PictureDocument>,
}

impl TeasableDocument {
    /// Id of the document as used by the get-by-id query.
    pub fn link_id(&self) -> Option<&str> {
        self.link
            .as_ref()
            .map(|link| link.id.as_str())
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
}

// ---------------------------------------------------------------------------
// Pictures
// ---------------------------------------------------------------------------

/// Picture descriptor attached to a teasable document.
///
/// `crops` is ordered; the first entry is the default rendition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureDocument {
    /// Path template containing `{cropName}` and `{width}` placeholders.
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri_template: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub crops: Vec<CropDocument>,
    pub data: Option<BlobDocument>,
}

impl PictureDocument {
    /// Fully-qualified URL of the default rendition.
    pub fn default_image_url(&self, server_url: &str) -> Result<String> {
        resolve_default_url(&self.uri_template, &self.crops, server_url)
    }
}

/// A named rendition of a picture with its minimum width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub min_width: u32,
}

impl CropDocument {
    pub fn new<S: Into<String>>(name: S, min_width: u32) -> Self {
        Self {
            name: name.into(),
            min_width,
        }
    }
}

/// Blob metadata of the original picture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobDocument {
    pub size: Option<u64>,
    pub content_type: Option<String>,
}

/// GraphQL sends `null` for absent values; treat it like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Build the default image URL from a picture's URI template.
///
/// The first crop always wins; there is no best-fit selection. One trailing
/// `/` is stripped from `base_url` because the template supplies its own
/// leading separator.
///
/// # Examples
///
/// ```
/// use headless_dam_client::{resolve_default_url, CropDocument};
///
/// let crops = [CropDocument::new("square", 200), CropDocument::new("wide", 400)];
/// let url = resolve_default_url("/img/{cropName}/{width}", &crops, "https://host/").unwrap();
/// assert_eq!(url, "https://host/img/square/200");
/// ```
pub fn resolve_default_url(template: &str, crops: &[CropDocument], base_url: &str) -> Result<String> {
    let crop = crops.first().ok_or_else(|| {
        Error::bad_remote_data(format!(
            "picture with URI template '{template}' has no crop variants"
        ))
    })?;

    let path = template
        .replace(CROP_NAME_TOKEN, &crop.name)
        .replace(WIDTH_TOKEN, &crop.min_width.to_string());
    let base = base_url.strip_suffix('/').unwrap_or(base_url);

    Ok(format!("{base}{path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_crop_wins() {
        let crops = vec![CropDocument::new("wide", 400), CropDocument::new("square", 200)];
        let url = resolve_default_url("/img/{cropName}/{width}", &crops, "https://host/").unwrap();
        assert_eq!(url, "https://host/img/wide/400");
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let crops = vec![CropDocument::new("portrait_ratio3x4", 120)];
        let url = resolve_default_url(
            "/caas/v1/media/42/data/abc/{cropName}/{width}/pic.jpg",
            &crops,
            "http://localhost:41180",
        )
        .unwrap();
        assert_eq!(
            url,
            "http://localhost:41180/caas/v1/media/42/data/abc/portrait_ratio3x4/120/pic.jpg"
        );
    }

    #[test]
    fn test_only_one_trailing_slash_stripped() {
        let crops = vec![CropDocument::new("c", 1)];
        let url = resolve_default_url("/{cropName}/{width}", &crops, "https://host//").unwrap();
        assert_eq!(url, "https://host//c/1");
    }

    #[test]
    fn test_empty_crops_is_bad_remote_data() {
        let err = resolve_default_url("/img/{cropName}/{width}", &[], "https://host/").unwrap_err();
        assert!(matches!(err, Error::BadRemoteData(_)));
    }

    #[test]
    fn test_picture_document_delegates() {
        let picture = PictureDocument {
            uri_template: "/p/{cropName}/{width}".into(),
            crops: vec![CropDocument::new("landscape", 640)],
            data: None,
        };
        assert_eq!(
            picture.default_image_url("https://dam/").unwrap(),
            "https://dam/p/landscape/640"
        );
    }

    #[test]
    fn test_deserialize_search_content() {
        let content: ContentDocument = serde_json::from_value(json!({
            "search": {
                "numFound": 2,
                "result": [
                    {
                        "name": "Beach",
                        "title": "A beach",
                        "type": "CMPicture",
                        "link": {"id": "100"},
                        "picture": {
                            "uriTemplate": "/img/{cropName}/{width}",
                            "crops": [{"name": "square", "minWidth": 200}],
                            "data": {"size": 1024, "contentType": "image/jpeg"}
                        }
                    },
                    {"name": "Jingle", "type": "CMAudio", "link": {"id": "102"}, "picture": null}
                ]
            }
        }))
        .unwrap();

        assert!(content.content.is_none());
        let search = content.search.unwrap();
        assert_eq!(search.num_found, 2);
        assert_eq!(search.result.len(), 2);

        let beach = &search.result[0];
        assert_eq!(beach.doc_type, "CMPicture");
        assert_eq!(beach.link_id(), Some("100"));
        let picture = beach.picture.as_ref().unwrap();
        assert_eq!(picture.crops[0], CropDocument::new("square", 200));
        assert_eq!(
            picture.data.as_ref().unwrap().content_type.as_deref(),
            Some("image/jpeg")
        );

        assert!(search.result[1].picture.is_none());
    }

    #[test]
    fn test_deserialize_nulls_as_defaults() {
        let search: SearchResultDocument = serde_json::from_value(json!({
            "numFound": null,
            "result": [{
                "name": null,
                "title": null,
                "type": null,
                "link": {"id": null},
                "picture": {"uriTemplate": null, "crops": null, "data": null}
            }]
        }))
        .unwrap();

        assert_eq!(search.num_found, 0);
        let doc = &search.result[0];
        assert_eq!(doc.name, "");
        assert_eq!(doc.doc_type, "");
        assert_eq!(doc.link_id(), None);
        let picture = doc.picture.as_ref().unwrap();
        assert!(picture.crops.is_empty());
        assert!(matches!(
            picture.default_image_url("https://host/"),
            Err(Error::BadRemoteData(_))
        ));

        let empty: SearchResultDocument =
            serde_json::from_value(json!({"numFound": 0, "result": null})).unwrap();
        assert!(empty.result.is_empty());
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let doc: TeasableDocument = serde_json::from_value(json!({
            "name": "Clip",
            "type": "CMVideo",
            "link": {"id": "7"},
            "teaserText": "<div>hi</div>",
            "remoteLink": "https://youtu.be/x",
            "somethingNew": true
        }))
        .unwrap();
        assert_eq!(doc.teaser_text.as_deref(), Some("<div>hi</div>"));
        assert_eq!(doc.remote_link.as_deref(), Some("https://youtu.be/x"));
        assert!(doc.title.is_none());
    }
}
