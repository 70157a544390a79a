//! Details view of an item.

use serde::Serialize;

use super::blob::ContentHubBlob;

/// A titled group of elements in the details panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsSection {
    pub name: String,
    pub elements: Vec<DetailsElement>,
    pub show_section_name: bool,
    pub collapsible: bool,
    pub embedded: bool,
}

impl DetailsSection {
    /// A section rendered with its name and collapsible.
    pub fn new<S: Into<String>>(name: S, elements: Vec<DetailsElement>) -> Self {
        Self {
            name: name.into(),
            elements,
            show_section_name: true,
            collapsible: true,
            embedded: false,
        }
    }

    /// A section rendered flat: no header, not collapsible.
    pub fn plain<S: Into<String>>(name: S, elements: Vec<DetailsElement>) -> Self {
        Self {
            show_section_name: false,
            collapsible: false,
            ..Self::new(name, elements)
        }
    }
}

/// One labelled value in a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsElement {
    pub name: String,
    pub show_label: bool,
    pub value: DetailsValue,
}

impl DetailsElement {
    pub fn text<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            show_label: true,
            value: DetailsValue::Text(value.into()),
        }
    }

    /// The name next to the item's type icon.
    pub fn type_icon<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            show_label: true,
            value: DetailsValue::TypeIcon,
        }
    }

    /// An inline preview, shown without a label.
    pub fn blob<N: Into<String>>(name: N, blob: ContentHubBlob) -> Self {
        Self {
            name: name.into(),
            show_label: false,
            value: DetailsValue::Blob(blob),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum DetailsValue {
    Text(String),
    TypeIcon,
    Blob(ContentHubBlob),
}
