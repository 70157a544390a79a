//! The fixed folder hierarchy.
//!
//! ```text
//! root
//! ├── audio     (CMAudio)
//! ├── video     (CMVideo)
//! └── pictures  (CMPicture)
//! ```

use headless_dam_common::{ContentHubType, ObjectId};

use crate::hub::{ContentHubObject, Folder};

/// Hub type tag carried by every folder of this adapter.
pub const ADAPTER_TYPE: &str = "headlessdam";

/// One of the four folders an adapter exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedFolder {
    Root,
    Audio,
    Video,
    Pictures,
}

impl FixedFolder {
    pub const ALL: [FixedFolder; 4] = [
        FixedFolder::Root,
        FixedFolder::Audio,
        FixedFolder::Video,
        FixedFolder::Pictures,
    ];

    /// Sub-folders of the root, in display order.
    pub const CHILDREN: [FixedFolder; 3] =
        [FixedFolder::Audio, FixedFolder::Video, FixedFolder::Pictures];

    pub fn external_id(self) -> &'static str {
        match self {
            FixedFolder::Root => "root",
            FixedFolder::Audio => "audio",
            FixedFolder::Video => "video",
            FixedFolder::Pictures => "pictures",
        }
    }

    pub fn from_external_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|folder| folder.external_id() == id)
    }

    /// Remote document type listed in this folder. The root holds no items.
    pub fn content_type(self) -> Option<&'static str> {
        match self {
            FixedFolder::Root => None,
            FixedFolder::Audio => Some("CMAudio"),
            FixedFolder::Video => Some("CMVideo"),
            FixedFolder::Pictures => Some("CMPicture"),
        }
    }

    /// The root is named after the server it browses.
    fn display_name(self, server_url: &str) -> &str {
        match self {
            FixedFolder::Root => server_url,
            FixedFolder::Audio => "Audio",
            FixedFolder::Video => "Videos",
            FixedFolder::Pictures => "Pictures",
        }
    }
}

/// A folder of the fixed hierarchy bound to one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessDamFolder {
    id: ObjectId,
    name: String,
    kind: FixedFolder,
}

impl HeadlessDamFolder {
    pub(crate) fn new(kind: FixedFolder, connection_id: &str, server_url: &str) -> Self {
        Self {
            id: ObjectId::new(connection_id, kind.external_id()),
            name: kind.display_name(server_url).to_string(),
            kind,
        }
    }

    pub fn kind(&self) -> FixedFolder {
        self.kind
    }
}

impl ContentHubObject for HeadlessDamFolder {
    fn id(&self) -> &ObjectId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn hub_type(&self) -> ContentHubType {
        ContentHubType::new(ADAPTER_TYPE)
    }
}

impl Folder for HeadlessDamFolder {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_ids_round_trip() {
        for folder in FixedFolder::ALL {
            assert_eq!(FixedFolder::from_external_id(folder.external_id()), Some(folder));
        }
        assert_eq!(FixedFolder::from_external_id("Pictures"), None);
        assert_eq!(FixedFolder::from_external_id(""), None);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(FixedFolder::Root.content_type(), None);
        assert_eq!(FixedFolder::Audio.content_type(), Some("CMAudio"));
        assert_eq!(FixedFolder::Video.content_type(), Some("CMVideo"));
        assert_eq!(FixedFolder::Pictures.content_type(), Some("CMPicture"));
    }

    #[test]
    fn test_folder_names() {
        let root = HeadlessDamFolder::new(FixedFolder::Root, "dam", "https://host/");
        assert_eq!(root.name(), "https://host/");
        assert_eq!(root.display_name(), "https://host/");
        assert_eq!(root.id(), &ObjectId::new("dam", "root"));
        assert_eq!(root.hub_type().as_str(), ADAPTER_TYPE);

        let video = HeadlessDamFolder::new(FixedFolder::Video, "dam", "https://host/");
        assert_eq!(video.name(), "Videos");
        assert_eq!(video.id().external_id(), "video");
    }
}
