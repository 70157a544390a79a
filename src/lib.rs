//! Headless DAM - content hub adapter for a headless content server
//!
//! Exposes the audio, video, and picture documents of one site on a headless
//! server through the studio's folder/item browsing model. Browsing is
//! read-only and backed by live GraphQL calls.
//!
//! - [`adapter`] -- The adapter mapping the fixed hierarchy onto remote queries.
//! - [`folder`] -- The four fixed folders.
//! - [`item`] -- Items and their details view.
//! - [`factory`] -- Creates adapters from connection settings.
//! - [`config`] -- Connection settings.
//! - [`hub`] -- The content hub contract implemented here.
//!
//! # Examples
//!
//! ```no_run
//! use headless_dam::config::HeadlessDamSettings;
//! use headless_dam::hub::{ContentHubAdapter, ContentHubObject};
//! use headless_dam::HeadlessDamAdapter;
//!
//! # async fn run() -> headless_dam_common::Result<()> {
//! let settings = HeadlessDamSettings::new("https://headless.example.com", "corporate");
//! let adapter = HeadlessDamAdapter::new(&settings, "dam")?;
//!
//! for folder in adapter.sub_folders(adapter.root_folder()) {
//!     for item in adapter.items(folder).await? {
//!         println!("{} / {}", folder.name(), item.name());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod factory;
pub mod folder;
pub mod hub;
pub mod item;

pub use adapter::HeadlessDamAdapter;
pub use factory::HeadlessDamAdapterFactory;
pub use folder::{FixedFolder, HeadlessDamFolder, ADAPTER_TYPE};
pub use item::HeadlessDamItem;
