//! Headless-DAM-Common: Shared types and errors.
//!
//! This crate provides the vocabulary shared by the remote client and the
//! content hub adapter:
//!
//! - **Object IDs**: connection-scoped identifiers for folders and items
//! - **Hub Types**: type tags attached to browsable objects
//! - **Error Handling**: the error taxonomy and result alias
//!
//! # Examples
//!
//! ```
//! use headless_dam_common::{ContentHubType, Error, ObjectId, Result};
//!
//! let id = ObjectId::new("dam", "1234");
//! assert_eq!(id.external_id(), "1234");
//!
//! let hub_type = ContentHubType::new("CMPicture");
//! assert_eq!(hub_type.as_str(), "CMPicture");
//!
//! fn example() -> Result<()> {
//!     Err(Error::unsupported_id("nope"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod ids;
pub mod types;

pub use error::{Error, Result};
pub use ids::*;
pub use types::*;
