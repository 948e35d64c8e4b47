//! Roster Core
//!
//! Domain types, traits, and error handling shared by the Roster crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord`, `UserId`, `CreateUser`, `UpdateUser`
//! - **Core Traits**: `UserDirectory` — the seam to the remote directory service
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{UserId, UserRecord};
//!
//! let record = UserRecord {
//!     id: UserId::new(1),
//!     name: "Ann".to_string(),
//!     username: "ann1".to_string(),
//!     email: "a@x.com".to_string(),
//! };
//! assert_eq!(record.id.to_string(), "1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use traits::UserDirectory;
pub use types::{CreateUser, UpdateUser, UserId, UserRecord};
