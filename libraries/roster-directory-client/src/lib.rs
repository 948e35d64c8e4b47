//! Roster Directory Client
//!
//! HTTP client library for the Roster user-directory API.
//!
//! The directory service is the single source of truth for the user
//! collection. This crate only issues requests against it: callers that
//! display the collection re-fetch it after every mutation instead of
//! patching local state (see `roster-listview`).
//!
//! # Endpoints
//!
//! - `GET {base}/users` — full collection, ordered, unpaginated
//! - `GET {base}/user/{id}` — one record
//! - `POST {base}/user` — create
//! - `PUT {base}/user/{id}` — replace
//! - `DELETE {base}/user/{id}` — delete (response body not interpreted)
//!
//! # Example
//!
//! ```ignore
//! use roster_directory_client::{DirectoryClient, DirectoryConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DirectoryConfig::new("https://api.example.com");
//!     let client = DirectoryClient::new(config)?;
//!
//!     let users = client.list_users().await?;
//!     println!("Directory holds {} users", users.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;

// Re-export main types
pub use client::DirectoryClient;
pub use config::DirectoryConfig;
pub use error::{DirectoryError, Result};
