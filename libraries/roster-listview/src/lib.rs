//! Roster List View
//!
//! Keeps an on-screen table synchronized with the directory service's
//! current user collection, and lets the operator trigger a
//! delete-and-resync for any row.
//!
//! The view owns a single **collection snapshot**: the complete user list
//! as of the last successful list request. The snapshot is replaced
//! wholesale on every successful load — never patched, merged, or edited
//! locally. After a delete the view always re-fetches the full list, so
//! the table reflects the directory's authoritative state rather than a
//! locally-guessed one.
//!
//! # Example
//!
//! ```ignore
//! use roster_listview::ListView;
//!
//! let mut view = ListView::new(client);
//! view.activate().await?;
//! for row in view.rows() {
//!     println!("{} {} {}", row.name, row.username, row.email);
//! }
//! view.delete(some_id).await?;
//! // view.rows() now reflects the directory's post-delete state
//! ```

mod row;
mod view;

// Public exports
pub use row::Row;
pub use view::{ListView, LoadState};
