//! The list view and its synchronization contract.

use crate::row::Row;
use roster_core::{Result, RosterError, UserDirectory, UserId, UserRecord};
use tracing::{debug, warn};

/// Load state of the view.
///
/// The only transitions are `Idle -> Loading -> (Loaded | LoadFailed)`,
/// with a delete re-entering `Loading` for the follow-up list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No load attempted yet
    Idle,
    /// A list request is in flight
    Loading,
    /// The snapshot reflects the last successful list request
    Loaded,
    /// The last list request failed; the previous snapshot is retained
    LoadFailed,
}

/// List view over the directory's user collection.
///
/// Owns the collection snapshot: the complete user list as of the last
/// successful list request, replaced wholesale on every load. The
/// directory is the single source of truth; the view never edits the
/// snapshot locally.
///
/// One logical thread of control per view: the `&mut self` receivers
/// sequence all network interaction, so no two requests from the same
/// view ever run concurrently.
pub struct ListView<D> {
    directory: D,
    snapshot: Vec<UserRecord>,
    state: LoadState,
    activated: bool,
}

impl<D: UserDirectory> ListView<D> {
    /// Create a view with an empty snapshot.
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            snapshot: Vec::new(),
            state: LoadState::Idle,
            activated: false,
        }
    }

    /// Initial load, invoked once when the view becomes active.
    ///
    /// Safe against double invocation (strict re-render environments
    /// call lifecycle hooks twice): only the first call issues a
    /// request.
    pub async fn activate(&mut self) -> Result<()> {
        if self.activated {
            debug!("View already activated, skipping initial load");
            return Ok(());
        }
        self.activated = true;

        self.reload().await
    }

    /// Fetch the full collection and replace the snapshot with it.
    ///
    /// On failure the snapshot is left exactly as it was: replace on
    /// success only, never a partial merge.
    pub async fn reload(&mut self) -> Result<()> {
        self.state = LoadState::Loading;

        match self.directory.list_users().await {
            Ok(users) => {
                debug!(users = users.len(), "Snapshot replaced");
                self.snapshot = users;
                self.state = LoadState::Loaded;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "List request failed, snapshot retained");
                self.state = LoadState::LoadFailed;
                Err(err)
            }
        }
    }

    /// Delete one user, then resync the snapshot from the directory.
    ///
    /// `id` must reference a record currently in the snapshot; the view
    /// only exposes delete actions for rows it has rendered.
    ///
    /// The follow-up list request is issued even when the delete request
    /// itself failed, so the table never sits one step out of sync with
    /// intent. The delete error, if any, is returned after the resync
    /// completes.
    pub async fn delete(&mut self, id: UserId) -> Result<()> {
        if !self.snapshot.iter().any(|u| u.id == id) {
            return Err(RosterError::UserNotFound(id));
        }

        let deleted = self.directory.delete_user(id).await;
        if let Err(err) = &deleted {
            warn!(user_id = %id, error = %err, "Delete failed, resyncing anyway");
        }

        let reloaded = self.reload().await;

        deleted?;
        reloaded
    }

    /// One row per snapshot record, in the order received.
    ///
    /// Pure function of the snapshot: the same snapshot always yields
    /// the same rows in the same order.
    pub fn rows(&self) -> Vec<Row> {
        self.snapshot.iter().map(Row::from_record).collect()
    }

    /// The current collection snapshot.
    pub fn snapshot(&self) -> &[UserRecord] {
        &self.snapshot
    }

    /// The current load state.
    pub fn state(&self) -> LoadState {
        self.state
    }
}
