/// Core traits for Roster
use crate::error::Result;
use crate::types::{CreateUser, UpdateUser, UserId, UserRecord};
use async_trait::async_trait;

/// Remote user-directory service.
///
/// The directory is the single source of truth for the user collection.
/// Implementers issue the network requests; consumers (notably the list
/// view) never mutate the collection locally and re-fetch after every
/// mutation instead.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch the full user collection, in server order.
    ///
    /// # Errors
    /// Returns an error if the request fails or the payload is malformed.
    async fn list_users(&self) -> Result<Vec<UserRecord>>;

    /// Fetch a single user by id.
    ///
    /// # Errors
    /// Returns an error if the request fails or the user does not exist.
    async fn get_user(&self, id: UserId) -> Result<UserRecord>;

    /// Create a new user. The directory assigns the id.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    async fn create_user(&self, user: &CreateUser) -> Result<UserRecord>;

    /// Replace an existing user.
    ///
    /// # Errors
    /// Returns an error if the request fails or the user does not exist.
    async fn update_user(&self, id: UserId, user: &UpdateUser) -> Result<UserRecord>;

    /// Delete one user by id. The response body, if any, is not interpreted.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    async fn delete_user(&self, id: UserId) -> Result<()>;
}
