//! HTTP client for the user-directory service.

use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use roster_core::{CreateUser, RosterError, UpdateUser, UserDirectory, UserId, UserRecord};
use std::time::Duration;
use tracing::debug;

/// Client for a remote user-directory service.
///
/// The directory holds the authoritative user collection; this client only
/// issues requests against it and never caches or locally edits results.
///
/// # Example
///
/// ```ignore
/// use roster_directory_client::{DirectoryClient, DirectoryConfig};
///
/// let config = DirectoryConfig::new("https://api.example.com");
/// let client = DirectoryClient::new(config)?;
///
/// let users = client.list_users().await?;
/// println!("Directory holds {} users", users.len());
/// ```
#[derive(Debug)]
pub struct DirectoryClient {
    http: Client,
    base_url: String,
}

impl DirectoryClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails up front when the base URL is unset or invalid; nothing is ever
    /// requested against an unconfigured URL.
    pub fn new(config: DirectoryConfig) -> Result<Self> {
        let base_url = config.normalized_url()?;

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("roster/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(DirectoryError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the directory base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full user collection, in server order.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>> {
        let url = format!("{}/users", self.base_url);
        debug!(url = %url, "Fetching user collection");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                DirectoryError::Unreachable(e.to_string())
            } else {
                DirectoryError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let users: Vec<UserRecord> = response.json().await.map_err(|e| {
                DirectoryError::Parse(format!("Failed to parse user list: {}", e))
            })?;

            debug!(users = users.len(), "Fetched user collection");
            Ok(users)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(DirectoryError::Status {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Fetch a single user by id.
    pub async fn get_user(&self, id: UserId) -> Result<UserRecord> {
        let url = format!("{}/user/{}", self.base_url, id);
        debug!(url = %url, user_id = %id, "Fetching user");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let user: UserRecord = response.json().await.map_err(|e| {
                DirectoryError::Parse(format!("Failed to parse user response: {}", e))
            })?;

            Ok(user)
        } else if status.as_u16() == 404 {
            Err(DirectoryError::Status {
                status: 404,
                message: format!("User not found: {}", id),
            })
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(DirectoryError::Status {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Create a new user. The directory assigns the id.
    pub async fn create_user(&self, user: &CreateUser) -> Result<UserRecord> {
        let url = format!("{}/user", self.base_url);
        debug!(url = %url, username = %user.username, "Creating user");

        let response = self.http.post(&url).json(user).send().await?;
        let status = response.status();

        if status.is_success() {
            let created: UserRecord = response.json().await.map_err(|e| {
                DirectoryError::Parse(format!("Failed to parse created user: {}", e))
            })?;

            debug!(user_id = %created.id, "User created");
            Ok(created)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(DirectoryError::Status {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Replace an existing user.
    pub async fn update_user(&self, id: UserId, user: &UpdateUser) -> Result<UserRecord> {
        let url = format!("{}/user/{}", self.base_url, id);
        debug!(url = %url, user_id = %id, "Updating user");

        let response = self.http.put(&url).json(user).send().await?;
        let status = response.status();

        if status.is_success() {
            let updated: UserRecord = response.json().await.map_err(|e| {
                DirectoryError::Parse(format!("Failed to parse updated user: {}", e))
            })?;

            Ok(updated)
        } else if status.as_u16() == 404 {
            Err(DirectoryError::Status {
                status: 404,
                message: format!("User not found: {}", id),
            })
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(DirectoryError::Status {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Delete one user by id.
    ///
    /// The response body is not interpreted; any success status counts as
    /// deleted.
    pub async fn delete_user(&self, id: UserId) -> Result<()> {
        let url = format!("{}/user/{}", self.base_url, id);
        debug!(url = %url, user_id = %id, "Deleting user");

        let response = self.http.delete(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                DirectoryError::Unreachable(e.to_string())
            } else {
                DirectoryError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            debug!(user_id = %id, "User deleted");
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(DirectoryError::Status {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

#[async_trait]
impl UserDirectory for DirectoryClient {
    async fn list_users(&self) -> roster_core::Result<Vec<UserRecord>> {
        Ok(DirectoryClient::list_users(self).await?)
    }

    async fn get_user(&self, id: UserId) -> roster_core::Result<UserRecord> {
        Ok(DirectoryClient::get_user(self, id).await?)
    }

    async fn create_user(&self, user: &CreateUser) -> roster_core::Result<UserRecord> {
        Ok(DirectoryClient::create_user(self, user).await?)
    }

    async fn update_user(&self, id: UserId, user: &UpdateUser) -> roster_core::Result<UserRecord> {
        Ok(DirectoryClient::update_user(self, id, user).await?)
    }

    async fn delete_user(&self, id: UserId) -> roster_core::Result<()> {
        DirectoryClient::delete_user(self, id)
            .await
            .map_err(RosterError::from)
    }
}
