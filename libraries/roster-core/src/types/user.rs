/// User domain types
use super::UserId;
use serde::{Deserialize, Serialize};

/// One user as known to the directory service.
///
/// Instances are deserialized wholesale from a directory snapshot and
/// discarded wholesale on the next snapshot; the client holds no partial or
/// derived copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique identifier, assigned by the directory
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Login name
    pub username: String,

    /// Email address
    pub email: String,
}

/// Request body for creating a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name
    pub name: String,

    /// Login name
    pub username: String,

    /// Email address
    pub email: String,
}

/// Request body for replacing an existing user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    /// Display name
    pub name: String,

    /// Login name
    pub username: String,

    /// Email address
    pub email: String,
}
