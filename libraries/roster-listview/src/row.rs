//! Renderable rows derived from the collection snapshot.

use roster_core::{UserId, UserRecord};

/// One table row, carrying the display values and the id that every
/// row action targets.
///
/// Actions are keyed strictly by id, never by row position: reordering
/// the input data must not change which record an action targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Id of the record this row (and its actions) refers to
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Login name
    pub username: String,
    /// Email address
    pub email: String,
}

impl Row {
    pub(crate) fn from_record(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            username: record.username.clone(),
            email: record.email.clone(),
        }
    }

    /// Navigation target for the read-only view page, handled outside
    /// this crate.
    pub fn view_target(&self) -> String {
        format!("/viewuser/{}", self.id)
    }

    /// Navigation target for the edit page, handled outside this crate.
    pub fn edit_target(&self) -> String {
        format!("/edituser/{}", self.id)
    }
}
