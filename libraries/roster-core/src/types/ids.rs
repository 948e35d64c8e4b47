/// ID types for Roster entities
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// User identifier
///
/// Opaque to the client: ids are assigned by the directory service and are
/// never invented or mutated locally. Stable across requests within one
/// snapshot of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a user ID from its wire representation
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_display_matches_wire_value() {
        let id = UserId::new(42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn user_id_parses_from_string() {
        let id: UserId = "7".parse().expect("numeric id");
        assert_eq!(id, UserId::new(7));
    }

    #[test]
    fn user_id_rejects_non_numeric() {
        assert!("abc".parse::<UserId>().is_err());
    }

    #[test]
    fn user_id_serializes_transparently() {
        let id = UserId::new(3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");

        let parsed: UserId = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, id);
    }
}
