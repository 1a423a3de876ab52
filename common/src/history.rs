use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Key under which the serialized history array is stored.
pub const HISTORY_KEY: &str = "aliasHistory";

/// A single alias the user chose to keep.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub alias: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(alias: impl Into<String>) -> Self {
        Self::at(alias, Utc::now())
    }

    pub fn at(alias: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            alias: alias.into(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_key_matches_stored_name() {
        assert_eq!(HISTORY_KEY, "aliasHistory");
    }
}
