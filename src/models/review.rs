use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub name: String,            // Display name of the author
    pub rating: u8,
    pub comment: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Calendar date the review was written, e.g. `2024-03-09`.
    pub fn date(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}

/// Body of a review submission.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ReviewInput {
    pub rating: u8,
    pub comment: String,
}
