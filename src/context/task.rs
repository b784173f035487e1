use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Format used for `created_at`. Minute precision is enough for a to-do list.
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub created_at: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a pending task stamped with the given creation time.
    pub fn new(id: u32, description: impl Into<String>, created_at: DateTime<Local>) -> Self {
        Self {
            id,
            description: description.into(),
            created_at: created_at.format(CREATED_AT_FORMAT).to_string(),
            completed: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }
}
