use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimal employee record; only what the roster lookup needs to display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    pub fn new_with_id(id: String, display_name: String) -> Self {
        Self {
            id,
            display_name,
            created_at: Utc::now(),
        }
    }
}
