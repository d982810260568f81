use crate::ids::PageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A CMS content page (editorial content, not training data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: String,
    pub slug: String,
    /// Rich-text HTML body.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
