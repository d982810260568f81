use crate::ids::UploadId;
use serde::{Deserialize, Serialize};

/// An uploaded media file referenced by exercises and pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upload {
    pub id: UploadId,
    pub filename: String,
    /// Public URL served by the backend.
    pub url: String,
}
