//! Error taxonomy for the catalog client core.
//!
//! Three propagation policies apply depending on where a [`CatalogError`]
//! surfaces:
//!
//! - a failed *collection load* propagates as `Err` to the caller, which is
//!   expected to block the view and offer a manual retry;
//! - a failed *augmentation* fetch is recovered inside the pipeline, the
//!   affected row degrades to zeroed statistics (see [`crate::augment`]);
//! - a failed *relation call* is recorded in the reconcile outcome and the
//!   batch continues (see [`crate::reconcile`]).
//!
//! Nothing in this crate retries automatically.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unauthorized - please login again")]
    Unauthorized,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
