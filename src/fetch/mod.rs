//! The paged-fetch collaborator boundary.
//!
//! The paging controller never talks to a transport directly; it is handed
//! a [`PageFetcher`] at construction and everything behind that trait
//! (HTTP, local catalog, test script) is somebody else's problem.

// The wire adapter belongs to whoever owns the transport; nothing in the
// in-process demo reaches it.
#[allow(dead_code)]
pub mod wire;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Page;

/// Flat fetch failure. Network, deserialization and declared business
/// failures all collapse into one message; callers surface it verbatim and
/// retry by re-issuing the load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct FetchError(pub String);

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Provider of inventory pages. Page numbers start at 1.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, page_number: u32, page_size: u32) -> Result<Page, FetchError>;
}
