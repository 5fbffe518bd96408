use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors surfaced by the catalog client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("product not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Rejected(String),
    #[error("actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<FrameworkError> for CatalogError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            FrameworkError::Rejected(msg) => CatalogError::Rejected(msg),
            other => CatalogError::ActorCommunication(other.to_string()),
        }
    }
}
