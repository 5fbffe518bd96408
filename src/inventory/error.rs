use thiserror::Error;

/// Errors surfaced by the inventory client. Fetch failures are not errors
/// at this level; they land in the paging snapshot's `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("actor communication error: {0}")]
    ActorCommunication(String),
}
