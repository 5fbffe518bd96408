//! Inventory screen core: one actor owns the paging controller and the
//! sale cart, serializes every mutation through its mailbox and publishes
//! immutable snapshots over a watch channel.

pub mod error;
mod messages;
mod service;

pub use error::*;
pub use messages::*;
pub use service::*;
