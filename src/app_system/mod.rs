//! System orchestration, startup, and shutdown logic.

pub mod stock_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use stock_system::*;
