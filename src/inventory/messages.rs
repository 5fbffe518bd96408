use tokio::sync::oneshot;

use crate::cart::{CartState, CartTotals};
use crate::domain::{Page, StockItem};
use crate::fetch::FetchError;
use crate::inventory::InventoryError;
use crate::paging::{LoadTicket, PagingState};

pub type ServiceResponse<T> = oneshot::Sender<Result<T, InventoryError>>;

/// Combined observable state of the inventory screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventorySnapshot {
    pub paging: PagingState,
    pub cart: CartState,
}

#[derive(Debug)]
pub enum InventoryRequest {
    /// Starts a load; with `refresh` the listing resets and restarts from
    /// page 1, superseding anything in flight.
    Load { refresh: bool },
    /// Requests the next page when idle and more pages remain.
    LoadMore,
    /// Fetch outcome routed back from a spawned fetch task. Internal, but
    /// part of the mailbox like everything else so completions are
    /// serialized with user events.
    PageFetched {
        ticket: LoadTicket,
        result: Result<Page, FetchError>,
    },
    ToggleSaleMode,
    AddToCart {
        item: StockItem,
    },
    RemoveFromCart {
        item: StockItem,
    },
    SetQuantity {
        item: StockItem,
        quantity: i64,
    },
    Totals {
        respond_to: ServiceResponse<CartTotals>,
    },
    Snapshot {
        respond_to: ServiceResponse<InventorySnapshot>,
    },
    Shutdown,
}
