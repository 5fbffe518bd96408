use tokio::sync::{mpsc, watch};
use tracing::{debug, instrument};

use crate::cart::CartTotals;
use crate::domain::StockItem;
use crate::inventory::{InventoryError, InventoryRequest, InventorySnapshot};
use crate::{client_notify, client_request};

/// Client for the inventory actor. Mutations are fire-and-forget events;
/// their effect shows up on the watch channel, mirroring how a UI binds to
/// the view state.
#[derive(Clone)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
    state_rx: watch::Receiver<InventorySnapshot>,
}

impl InventoryClient {
    pub fn new(
        sender: mpsc::Sender<InventoryRequest>,
        state_rx: watch::Receiver<InventorySnapshot>,
    ) -> Self {
        Self { sender, state_rx }
    }

    /// Fresh receiver for the snapshot stream.
    pub fn watch(&self) -> watch::Receiver<InventorySnapshot> {
        self.state_rx.clone()
    }

    /// Requests the next page; a no-op server-side while a load is in
    /// flight or the listing is exhausted.
    #[instrument(skip(self))]
    pub async fn load_more(&self) -> Result<(), InventoryError> {
        debug!("Sending event");
        self.send_event(InventoryRequest::LoadMore).await
    }

    #[instrument(skip(self))]
    pub async fn toggle_sale_mode(&self) -> Result<(), InventoryError> {
        debug!("Sending event");
        self.send_event(InventoryRequest::ToggleSaleMode).await
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), InventoryError> {
        debug!("Sending event");
        self.send_event(InventoryRequest::Shutdown).await
    }

    async fn send_event(&self, request: InventoryRequest) -> Result<(), InventoryError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| InventoryError::ActorCommunication("actor closed".to_string()))
    }
}

client_notify!(InventoryClient => fn load(refresh: bool) as InventoryRequest::Load, Error = InventoryError);
client_notify!(InventoryClient => fn add_to_cart(item: StockItem) as InventoryRequest::AddToCart, Error = InventoryError);
client_notify!(InventoryClient => fn remove_from_cart(item: StockItem) as InventoryRequest::RemoveFromCart, Error = InventoryError);
client_notify!(InventoryClient => fn set_quantity(item: StockItem, quantity: i64) as InventoryRequest::SetQuantity, Error = InventoryError);

client_request!(InventoryClient => fn totals() -> CartTotals as InventoryRequest::Totals, Error = InventoryError);
client_request!(InventoryClient => fn snapshot() -> InventorySnapshot as InventoryRequest::Snapshot, Error = InventoryError);
