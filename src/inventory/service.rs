use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

use crate::cart::CartLedger;
use crate::clients::InventoryClient;
use crate::domain::Page;
use crate::fetch::{FetchError, PageFetcher};
use crate::inventory::{InventoryRequest, InventorySnapshot};
use crate::paging::{LoadTicket, PagingController};

/// Actor owning the inventory screen state.
///
/// Fetches run as spawned tasks and come back through the mailbox as
/// [`InventoryRequest::PageFetched`], so a completion is just another
/// serialized event; the paging controller's generation check then decides
/// whether it still applies.
pub struct InventoryService {
    receiver: mpsc::Receiver<InventoryRequest>,
    self_sender: mpsc::Sender<InventoryRequest>,
    fetcher: Arc<dyn PageFetcher>,
    paging: PagingController,
    cart: CartLedger,
    state_tx: watch::Sender<InventorySnapshot>,
}

impl InventoryService {
    pub fn new(
        buffer_size: usize,
        fetcher: Arc<dyn PageFetcher>,
        page_size: u32,
    ) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (state_tx, state_rx) = watch::channel(InventorySnapshot::default());
        let service = Self {
            receiver,
            self_sender: sender.clone(),
            fetcher,
            paging: PagingController::new(page_size),
            cart: CartLedger::new(),
            state_tx,
        };
        (service, InventoryClient::new(sender, state_rx))
    }

    #[instrument(name = "inventory_service", skip(self))]
    pub async fn run(mut self) {
        info!("InventoryService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                InventoryRequest::Load { refresh } => self.handle_load(refresh),
                InventoryRequest::LoadMore => self.handle_load_more(),
                InventoryRequest::PageFetched { ticket, result } => {
                    self.handle_page_fetched(ticket, result)
                }
                InventoryRequest::ToggleSaleMode => {
                    self.cart.toggle_sale_mode();
                    info!(
                        sale_mode = self.cart.is_sale_mode_active(),
                        "sale mode toggled"
                    );
                }
                InventoryRequest::AddToCart { item } => {
                    debug!(item_id = %item.id, "adding to cart");
                    self.cart.add(&item);
                }
                InventoryRequest::RemoveFromCart { item } => {
                    debug!(item_id = %item.id, "removing from cart");
                    self.cart.remove(&item);
                }
                InventoryRequest::SetQuantity { item, quantity } => {
                    debug!(item_id = %item.id, quantity, "setting cart quantity");
                    self.cart.set_quantity(&item, quantity);
                }
                InventoryRequest::Totals { respond_to } => {
                    let totals = self.cart.totals(self.paging.items());
                    let _ = respond_to.send(Ok(totals));
                }
                InventoryRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.current_snapshot()));
                }
                InventoryRequest::Shutdown => {
                    info!("InventoryService shutting down");
                    break;
                }
            }
            self.publish();
        }
        info!("InventoryService stopped");
    }

    #[instrument(skip(self))]
    fn handle_load(&mut self, refresh: bool) {
        match self.paging.begin_load(refresh) {
            Some(ticket) => self.spawn_fetch(ticket),
            None => debug!("load ignored, already loading"),
        }
    }

    #[instrument(skip(self))]
    fn handle_load_more(&mut self) {
        match self.paging.begin_load_more() {
            Some(ticket) => self.spawn_fetch(ticket),
            None => debug!("load_more ignored"),
        }
    }

    fn spawn_fetch(&self, ticket: LoadTicket) {
        debug!(page = ticket.page_number, "starting page fetch");
        let fetcher = Arc::clone(&self.fetcher);
        let sender = self.self_sender.clone();
        tokio::spawn(async move {
            let result = fetcher.fetch_page(ticket.page_number, ticket.page_size).await;
            // The service may already be gone on shutdown; nothing to do then.
            let _ = sender
                .send(InventoryRequest::PageFetched { ticket, result })
                .await;
        });
    }

    #[instrument(skip(self, ticket, result), fields(page = ticket.page_number))]
    fn handle_page_fetched(&mut self, ticket: LoadTicket, result: Result<Page, FetchError>) {
        match &result {
            Ok(page) => info!(
                fetched = page.items.len(),
                total = page.total_count,
                "page fetched"
            ),
            Err(e) => warn!(error = %e, "page fetch failed"),
        }
        self.paging.complete_load(ticket, result);
    }

    fn current_snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            paging: self.paging.snapshot(),
            cart: self.cart.snapshot(),
        }
    }

    fn publish(&self) {
        let snapshot = self.current_snapshot();
        self.state_tx.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }
}
