//! # Mock Framework
//!
//! Utilities for testing clients and the inventory service in isolation.
//!
//! [`create_mock_client`] yields a resource client whose actor side is a
//! plain receiver the test controls; the `expect_*` helpers assert on the
//! requests arriving there and let the test script the responses.
//! [`ScriptedFetcher`] and [`GatedFetcher`] play the fetch collaborator
//! for paging tests, the latter holding every fetch until the test
//! releases it so in-flight ordering can be forced deterministically.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot, Semaphore};

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use crate::domain::Page;
use crate::fetch::{FetchError, PageFetcher};

/// Creates a mock client and the receiver for asserting requests.
///
/// Instead of spinning up a full `ResourceActor`, tests inspect the
/// messages on `receiver` and answer through the captured oneshot senders,
/// simulating success, failure or delay deterministically.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Asserts that the next message is a Create request.
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::CreateParams,
    oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Asserts that the next message is a List request.
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Fetcher that answers each call with the next scripted outcome.
pub struct ScriptedFetcher {
    responses: Mutex<VecDeque<Result<Page, FetchError>>>,
    calls: AtomicU32,
}

impl ScriptedFetcher {
    pub fn new(responses: Vec<Result<Page, FetchError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_response(&self) -> Result<Page, FetchError> {
        self.responses
            .lock()
            .expect("scripted responses poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::new("no scripted page")))
    }
}

#[async_trait]
impl PageFetcher for ScriptedFetcher {
    async fn fetch_page(&self, _page_number: u32, _page_size: u32) -> Result<Page, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.next_response()
    }
}

/// Like [`ScriptedFetcher`], but each fetch blocks until the test calls
/// [`GatedFetcher::release`]. Permits are granted in call order, so the
/// test decides exactly which in-flight fetch completes first.
pub struct GatedFetcher {
    inner: ScriptedFetcher,
    gate: Semaphore,
}

impl GatedFetcher {
    pub fn new(responses: Vec<Result<Page, FetchError>>) -> Self {
        Self {
            inner: ScriptedFetcher::new(responses),
            gate: Semaphore::new(0),
        }
    }

    pub fn release(&self) {
        self.gate.add_permits(1);
    }

    pub fn calls(&self) -> u32 {
        self.inner.calls()
    }
}

#[async_trait]
impl PageFetcher for GatedFetcher {
    async fn fetch_page(&self, _page_number: u32, _page_size: u32) -> Result<Page, FetchError> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|_| FetchError::new("gate closed"))?;
        permit.forget();
        self.inner.next_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductCreate;
    use crate::domain::Product;

    #[tokio::test]
    async fn mock_client_round_trips_a_create() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let create_task = tokio::spawn(async move {
            let params = ProductCreate {
                sku: "BP-TEST".to_string(),
                name: "Test".to_string(),
                variant: None,
                unit_price_minor: 1_000,
                unit_cost_minor: None,
                stock_qty: 1,
                min_stock: 0,
            };
            client.create(params).await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name, "Test");
        responder.send(Ok("product_1".to_string())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok("product_1".to_string()));
    }

    #[tokio::test]
    async fn scripted_fetcher_exhausts_its_script() {
        let fetcher = ScriptedFetcher::new(vec![Ok(Page::new(Vec::new(), 0))]);
        assert!(fetcher.fetch_page(1, 10).await.is_ok());
        assert!(fetcher.fetch_page(2, 10).await.is_err());
        assert_eq!(fetcher.calls(), 2);
    }
}
