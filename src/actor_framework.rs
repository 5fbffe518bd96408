//! Generic resource actor.
//!
//! One actor task owns a keyed store of entities and drains a typed
//! request mailbox; callers talk to it through a cloneable
//! [`ResourceClient`]. This is what gives every store in the system a
//! single logical owner: all mutation is serialized through the mailbox
//! and reads are consistent snapshots.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

/// Domain entity managed by a [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    fn id(&self) -> &Self::Id;

    /// Builds the full entity from a freshly minted id and the creation
    /// parameters. Hooks return a plain message on rejection; the actor
    /// wraps it into [`FrameworkError::Rejected`].
    fn from_create(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    fn on_create(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;

    fn on_delete(&self) -> Result<(), String> {
        Ok(())
    }

    /// Handles a domain-specific action beyond plain CRUD.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameworkError {
    #[error("entity not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Rejected(String),
    #[error("actor closed")]
    ActorClosed,
    #[error("actor dropped")]
    ActorDropped,
}

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient { sender })
    }

    /// Drains the mailbox until every client is dropped.
    pub async fn run(mut self) {
        info!("resource actor starting");
        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }
        info!("resource actor stopped");
    }

    fn handle(&mut self, msg: ResourceRequest<T>) {
        match msg {
            ResourceRequest::Create { params, respond_to } => {
                let id = (self.next_id_fn)();
                debug!(id = %id, "creating entity");
                match T::from_create(id, params) {
                    Ok(mut item) => {
                        if let Err(e) = item.on_create() {
                            let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                            return;
                        }
                        let id = item.id().clone();
                        self.store.insert(id.clone(), item);
                        let _ = respond_to.send(Ok(id));
                    }
                    Err(e) => {
                        let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                    }
                }
            }
            ResourceRequest::Get { id, respond_to } => {
                let item = self.store.get(&id).cloned();
                let _ = respond_to.send(Ok(item));
            }
            ResourceRequest::List { respond_to } => {
                let items = self.store.values().cloned().collect();
                let _ = respond_to.send(Ok(items));
            }
            ResourceRequest::Update {
                id,
                patch,
                respond_to,
            } => {
                if let Some(item) = self.store.get_mut(&id) {
                    if let Err(e) = item.on_update(patch) {
                        let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                        return;
                    }
                    let _ = respond_to.send(Ok(item.clone()));
                } else {
                    let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                }
            }
            ResourceRequest::Delete { id, respond_to } => {
                if let Some(item) = self.store.get(&id) {
                    if let Err(e) = item.on_delete() {
                        let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                        return;
                    }
                    self.store.remove(&id);
                    let _ = respond_to.send(Ok(()));
                } else {
                    let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                }
            }
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            } => {
                if let Some(item) = self.store.get_mut(&id) {
                    let result = item
                        .handle_action(action)
                        .map_err(FrameworkError::Rejected);
                    let _ = respond_to.send(result);
                } else {
                    let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                }
            }
        }
    }
}

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    /// Wraps a raw sender. Mostly useful for tests that want to script the
    /// actor side of the conversation.
    #[allow(dead_code)]
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        make: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            patch,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProductCreate, StockAction, StockActionResult};
    use crate::domain::Product;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    fn spawn_catalog_actor() -> ResourceClient<Product> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            format!("product_{id}")
        };
        let (actor, client) = ResourceActor::<Product>::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    fn propolis(name: &str, qty: u32) -> ProductCreate {
        ProductCreate {
            sku: format!("BP-{}", name.to_uppercase()),
            name: name.to_string(),
            variant: None,
            unit_price_minor: 250_000,
            unit_cost_minor: Some(120_000),
            stock_qty: qty,
            min_stock: 2,
        }
    }

    #[tokio::test]
    async fn create_get_and_act_on_an_entity() {
        let client = spawn_catalog_actor();

        let id = client.create(propolis("gold", 10)).await.unwrap();
        assert_eq!(id, "product_1");

        let product = client.get(id.clone()).await.unwrap().unwrap();
        assert_eq!(product.name, "gold");
        assert_eq!(product.stock_qty, 10);

        let result = client
            .perform_action(id.clone(), StockAction::AdjustStock(-4))
            .await
            .unwrap();
        assert_eq!(result, StockActionResult::Adjusted(6));

        // Draining below zero is rejected and leaves the stock untouched.
        let err = client
            .perform_action(id.clone(), StockAction::AdjustStock(-10))
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::Rejected(_)));
        let product = client.get(id).await.unwrap().unwrap();
        assert_eq!(product.stock_qty, 6);
    }

    #[tokio::test]
    async fn unknown_ids_report_not_found() {
        let client = spawn_catalog_actor();

        assert_eq!(client.get("nope".to_string()).await.unwrap(), None);
        let err = client
            .perform_action("nope".to_string(), StockAction::CheckStock)
            .await
            .unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("nope".to_string()));
    }

    #[tokio::test]
    async fn list_returns_every_stored_entity() {
        let client = spawn_catalog_actor();

        client.create(propolis("gold", 5)).await.unwrap();
        client.create(propolis("silver", 3)).await.unwrap();

        let mut names: Vec<String> = client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        names.sort();
        assert_eq!(names, ["gold", "silver"]);
    }
}
