//! Boilerplate generators for client methods.
//!
//! `impl_basic_client!` covers the generic resource-client wrappers
//! (constructor plus `get_*`/`delete_*`), `client_request!` the
//! oneshot request/response methods of bespoke message enums, and
//! `client_notify!` the fire-and-forget event sends. All generated
//! methods carry `#[tracing::instrument]` so requests correlate across
//! actors.

#[macro_export]
macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](&self, id: String) -> Result<Option<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.get(id).await.map_err(<$error>::from)
                }

                #[tracing::instrument(skip(self))]
                #[allow(dead_code)]
                pub async fn [<delete_ $entity_name_snake>](&self, id: String) -> Result<(), $error> {
                    tracing::debug!("Sending request");
                    self.inner.delete(id).await.map_err(<$error>::from)
                }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        $crate::impl_client_new!($client_name, $entity);
        $crate::impl_client_methods!($client_name, $entity, $error, $entity_name_snake);
    };
}

/// Request/response client method over a bespoke message enum: sends the
/// variant with a fresh oneshot channel and awaits the reply.
#[macro_export]
macro_rules! client_request {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunication("actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunication("actor dropped".to_string()))?
            }
        }
    };
}

/// Fire-and-forget client method: sends the variant and returns as soon as
/// it is enqueued. State effects become visible through the watch channel.
#[macro_export]
macro_rules! client_notify {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<(), $error_type> {
                tracing::debug!("Sending event");
                self.sender.send($request::$variant {
                    $($param,)*
                }).await.map_err(|_| <$error_type>::ActorCommunication("actor closed".to_string()))
            }
        }
    };
}
