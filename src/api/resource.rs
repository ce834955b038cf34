use crate::api::context::RequestContext;
use crate::api::models::CreateResponse;
use crate::error::ApiError;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A remote object kind reachable under `/objects/<COLLECTION>`
pub trait Resource: DeserializeOwned + Send + 'static {
    /// Collection path segment, also the key wrapping list responses
    const COLLECTION: &'static str;
    /// Key wrapping single-object responses
    const ITEM_KEY: &'static str;
    type CreateRequest: Serialize + Send + Sync;
    type UpdateRequest: Serialize + Send + Sync;
}

/// Generic verbs offered by the remote API for any [`Resource`].
///
/// Resource-specific operators narrow these down to one kind.
#[async_trait]
pub trait ObjectApi: Send + Sync {
    async fn list<R: Resource>(&self, ctx: &RequestContext) -> Result<Vec<R>, ApiError>;

    async fn get<R: Resource>(&self, ctx: &RequestContext, id: &str) -> Result<R, ApiError>;

    async fn create<R: Resource>(
        &self,
        ctx: &RequestContext,
        request: &R::CreateRequest,
    ) -> Result<CreateResponse, ApiError>;

    async fn update<R: Resource>(
        &self,
        ctx: &RequestContext,
        id: &str,
        request: &R::UpdateRequest,
    ) -> Result<(), ApiError>;

    async fn delete<R: Resource>(&self, ctx: &RequestContext, id: &str) -> Result<(), ApiError>;
}
