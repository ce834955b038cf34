use crate::api::context::RequestContext;
use crate::api::models::{CreateResponse, Storage, StorageCreateRequest, StorageUpdateRequest};
use crate::api::resource::ObjectApi;
use crate::error::ApiError;

/// Storage-only view of the API client
pub struct StorageOperator<'a, C: ObjectApi> {
    client: &'a C,
}

impl<'a, C: ObjectApi> StorageOperator<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Storage>, ApiError> {
        self.client.list::<Storage>(ctx).await
    }

    pub async fn get(&self, ctx: &RequestContext, id: &str) -> Result<Storage, ApiError> {
        self.client.get::<Storage>(ctx, id).await
    }

    pub async fn create(
        &self,
        ctx: &RequestContext,
        request: &StorageCreateRequest,
    ) -> Result<CreateResponse, ApiError> {
        self.client.create::<Storage>(ctx, request).await
    }

    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: &str,
        request: &StorageUpdateRequest,
    ) -> Result<(), ApiError> {
        self.client.update::<Storage>(ctx, id, request).await
    }

    pub async fn delete(&self, ctx: &RequestContext, id: &str) -> Result<(), ApiError> {
        self.client.delete::<Storage>(ctx, id).await
    }
}
