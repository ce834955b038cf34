//! Storage workflows, including the guarded capacity update

use crate::api::context::RequestContext;
use crate::api::models::{CreateResponse, Storage, StorageCreateRequest, StorageUpdateRequest};
use crate::api::resource::ObjectApi;
use crate::core::guard::{GuardDecision, GuardPolicy, STORAGE_CAPACITY_SHRINK};
use crate::core::operators::StorageOperator;
use crate::core::runtime::Runtime;
use crate::error::{AppError, CliError};

/// Changes requested by `storage set`. `None` leaves the remote value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorageChanges {
    pub name: Option<String>,
    pub capacity: Option<u32>,
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The request was sent as shown
    Applied(StorageUpdateRequest),
    /// Nothing was sent
    Blocked { warning: String },
}

pub struct StorageService<'a, C: ObjectApi> {
    operator: StorageOperator<'a, C>,
    ctx: RequestContext,
    capacity_guard: GuardPolicy,
}

impl<'a, C: ObjectApi> StorageService<'a, C> {
    pub fn new(runtime: &'a Runtime<C>) -> Self {
        Self {
            operator: runtime.storage_operator(),
            ctx: RequestContext::background(),
            capacity_guard: STORAGE_CAPACITY_SHRINK,
        }
    }

    pub async fn list(&self) -> Result<Vec<Storage>, AppError> {
        Ok(self.operator.list(&self.ctx).await?)
    }

    pub async fn create(&self, request: &StorageCreateRequest) -> Result<CreateResponse, AppError> {
        Ok(self.operator.create(&self.ctx, request).await?)
    }

    pub async fn remove(&self, id: &str) -> Result<(), AppError> {
        Ok(self.operator.delete(&self.ctx, id).await?)
    }

    /// Apply a partial update.
    ///
    /// A capacity change fetches the current storage first; shrinking it
    /// without `force` returns [`UpdateOutcome::Blocked`] and sends nothing.
    /// A rename alone never reads remote state.
    pub async fn update(&self, id: &str, changes: StorageChanges) -> Result<UpdateOutcome, AppError> {
        let request = StorageUpdateRequest {
            name: changes.name,
            capacity: changes.capacity,
        };
        if request.is_empty() {
            return Err(CliError::InvalidArguments(
                "Nothing to change. Use --name and/or --capacity".to_string(),
            )
            .into());
        }

        if let Some(capacity) = request.capacity {
            let current = self.operator.get(&self.ctx, id).await?;
            tracing::debug!(id, current = current.capacity, requested = capacity, "checking capacity change");

            let decision = self.capacity_guard.evaluate(
                i64::from(current.capacity),
                i64::from(capacity),
                changes.force,
            );
            if let GuardDecision::Blocked { warning } = decision {
                return Ok(UpdateOutcome::Blocked { warning });
            }
        }

        self.operator.update(&self.ctx, id, &request).await?;
        Ok(UpdateOutcome::Applied(request))
    }
}
