//! In-memory [`ObjectApi`] used by unit tests to observe which calls a
//! workflow issues.

use crate::api::context::RequestContext;
use crate::api::models::CreateResponse;
use crate::api::resource::{ObjectApi, Resource};
use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Mutex;

pub(crate) fn storage_value(uuid: &str, name: &str, capacity: u32) -> Value {
    json!({
        "object_uuid": uuid,
        "name": name,
        "capacity": capacity,
        "change_time": "2020-05-04T10:11:12Z",
        "status": "active"
    })
}

#[derive(Default)]
pub(crate) struct FakeApi {
    objects: Vec<Value>,
    update_failure: Option<(u16, String)>,
    calls: Mutex<Vec<String>>,
    bodies: Mutex<Vec<Value>>,
}

impl FakeApi {
    pub(crate) fn with_storages(objects: Vec<Value>) -> Self {
        Self {
            objects,
            ..Self::default()
        }
    }

    pub(crate) fn failing_updates(mut self, status: u16, message: &str) -> Self {
        self.update_failure = Some((status, message.to_string()));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn record_body<T: serde::Serialize>(&self, body: &T) {
        self.bodies
            .lock()
            .unwrap()
            .push(serde_json::to_value(body).unwrap());
    }

    fn decode<R: Resource>(value: &Value) -> Result<R, ApiError> {
        serde_json::from_value(value.clone()).map_err(|e| ApiError::Http {
            status: 0,
            endpoint: R::COLLECTION.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ObjectApi for FakeApi {
    async fn list<R: Resource>(&self, _ctx: &RequestContext) -> Result<Vec<R>, ApiError> {
        self.record(format!("list {}", R::COLLECTION));
        self.objects.iter().map(Self::decode::<R>).collect()
    }

    async fn get<R: Resource>(&self, _ctx: &RequestContext, id: &str) -> Result<R, ApiError> {
        self.record(format!("get {}/{}", R::COLLECTION, id));
        let object = self
            .objects
            .iter()
            .find(|o| o["object_uuid"] == id)
            .ok_or_else(|| ApiError::Http {
                status: 404,
                endpoint: format!("/objects/{}/{}", R::COLLECTION, id),
                message: "object not found".to_string(),
            })?;
        Self::decode(object)
    }

    async fn create<R: Resource>(
        &self,
        _ctx: &RequestContext,
        request: &R::CreateRequest,
    ) -> Result<CreateResponse, ApiError> {
        self.record(format!("create {}", R::COLLECTION));
        self.record_body(request);
        Ok(CreateResponse {
            object_uuid: format!("new-{}", R::COLLECTION),
            request_uuid: None,
        })
    }

    async fn update<R: Resource>(
        &self,
        _ctx: &RequestContext,
        id: &str,
        request: &R::UpdateRequest,
    ) -> Result<(), ApiError> {
        self.record(format!("update {}/{}", R::COLLECTION, id));
        self.record_body(request);
        match &self.update_failure {
            Some((status, message)) => Err(ApiError::Http {
                status: *status,
                endpoint: format!("/objects/{}/{}", R::COLLECTION, id),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    async fn delete<R: Resource>(&self, _ctx: &RequestContext, id: &str) -> Result<(), ApiError> {
        self.record(format!("delete {}/{}", R::COLLECTION, id));
        Ok(())
    }
}
