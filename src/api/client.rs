use crate::api::context::RequestContext;
use crate::api::models::CreateResponse;
use crate::api::resource::{ObjectApi, Resource};
use crate::error::ApiError;
use crate::utils::error_helpers::{convert_json_error, convert_request_error};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("gscloud/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_API_URL: &str = "https://api.gridscale.io";

#[derive(Debug, Clone)]
pub struct GridscaleClient {
    client: Client,
    pub base_url: String,
    user_id: String,
    token: String,
}

impl GridscaleClient {
    pub fn new(base_url: String, user_id: String, token: String) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                convert_request_error(e, "client_init", Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            })?;

        Ok(GridscaleClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id,
            token,
        })
    }

    pub fn build_request(&self, ctx: &RequestContext, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .request(method, url)
            .header("X-Auth-UserId", &self.user_id)
            .header("X-Auth-Token", &self.token);

        if let Some(timeout) = ctx.timeout() {
            request = request.timeout(timeout);
        }

        request
    }

    fn collection_path<R: Resource>() -> String {
        format!("/objects/{}", R::COLLECTION)
    }

    fn item_path<R: Resource>(id: &str) -> String {
        format!("/objects/{}/{}", R::COLLECTION, id)
    }

    async fn send(
        &self,
        ctx: &RequestContext,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<Response, ApiError> {
        tracing::debug!(endpoint, "sending request");
        let timeout = ctx
            .timeout()
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        request
            .send()
            .await
            .map_err(|e| convert_request_error(e, endpoint, timeout))
    }

    pub async fn handle_response<T>(response: Response, endpoint: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = Self::check_status(response, endpoint).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| convert_json_error(e, endpoint))
    }

    async fn check_status(response: Response, endpoint: &str) -> Result<Response, ApiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        match status.as_u16() {
            401 | 403 => Err(ApiError::Unauthorized {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                server_message: error_text,
            }),
            _ => Err(ApiError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                message: error_text,
            }),
        }
    }

    /// Unwraps `{"<key>": {...}}` into the wrapped object.
    fn unwrap_keyed(mut body: Value, key: &str, endpoint: &str) -> Result<Value, ApiError> {
        body.get_mut(key).map(Value::take).ok_or_else(|| ApiError::Http {
            status: 0,
            endpoint: endpoint.to_string(),
            message: format!("Response is missing the '{}' field", key),
        })
    }
}

#[async_trait]
impl ObjectApi for GridscaleClient {
    async fn list<R: Resource>(&self, ctx: &RequestContext) -> Result<Vec<R>, ApiError> {
        let endpoint = Self::collection_path::<R>();
        let response = self
            .send(ctx, self.build_request(ctx, Method::GET, &endpoint), &endpoint)
            .await?;
        let body: Value = Self::handle_response(response, &endpoint).await?;

        // List bodies are keyed by object UUID: {"storages": {"<uuid>": {...}}}
        let objects = match Self::unwrap_keyed(body, R::COLLECTION, &endpoint)? {
            Value::Object(map) => map,
            Value::Null => return Ok(Vec::new()),
            other => {
                return Err(ApiError::Http {
                    status: 0,
                    endpoint,
                    message: format!("Expected an object of {}, got {}", R::COLLECTION, other),
                });
            }
        };

        objects
            .into_iter()
            .map(|(_, object)| {
                serde_json::from_value(object).map_err(|e| ApiError::Http {
                    status: 0,
                    endpoint: endpoint.clone(),
                    message: format!("JSON parse error: {}", e),
                })
            })
            .collect()
    }

    async fn get<R: Resource>(&self, ctx: &RequestContext, id: &str) -> Result<R, ApiError> {
        let endpoint = Self::item_path::<R>(id);
        let response = self
            .send(ctx, self.build_request(ctx, Method::GET, &endpoint), &endpoint)
            .await?;
        let body: Value = Self::handle_response(response, &endpoint).await?;
        let object = Self::unwrap_keyed(body, R::ITEM_KEY, &endpoint)?;

        serde_json::from_value(object).map_err(|e| ApiError::Http {
            status: 0,
            endpoint,
            message: format!("JSON parse error: {}", e),
        })
    }

    async fn create<R: Resource>(
        &self,
        ctx: &RequestContext,
        request: &R::CreateRequest,
    ) -> Result<CreateResponse, ApiError> {
        let endpoint = Self::collection_path::<R>();
        let response = self
            .send(
                ctx,
                self.build_request(ctx, Method::POST, &endpoint).json(request),
                &endpoint,
            )
            .await?;
        Self::handle_response(response, &endpoint).await
    }

    async fn update<R: Resource>(
        &self,
        ctx: &RequestContext,
        id: &str,
        request: &R::UpdateRequest,
    ) -> Result<(), ApiError> {
        let endpoint = Self::item_path::<R>(id);
        let response = self
            .send(
                ctx,
                self.build_request(ctx, Method::PATCH, &endpoint).json(request),
                &endpoint,
            )
            .await?;
        Self::check_status(response, &endpoint).await?;
        Ok(())
    }

    async fn delete<R: Resource>(&self, ctx: &RequestContext, id: &str) -> Result<(), ApiError> {
        let endpoint = Self::item_path::<R>(id);
        let response = self
            .send(ctx, self.build_request(ctx, Method::DELETE, &endpoint), &endpoint)
            .await?;
        Self::check_status(response, &endpoint).await?;
        Ok(())
    }
}
