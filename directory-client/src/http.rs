//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{Employee, EmployeeCreate, EmployeeCreated, ErrorBody, HealthResponse};

use crate::{ClientConfig, ClientError, ClientResult, EmployeeApi};

/// HTTP client for making network requests to the directory API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(error_from_body(status, &text));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

/// Map a non-2xx answer to a [`ClientError`], reading `{error, code, details}`
/// when the body has that shape.
fn error_from_body(status: StatusCode, text: &str) -> ClientError {
    let body = serde_json::from_str::<ErrorBody>(text).ok();
    let message = body
        .as_ref()
        .map(|b| b.error.clone())
        .unwrap_or_else(|| text.to_string());

    match status {
        StatusCode::BAD_REQUEST => {
            let fields = body
                .as_ref()
                .and_then(|b| b.details.as_ref())
                .and_then(|d| d.get("fields"))
                .and_then(|v| v.as_array())
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|v| v.as_str().map(String::from))
                        .collect()
                })
                .unwrap_or_default();
            ClientError::Validation {
                message,
                code: body.as_ref().and_then(ErrorBody::error_code),
                fields,
            }
        }
        StatusCode::CONFLICT => ClientError::Conflict(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        _ => ClientError::Server {
            status: status.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl EmployeeApi for HttpClient {
    async fn health(&self) -> ClientResult<HealthResponse> {
        self.get("/health").await
    }

    async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.get("/employees").await
    }

    async fn create_employee(&self, payload: &EmployeeCreate) -> ClientResult<EmployeeCreated> {
        tracing::debug!(id = ?payload.id, "POST /employees");
        self.post("/employees", payload).await
    }
}
