//! # HTTP client for the REST backend
//!
//! [`ApiClient`] owns a shared [`reqwest::Client`] and the configured base URL. Entity
//! operations hang off two cheap handles, [`UserApi`] and [`ProjectApi`], obtained from
//! [`ApiClient::users`] and [`ApiClient::projects`]. Every request carries JSON
//! `Content-Type`/`Accept` headers and maps to exactly one round trip.
//!
//! Non-2xx answers become [`ApiError::Status`] with the backend's `detail` message when
//! the body has one; transport failures become [`ApiError::Network`].

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Project, ProjectCreate, ProjectUpdate, User, UserCreate, UserUpdate};

const JSON: &str = "application/json";
const USERS_PATH: &str = "/api/v1/users";
const PROJECTS_PATH: &str = "/api/v1/projects";

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
}

/// HTTP client for communicating with the backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

/// Two clients are interchangeable when they talk to the same backend.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    /// Reuse an existing `reqwest` client (connection pool, proxies, ...).
    ///
    /// The base URL is normalized again, so a config deserialized with a trailing
    /// slash still yields single-slash request URLs.
    pub fn with_http(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            config: ApiConfig::new(config.base_url()),
        }
    }

    /// Client for the base URL resolved by [`ApiConfig::from_env`].
    pub fn from_env() -> Self {
        Self::new(&ApiConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub fn users(&self) -> UserApi {
        UserApi {
            client: self.clone(),
        }
    }

    pub fn projects(&self) -> ProjectApi {
        ProjectApi {
            client: self.clone(),
        }
    }

    /// Liveness check
    #[tracing::instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/health", &[]).await
    }

    /// Service name and version reported by the backend root
    #[tracing::instrument(skip(self))]
    pub async fn service_info(&self) -> Result<ServiceInfo, ApiError> {
        self.get_json("/", &[]).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.config.url(path))
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = error_detail(&body);
        tracing::debug!(status = status.as_u16(), ?detail, "request rejected");
        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let mut builder = self.request(Method::GET, path);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let response = self.send(builder).await?;
        decode(response).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(method, path).json(body)).await?;
        decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull `detail` out of an error body. Validation errors carry a list, kept as JSON.
fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => match value.get("detail")? {
            serde_json::Value::String(detail) => Some(detail.clone()),
            other => Some(other.to_string()),
        },
        Err(_) => Some(body.to_string()),
    }
}

/// User endpoints under `/api/v1/users`.
#[derive(Clone, Debug, PartialEq)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    #[tracing::instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<User>, ApiError> {
        self.client.get_json(USERS_PATH, &[]).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<User, ApiError> {
        self.client.get_json(&format!("{USERS_PATH}/{id}"), &[]).await
    }

    /// The password is forwarded as-is; hashing is the backend's job.
    #[tracing::instrument(skip(self, payload), fields(email = %payload.email))]
    pub async fn create(&self, payload: &UserCreate) -> Result<User, ApiError> {
        self.client
            .send_json(Method::POST, USERS_PATH, payload)
            .await
    }

    #[tracing::instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: &UserUpdate) -> Result<User, ApiError> {
        self.client
            .send_json(Method::PUT, &format!("{USERS_PATH}/{id}"), patch)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("{USERS_PATH}/{id}")).await
    }
}

/// Project endpoints under `/api/v1/projects`.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectApi {
    client: ApiClient,
}

impl ProjectApi {
    /// All projects, or only those owned by `owner_id`.
    #[tracing::instrument(skip(self))]
    pub async fn get_all(&self, owner_id: Option<i64>) -> Result<Vec<Project>, ApiError> {
        let query: Vec<(&str, String)> = owner_id
            .map(|id| ("owner_id", id.to_string()))
            .into_iter()
            .collect();
        self.client.get_json(PROJECTS_PATH, &query).await
    }

    pub async fn get_by_owner(&self, owner_id: i64) -> Result<Vec<Project>, ApiError> {
        self.get_all(Some(owner_id)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Project, ApiError> {
        self.client
            .get_json(&format!("{PROJECTS_PATH}/{id}"), &[])
            .await
    }

    #[tracing::instrument(skip(self, payload), fields(name = %payload.name, owner_id = payload.owner_id))]
    pub async fn create(&self, payload: &ProjectCreate) -> Result<Project, ApiError> {
        self.client
            .send_json(Method::POST, PROJECTS_PATH, payload)
            .await
    }

    #[tracing::instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: &ProjectUpdate) -> Result<Project, ApiError> {
        self.client
            .send_json(Method::PUT, &format!("{PROJECTS_PATH}/{id}"), patch)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("{PROJECTS_PATH}/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_from_fastapi_body() {
        assert_eq!(
            error_detail(r#"{"detail":"Project with id 5 not found"}"#).as_deref(),
            Some("Project with id 5 not found")
        );
        assert_eq!(
            error_detail(r#"{"detail":[{"loc":["body","email"]}]}"#).as_deref(),
            Some(r#"[{"loc":["body","email"]}]"#)
        );
        assert_eq!(error_detail("Bad Gateway").as_deref(), Some("Bad Gateway"));
        assert_eq!(error_detail(r#"{"error":"x"}"#), None);
        assert_eq!(error_detail(""), None);
    }

    #[test]
    fn test_handles_share_base_url() {
        let client = ApiClient::new(&ApiConfig::new("http://backend:8000/"));
        assert_eq!(client.base_url(), "http://backend:8000");
        assert_eq!(client.users().client.base_url(), "http://backend:8000");
        assert_eq!(client.projects().client.base_url(), "http://backend:8000");
    }

    #[test]
    fn test_request_url_has_single_slash() {
        let config: ApiConfig = toml::from_str(r#"base_url = "http://backend:8000/""#).unwrap();
        let client = ApiClient::with_http(reqwest::Client::new(), &config);
        assert_eq!(client.base_url(), "http://backend:8000");

        let request = client.request(Method::GET, USERS_PATH).build().unwrap();
        assert_eq!(request.url().as_str(), "http://backend:8000/api/v1/users");
        assert_eq!(request.headers()[ACCEPT], JSON);
    }

    #[test]
    fn test_clients_compare_by_backend() {
        let a = ApiClient::new(&ApiConfig::new("http://backend:8000"));
        let b = ApiClient::new(&ApiConfig::new("http://backend:8000/"));
        let c = ApiClient::new(&ApiConfig::new("http://other:8000"));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.projects(), b.projects());
    }

    #[test]
    fn test_health_status() {
        let health: HealthStatus = serde_json::from_str(r#"{"status":"healthy"}"#).unwrap();
        assert!(health.is_healthy());
    }
}
