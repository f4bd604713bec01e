//! # API crate — typed access to the scaffold's REST backend
//!
//! This crate is the single point of HTTP communication for every frontend in the
//! workspace. It mirrors the backend's records as serde types and wraps a
//! [`reqwest::Client`] so that each domain operation maps to exactly one REST call.
//! It compiles for both native targets and `wasm32` (where `reqwest` rides on the
//! browser's `fetch`).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] plus the per-entity handles [`UserApi`] and [`ProjectApi`] |
//! | [`config`] | [`ApiConfig`]: base URL resolution from the build/runtime environment or TOML |
//! | [`error`] | [`ApiError`] and its coarse [`ErrorKind`] classification |
//! | [`models`] | `User`/`Project` records and their create/update payloads |
//!
//! ## Endpoints
//!
//! | Method | Path | Client call |
//! |--------|------|-------------|
//! | GET | `/api/v1/users` | [`UserApi::get_all`] |
//! | GET | `/api/v1/users/{id}` | [`UserApi::get_by_id`] |
//! | POST | `/api/v1/users` | [`UserApi::create`] |
//! | PUT | `/api/v1/users/{id}` | [`UserApi::update`] |
//! | DELETE | `/api/v1/users/{id}` | [`UserApi::delete`] |
//! | GET | `/api/v1/projects?owner_id=` | [`ProjectApi::get_all`] |
//! | GET | `/api/v1/projects/{id}` | [`ProjectApi::get_by_id`] |
//! | POST | `/api/v1/projects` | [`ProjectApi::create`] |
//! | PUT | `/api/v1/projects/{id}` | [`ProjectApi::update`] |
//! | DELETE | `/api/v1/projects/{id}` | [`ProjectApi::delete`] |
//! | GET | `/health` | [`ApiClient::health`] |
//! | GET | `/` | [`ApiClient::service_info`] |
//!
//! Every call is a fresh round trip: there is no retry, timeout, or caching layer here.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{ApiClient, HealthStatus, ProjectApi, ServiceInfo, UserApi};
pub use config::ApiConfig;
pub use error::{ApiError, ErrorKind};
pub use models::{Project, ProjectCreate, ProjectStatus, ProjectUpdate, Role, User, UserCreate, UserUpdate};
