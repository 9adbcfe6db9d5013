//! Roster API: HTTP transport and error normalization for the profile service.
mod api;
mod config;
mod error;
mod http;
mod types;

pub use api::{ProfileApi, RemoteProfileApi};
pub use config::{ApiConfig, BASE_URL_ENV, TIMEOUT_MS_ENV};
pub use error::ApiError;
pub use http::HttpClient;
pub use types::Profile;
