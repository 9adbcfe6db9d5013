//! Typed access to the profile endpoints.
//!
//! `ProfileApi` is the seam between the fetch controllers and the network:
//! controllers hold a trait object so tests can substitute a scripted
//! transport.

use roster_logging::roster_warn;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::Profile;

/// Transport used by the fetch controllers.
#[async_trait::async_trait]
pub trait ProfileApi: Send + Sync {
    /// Fetch one page of profiles. An empty page means the listing is
    /// exhausted.
    async fn list_page(&self, page: u32, limit: u32) -> Result<Vec<Profile>, ApiError>;

    /// Fetch a single profile by id.
    async fn fetch_profile(&self, id: &str) -> Result<Profile, ApiError>;
}

/// `ProfileApi` implementation backed by the real HTTP service.
#[derive(Debug, Clone)]
pub struct RemoteProfileApi {
    http: HttpClient,
}

impl RemoteProfileApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait::async_trait]
impl ProfileApi for RemoteProfileApi {
    async fn list_page(&self, page: u32, limit: u32) -> Result<Vec<Profile>, ApiError> {
        let body = self
            .http
            .get(
                "/profiles",
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await?;
        serde_json::from_str(&body).map_err(|err| {
            roster_warn!("profile page {} failed to decode: {}", page, err);
            ApiError::Decode(err.to_string())
        })
    }

    async fn fetch_profile(&self, id: &str) -> Result<Profile, ApiError> {
        let body = self.http.get(&format!("/profiles/{id}"), &[]).await?;
        serde_json::from_str(&body).map_err(|err| {
            roster_warn!("profile {} failed to decode: {}", id, err);
            ApiError::Decode(err.to_string())
        })
    }
}
