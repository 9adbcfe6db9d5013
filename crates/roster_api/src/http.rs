//! Thin reqwest wrapper: one base address, one timeout, one place where
//! failures are turned into `ApiError` values.

use std::time::Duration;

use roster_logging::{roster_debug, roster_warn};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Single point of outbound request issuance and error translation.
///
/// Holds a `reqwest::Client` configured with the base URL and timeout from
/// `ApiConfig`. Constructed once at process start and shared; no retry is
/// performed inside this layer.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = build_client(config.timeout)?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Issue `GET {base_url}{path}?{query}` and return the body unchanged
    /// on any 2xx status.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        roster_debug!("GET {} query={:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_transport_error)?;
        classify_response(status, body)
    }
}

fn build_client(timeout: Duration) -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()
        .map_err(|_| ApiError::Network)
}

/// No response was received at all: timeouts, refused connections, DNS
/// failures. Everything lands in `Network`.
fn map_transport_error(err: reqwest::Error) -> ApiError {
    roster_warn!("transport failure: {err}");
    ApiError::Network
}

/// Classify a received response. Pure function of the status code so the
/// mapping cannot drift between call sites; checked in taxonomy order.
fn classify_response(status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        return Ok(body);
    }
    if status == 404 {
        return Err(ApiError::NotFound);
    }
    if status >= 500 {
        return Err(ApiError::Server { status });
    }
    Err(ApiError::Client { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_returns_body_unchanged() {
        let body = classify_response(200, "[1,2,3]".to_string()).unwrap();
        assert_eq!(body, "[1,2,3]");
    }

    #[test]
    fn not_found_has_dedicated_variant() {
        let err = classify_response(404, String::new()).unwrap_err();
        assert_eq!(err, ApiError::NotFound);
        assert_eq!(err.to_string(), "Resource not found.");
    }

    #[test]
    fn five_hundreds_map_to_server_error() {
        for status in [500, 502, 503] {
            let err = classify_response(status, "boom".to_string()).unwrap_err();
            assert_eq!(err, ApiError::Server { status });
            assert_eq!(err.to_string(), "Server error. Please try again later.");
        }
    }

    #[test]
    fn other_statuses_pass_through_untouched() {
        let err = classify_response(401, "unauthorized".to_string()).unwrap_err();
        assert_eq!(
            err,
            ApiError::Client {
                status: 401,
                body: "unauthorized".to_string(),
            }
        );
    }

    #[test]
    fn not_found_wins_over_client_bucket() {
        // 404 must be checked before the generic non-2xx arm.
        assert!(matches!(
            classify_response(404, "missing".to_string()),
            Err(ApiError::NotFound)
        ));
    }

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let client = HttpClient::new(ApiConfig::new("http://localhost:3000/")).unwrap();
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
