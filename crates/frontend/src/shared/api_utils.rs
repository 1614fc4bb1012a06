//! REST client for the back-office API
//!
//! Every list endpoint answers `GET {base_url}{path}?{query}` with an
//! [`ApiListResponse`] envelope. Credentials are passed in explicitly when the
//! client is built; nothing here reads browser storage.

use std::future::Future;
use std::pin::Pin;

use contracts::shared::list_query::ListQuery;
use contracts::shared::list_response::{ApiErrorBody, ApiListResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::config::Config;
use crate::system::auth::context::AuthContext;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Not authorized (HTTP {status})")]
    Unauthorized { status: u16 },
    #[error("HTTP error {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to encode query: {0}")]
    Encode(String),
}

/// Future returned by list query functions
pub type ListFuture<T> = Pin<Box<dyn Future<Output = Result<ApiListResponse<T>, ApiError>>>>;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    access_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, access_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token,
        }
    }

    /// Build a full list URL from a path and query
    ///
    /// # Example
    /// ```rust,ignore
    /// let url = client.list_url("/book", &ListQuery::default())?;
    /// ```
    pub fn list_url(&self, path: &str, query: &ListQuery) -> Result<String, ApiError> {
        let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
        if qs.is_empty() {
            Ok(format!("{}{}", self.base_url, path))
        } else {
            Ok(format!("{}{}?{}", self.base_url, path, qs))
        }
    }

    /// Fetch one page of a list endpoint
    pub async fn get_list<T>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<ApiListResponse<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.list_url(path, query)?;

        let mut request = Request::get(&url).header("Accept", "application/json");
        if let Some(token) = &self.access_token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &body));
        }

        response
            .json::<ApiListResponse<T>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Map a non-2xx response to an [`ApiError`]
///
/// 401 and 403 end the session; other statuses carry the server message when
/// the body is a JSON error envelope.
pub fn classify_failure(status: u16, body: &str) -> ApiError {
    if status == 401 || status == 403 {
        return ApiError::Unauthorized { status };
    }
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status));
    ApiError::Status { status, message }
}

/// Query function for one list endpoint, bound to the session and config
pub fn list_endpoint<T>(
    auth: AuthContext,
    config: Config,
    path: &'static str,
) -> impl Fn(ListQuery) -> ListFuture<T> + Clone + 'static
where
    T: DeserializeOwned + 'static,
{
    move |query: ListQuery| -> ListFuture<T> {
        let client = ApiClient::new(config.api.base_url.clone(), auth.access_token_untracked());
        Box::pin(async move {
            let result = client.get_list::<T>(path, &query).await;
            auth.guard(result)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::ListFilters;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:6021/api/v1", None)
    }

    #[test]
    fn test_list_url_with_filters() {
        let filters = ListFilters {
            role: Some("admin".into()),
            ..Default::default()
        };
        let query = ListQuery::compose(2, "dune", &filters, &ListFilters::default());
        assert_eq!(
            client().list_url("/admin", &query).unwrap(),
            "http://localhost:6021/api/v1/admin?page=2&searchTerm=dune&role=admin"
        );
    }

    #[test]
    fn test_list_url_skips_unset_values() {
        let url = client().list_url("/book", &ListQuery::default()).unwrap();
        assert_eq!(url, "http://localhost:6021/api/v1/book?page=1");
    }

    #[test]
    fn test_list_url_keeps_false_flags() {
        let filters = ListFilters {
            is_active: Some(false),
            ..Default::default()
        };
        let query = ListQuery::compose(1, "", &filters, &ListFilters::default());
        assert_eq!(
            client().list_url("/user", &query).unwrap(),
            "http://localhost:6021/api/v1/user?page=1&isActive=false"
        );
    }

    #[test]
    fn test_classify_failure() {
        assert_eq!(
            classify_failure(401, ""),
            ApiError::Unauthorized { status: 401 }
        );
        assert_eq!(
            classify_failure(403, "{}"),
            ApiError::Unauthorized { status: 403 }
        );
        assert_eq!(
            classify_failure(500, r#"{"success":false,"message":"Database down"}"#),
            ApiError::Status {
                status: 500,
                message: "Database down".to_string()
            }
        );
        assert_eq!(
            classify_failure(502, "<html>Bad gateway</html>"),
            ApiError::Status {
                status: 502,
                message: "HTTP 502".to_string()
            }
        );
    }
}
