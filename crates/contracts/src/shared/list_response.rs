use serde::{Deserialize, Serialize};

/// Pagination metadata returned alongside a list payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_page: u32,
}

/// Envelope of every list endpoint of the REST API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiListResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<Vec<T>>,
    pub meta: Option<ListMeta>,
}

impl<T> Default for ApiListResponse<T> {
    fn default() -> Self {
        Self {
            success: false,
            message: String::new(),
            data: None,
            meta: None,
        }
    }
}

impl<T: Clone> ApiListResponse<T> {
    /// List payload, empty when the server omitted it
    pub fn items(&self) -> Vec<T> {
        self.data.clone().unwrap_or_default()
    }
}

/// Entry of `errorSources` in an error body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorSource {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub message: String,
}

/// Body the API sends with non-2xx responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub error_sources: Vec<ErrorSource>,
}
