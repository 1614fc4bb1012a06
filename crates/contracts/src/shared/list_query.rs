//! Typed query parameters for list endpoints.
//!
//! Every list endpoint accepts `page` and `searchTerm` plus a small set of
//! recognized filter keys. Filters live in [`ListFilters`]; the flat
//! [`ListQuery`] is what actually goes on the wire.

use serde::{Deserialize, Serialize};

/// Recognized filter keys. `None` means "not filtered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ListFilters {
    /// Returns `self` with every key set in `over` replaced by its value.
    pub fn overlay(&self, over: &ListFilters) -> ListFilters {
        ListFilters {
            limit: over.limit.or(self.limit),
            category: over.category.clone().or_else(|| self.category.clone()),
            role: over.role.clone().or_else(|| self.role.clone()),
            status: over.status.clone().or_else(|| self.status.clone()),
            payment_status: over
                .payment_status
                .clone()
                .or_else(|| self.payment_status.clone()),
            delivery_status: over
                .delivery_status
                .clone()
                .or_else(|| self.delivery_status.clone()),
            is_active: over.is_active.or(self.is_active),
        }
    }

    /// Drops empty strings so a cleared input behaves like an unset filter
    pub fn normalized(mut self) -> ListFilters {
        for value in [
            &mut self.category,
            &mut self.role,
            &mut self.status,
            &mut self.payment_status,
            &mut self.delivery_status,
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *value = None;
            }
        }
        self
    }
}

/// Effective parameters of one list request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: u32,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub search_term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ListQuery {
    /// Merges page, search term, filters and fixed options.
    ///
    /// `options` win over `filters` key by key. `page` and `searchTerm` are
    /// not filter keys and cannot be overridden.
    pub fn compose(
        page: u32,
        search_term: &str,
        filters: &ListFilters,
        options: &ListFilters,
    ) -> ListQuery {
        let merged = filters.overlay(options).normalized();
        ListQuery {
            page,
            search_term: search_term.trim().to_string(),
            limit: merged.limit,
            category: merged.category,
            role: merged.role,
            status: merged.status,
            payment_status: merged.payment_status,
            delivery_status: merged.delivery_status,
            is_active: merged.is_active,
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        ListQuery::compose(1, "", &ListFilters::default(), &ListFilters::default())
    }
}
