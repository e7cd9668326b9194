//! Shared query-parameter DTOs.

use serde::Deserialize;
use utoipa::IntoParams;

/// Pagination query parameters for the list endpoint.
///
/// Values are parsed as integers by the extractor; non-numeric input is
/// rejected with a 400 before reaching the service. An explicit 0 for
/// either field selects the pagination bypass (the full collection in
/// one response).
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListParams {
    /// Page number (1-indexed). Defaults to 1. 0 disables pagination.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page. Defaults to 3. 0 disables pagination.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Search query parameters.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Keyword matched case-insensitively against product names.
    pub keyword: String,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    3
}
