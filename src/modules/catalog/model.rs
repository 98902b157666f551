use serde::{Deserialize, Serialize};

use contentops_core::PaginationParams;
use contentops_core::serde::deserialize_optional_string;

/// Query parameters for browsing the product catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilterParams {
    /// Free-text match on title, handle or SKU
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub search: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// What the catalog service receives for a listing: the search term and
/// the already-clamped page window.
#[derive(Debug, Clone, Serialize)]
pub struct ProductQuery {
    pub search: Option<String>,
    pub page: i64,
    pub limit: i64,
    pub offset: i64,
}

impl From<ProductFilterParams> for ProductQuery {
    fn from(params: ProductFilterParams) -> Self {
        let window = params.pagination.window();
        Self {
            search: params.search,
            page: window.page,
            limit: window.limit,
            offset: window.offset,
        }
    }
}
