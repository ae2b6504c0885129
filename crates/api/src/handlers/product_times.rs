//! Handler exposing the product processing time table.

use axum::Json;
use indexmap::IndexMap;
use prodqueue_core::product_times::PRODUCT_TIMES;
use serde::Serialize;

/// Processing minutes keyed by product type, in table order.
#[derive(Debug, Serialize)]
pub struct ProductTimesResponse {
    pub product_times: IndexMap<&'static str, u32>,
}

/// GET /api/product-times
pub async fn get_product_times() -> Json<ProductTimesResponse> {
    Json(ProductTimesResponse {
        product_times: PRODUCT_TIMES.iter().copied().collect(),
    })
}
