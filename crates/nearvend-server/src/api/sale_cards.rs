use axum::{
    extract::{Path, State},
    Extension, Json,
};
use nearvend_core::{SaleCardInput, Vendor};
use nearvend_db::DbError;

use super::{map_db_error, map_input_error, ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

/// PUT /api/v1/vendors/:id/sale-card: create or replace the vendor's card.
///
/// The stored geohash is computed from `latitude`/`longitude`; a `geoHash`
/// in the body is ignored.
pub(in crate::api) async fn upsert_sale_card(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(vendor_id): Path<String>,
    Json(body): Json<SaleCardInput>,
) -> Result<Json<ApiResponse<Vendor>>, ApiError> {
    let rid = &req_id.0;
    let draft = body.validate().map_err(|e| map_input_error(rid, &e))?;

    let card_id = nearvend_db::upsert_sale_card(&state.pool, &vendor_id, &draft)
        .await
        .map_err(|e| map_db_error(rid, &e))?;
    tracing::info!(%vendor_id, card_id, geo_hash = %draft.geo_hash, "sale card saved");

    let vendor = nearvend_db::get_vendor(&state.pool, &vendor_id)
        .await
        .map_err(|e| map_db_error(rid, &e))?;

    Ok(Json(ApiResponse {
        data: vendor,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// DELETE /api/v1/vendors/:id/sale-card: remove the card and its location.
pub(in crate::api) async fn delete_sale_card(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(vendor_id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let rid = &req_id.0;
    nearvend_db::delete_sale_card(&state.pool, &vendor_id)
        .await
        .map_err(|e| match e {
            DbError::NotFound => ApiError::new(rid, "not_found", "vendor has no sale card"),
            other => map_db_error(rid, &other),
        })?;
    tracing::info!(%vendor_id, "sale card deleted");

    Ok(Json(ApiResponse {
        data: serde_json::json!({ "deleted": true }),
        meta: ResponseMeta::new(req_id.0),
    }))
}
