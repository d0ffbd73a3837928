use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use nearvend_core::{
    ClientLocationParams, NearbyParams, NearbyQuery, NewVendor, Vendor, VendorProfileUpdate,
};

use super::{map_db_error, map_input_error, map_search_error, ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

/// GET /api/v1/vendors/nearby: vendors within `distance` metres of
/// (`lat`, `lng`).
///
/// Without `currentTime` the open-now check uses the server's local time.
pub(in crate::api) async fn nearby_vendors(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<ApiResponse<Vec<Vendor>>>, ApiError> {
    let rid = &req_id.0;
    let query = NearbyQuery::from_params(&params, chrono::Local::now().time())
        .map_err(|e| map_input_error(rid, &e))?;

    let vendors = state
        .search
        .execute(&query)
        .await
        .map_err(|e| map_search_error(rid, &e))?;

    Ok(Json(ApiResponse {
        data: vendors,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// POST /api/v1/vendors: register a vendor without a sale card.
pub(in crate::api) async fn register_vendor(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<NewVendor>,
) -> Result<(StatusCode, Json<ApiResponse<Vendor>>), ApiError> {
    let rid = &req_id.0;
    body.validate().map_err(|e| map_input_error(rid, &e))?;

    nearvend_db::insert_vendor(&state.pool, &body)
        .await
        .map_err(|e| map_db_error(rid, &e))?;
    tracing::info!(vendor_id = %body.id, "vendor registered");

    let vendor = Vendor {
        id: body.id,
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        phone_number: body.phone_number,
        profile_picture: None,
        sale_card: None,
    };
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: vendor,
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}

/// GET /api/v1/vendors/:id: one vendor, with `distanceFromClient` when the
/// caller sends `lat` and `lng`.
pub(in crate::api) async fn get_vendor(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
    Query(params): Query<ClientLocationParams>,
) -> Result<Json<ApiResponse<Vendor>>, ApiError> {
    let rid = &req_id.0;
    let client = params.resolve().map_err(|e| map_input_error(rid, &e))?;

    let vendor = nearvend_db::get_vendor(&state.pool, &id)
        .await
        .map_err(|e| map_db_error(rid, &e))?;
    let vendor = match client {
        Some(point) => vendor.with_distance_from(point),
        None => vendor,
    };

    Ok(Json(ApiResponse {
        data: vendor,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// PATCH /api/v1/vendors/:id: replace the editable profile fields.
pub(in crate::api) async fn update_vendor_profile(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
    Json(body): Json<VendorProfileUpdate>,
) -> Result<Json<ApiResponse<Vendor>>, ApiError> {
    let rid = &req_id.0;
    body.validate().map_err(|e| map_input_error(rid, &e))?;

    nearvend_db::update_vendor_profile(&state.pool, &id, &body)
        .await
        .map_err(|e| map_db_error(rid, &e))?;
    let vendor = nearvend_db::get_vendor(&state.pool, &id)
        .await
        .map_err(|e| map_db_error(rid, &e))?;

    Ok(Json(ApiResponse {
        data: vendor,
        meta: ResponseMeta::new(req_id.0),
    }))
}
