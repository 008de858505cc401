use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::blood_groups::dtos::BloodGroupResponseDto;
use crate::features::blood_groups::services::BloodGroupService;
use crate::shared::types::{ApiResponse, Meta};

/// List the blood group reference enumeration
#[utoipa::path(
    get,
    path = "/api/blood-groups",
    responses(
        (status = 200, description = "All blood groups in id order", body = ApiResponse<Vec<BloodGroupResponseDto>>)
    ),
    tag = "blood-groups"
)]
pub async fn list_blood_groups(
    State(service): State<Arc<BloodGroupService>>,
) -> Result<Json<ApiResponse<Vec<BloodGroupResponseDto>>>> {
    let groups = service.list();
    let meta = Meta::of(&groups);
    Ok(Json(ApiResponse::success(Some(groups), None, Some(meta))))
}
