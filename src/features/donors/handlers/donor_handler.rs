use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::donors::dtos::{
    CreateDonorDto, DonorResponseDto, DonorSearchQuery, DonorSearchResultDto,
    UpdateDonorAvailabilityDto,
};
use crate::features::donors::services::DonorService;
use crate::shared::types::{ApiResponse, Meta};

/// Register as a blood donor
#[utoipa::path(
    post,
    path = "/api/donors",
    request_body = CreateDonorDto,
    responses(
        (status = 201, description = "Donor registered successfully", body = ApiResponse<DonorResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "donors"
)]
pub async fn register_donor(
    State(service): State<Arc<DonorService>>,
    AppJson(dto): AppJson<CreateDonorDto>,
) -> Result<(StatusCode, Json<ApiResponse<DonorResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let donor = service.register(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(donor),
            Some("Donor registered successfully".to_string()),
            None,
        )),
    ))
}

/// Search donors by blood group and location
///
/// Unavailable donors are listed without contact details.
#[utoipa::path(
    get,
    path = "/api/donors/search",
    params(DonorSearchQuery),
    responses(
        (status = 200, description = "Matching donors, newest first", body = ApiResponse<Vec<DonorSearchResultDto>>),
        (status = 400, description = "Unknown blood group")
    ),
    tag = "donors"
)]
pub async fn search_donors(
    State(service): State<Arc<DonorService>>,
    Query(query): Query<DonorSearchQuery>,
) -> Result<Json<ApiResponse<Vec<DonorSearchResultDto>>>> {
    let donors = service.search(query).await?;
    let meta = Meta::of(&donors);
    Ok(Json(ApiResponse::success(Some(donors), None, Some(meta))))
}

/// List all donors (admin)
#[utoipa::path(
    get,
    path = "/api/admin/donors",
    responses(
        (status = 200, description = "All donors, newest first", body = ApiResponse<Vec<DonorResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin-donors",
    security(("bearer_auth" = []))
)]
pub async fn list_donors(
    RequireAdmin(cap): RequireAdmin,
    State(service): State<Arc<DonorService>>,
) -> Result<Json<ApiResponse<Vec<DonorResponseDto>>>> {
    let donors = service.list_all(&cap).await?;
    let meta = Meta::of(&donors);
    Ok(Json(ApiResponse::success(Some(donors), None, Some(meta))))
}

/// Set or flip donor availability (admin)
#[utoipa::path(
    put,
    path = "/api/admin/donors/{id}",
    params(
        ("id" = Uuid, Path, description = "Donor ID")
    ),
    request_body(content = UpdateDonorAvailabilityDto, description = "Omit the body to flip the current value"),
    responses(
        (status = 200, description = "Availability updated", body = ApiResponse<DonorResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Donor not found")
    ),
    tag = "admin-donors",
    security(("bearer_auth" = []))
)]
pub async fn update_donor_availability(
    RequireAdmin(cap): RequireAdmin,
    State(service): State<Arc<DonorService>>,
    Path(id): Path<Uuid>,
    body: Option<AppJson<UpdateDonorAvailabilityDto>>,
) -> Result<Json<ApiResponse<DonorResponseDto>>> {
    let dto = body.map(|AppJson(dto)| dto).unwrap_or_default();
    let donor = service.set_availability(&cap, id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(donor),
        Some("Donor availability updated".to_string()),
        None,
    )))
}

/// Delete a donor (admin)
#[utoipa::path(
    delete,
    path = "/api/admin/donors/{id}",
    params(
        ("id" = Uuid, Path, description = "Donor ID")
    ),
    responses(
        (status = 200, description = "Donor deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Donor not found")
    ),
    tag = "admin-donors",
    security(("bearer_auth" = []))
)]
pub async fn delete_donor(
    RequireAdmin(cap): RequireAdmin,
    State(service): State<Arc<DonorService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&cap, id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Donor deleted successfully".to_string()),
        None,
    )))
}
