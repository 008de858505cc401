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
use crate::features::blood_requests::dtos::{
    BloodRequestListQuery, BloodRequestResponseDto, CreateBloodRequestDto, UpdateRequestStatusDto,
};
use crate::features::blood_requests::models::RequestStatus;
use crate::features::blood_requests::services::BloodRequestService;
use crate::shared::types::{ApiResponse, Meta};

/// Submit a blood request
#[utoipa::path(
    post,
    path = "/api/blood-requests",
    request_body = CreateBloodRequestDto,
    responses(
        (status = 201, description = "Blood request submitted", body = ApiResponse<BloodRequestResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "blood-requests"
)]
pub async fn submit_blood_request(
    State(service): State<Arc<BloodRequestService>>,
    AppJson(dto): AppJson<CreateBloodRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<BloodRequestResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let request = service.submit(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(request),
            Some("Blood request submitted successfully".to_string()),
            None,
        )),
    ))
}

/// List blood requests in triage order (admin)
///
/// Most urgent first (immediate, urgent, normal, anything else), newest first
/// within the same urgency.
#[utoipa::path(
    get,
    path = "/api/admin/blood-requests",
    params(BloodRequestListQuery),
    responses(
        (status = 200, description = "Triage-ordered requests", body = ApiResponse<Vec<BloodRequestResponseDto>>),
        (status = 400, description = "Unknown status filter"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin-blood-requests",
    security(("bearer_auth" = []))
)]
pub async fn list_blood_requests(
    RequireAdmin(cap): RequireAdmin,
    State(service): State<Arc<BloodRequestService>>,
    Query(query): Query<BloodRequestListQuery>,
) -> Result<Json<ApiResponse<Vec<BloodRequestResponseDto>>>> {
    let status = match query.status.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => {
            Some(raw.parse::<RequestStatus>().map_err(AppError::Validation)?)
        }
        _ => None,
    };

    let requests = service.triage_list(&cap, status).await?;
    let meta = Meta::of(&requests);
    Ok(Json(ApiResponse::success(Some(requests), None, Some(meta))))
}

/// Change the status of a blood request (admin)
#[utoipa::path(
    put,
    path = "/api/admin/blood-requests/{id}",
    params(
        ("id" = Uuid, Path, description = "Blood request ID")
    ),
    request_body = UpdateRequestStatusDto,
    responses(
        (status = 200, description = "Status updated (or already in that status)", body = ApiResponse<BloodRequestResponseDto>),
        (status = 400, description = "Unknown status or illegal transition"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Blood request not found"),
        (status = 409, description = "Request was modified since it was read")
    ),
    tag = "admin-blood-requests",
    security(("bearer_auth" = []))
)]
pub async fn update_blood_request_status(
    RequireAdmin(cap): RequireAdmin,
    State(service): State<Arc<BloodRequestService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateRequestStatusDto>,
) -> Result<Json<ApiResponse<BloodRequestResponseDto>>> {
    let request = service.transition(&cap, id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(request),
        Some("Blood request status updated".to_string()),
        None,
    )))
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::features::blood_requests::routes;
    use crate::shared::test_helpers::{
        fake_blood_request_payload, with_admin_auth, InMemoryBloodRequestRepository,
    };

    use super::*;

    fn server() -> TestServer {
        let service = Arc::new(BloodRequestService::new(Arc::new(
            InMemoryBloodRequestRepository::default(),
        )));
        let app = Router::new()
            .merge(routes::public_routes(Arc::clone(&service)))
            .nest("/api/admin", with_admin_auth(routes::admin_routes(service)));
        TestServer::new(app).unwrap()
    }

    async fn submit(server: &TestServer, urgency: &str) -> String {
        let response = server
            .post("/api/blood-requests")
            .json(&fake_blood_request_payload("O-", urgency))
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        body["data"]["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_submit_returns_pending_record() {
        let server = server();
        let response = server
            .post("/api/blood-requests")
            .json(&fake_blood_request_payload("AB+", "urgent"))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        assert_eq!(body["data"]["status"], "pending");
        assert_eq!(body["data"]["version"], 1);
        assert_eq!(body["data"]["bloodGroup"], "AB+");
    }

    #[tokio::test]
    async fn test_submit_rejects_missing_and_malformed_fields() {
        let server = server();

        let mut payload = fake_blood_request_payload("O-", "urgent");
        payload.as_object_mut().unwrap().remove("hospitalName");
        server
            .post("/api/blood-requests")
            .json(&payload)
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let mut payload = fake_blood_request_payload("O-", "urgent");
        payload["unitsRequired"] = json!(0);
        server
            .post("/api/blood-requests")
            .json(&payload)
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .post("/api/blood-requests")
            .json(&fake_blood_request_payload("O-", "someday"))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_triage_and_lifecycle_over_http() {
        let server = server();
        submit(&server, "normal").await;
        let critical = submit(&server, "immediate").await;
        submit(&server, "urgent").await;

        let body: Value = server.get("/api/admin/blood-requests").await.json();
        assert_eq!(body["data"][0]["id"], critical.as_str());
        assert_eq!(body["data"][1]["urgencyLevel"], "urgent");
        assert_eq!(body["data"][2]["urgencyLevel"], "normal");

        let path = format!("/api/admin/blood-requests/{}", critical);
        server
            .put(&path)
            .json(&json!({ "status": "in_progress" }))
            .await
            .assert_status_ok();
        server
            .put(&path)
            .json(&json!({ "status": "fulfilled" }))
            .await
            .assert_status_ok();

        let response = server.put(&path).json(&json!({ "status": "pending" })).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);

        let body: Value = server
            .get("/api/admin/blood-requests")
            .add_query_param("status", "pending")
            .await
            .json();
        assert_eq!(body["meta"]["total"], 2);
    }

    #[tokio::test]
    async fn test_status_update_errors() {
        let server = server();
        let id = submit(&server, "normal").await;
        let path = format!("/api/admin/blood-requests/{}", id);

        server
            .put(&path)
            .json(&json!({ "status": "archived" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .put(&format!("/api/admin/blood-requests/{}", Uuid::now_v7()))
            .json(&json!({ "status": "cancelled" }))
            .await
            .assert_status(StatusCode::NOT_FOUND);

        server
            .put(&path)
            .json(&json!({ "status": "in_progress", "expectedVersion": 7 }))
            .await
            .assert_status(StatusCode::CONFLICT);

        server
            .get("/api/admin/blood-requests")
            .add_query_param("status", "bogus")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
