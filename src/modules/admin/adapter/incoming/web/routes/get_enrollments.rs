use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::dto::EnrollmentResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentListResponse {
    pub enrollments: Vec<EnrollmentResponse>,
}

/// Every enrollment, newest first, with user and course names
#[utoipa::path(
    get,
    path = "/api/admin/enrollments",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All enrollments", body = inline(SuccessResponse<EnrollmentListResponse>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/enrollments")]
pub async fn get_enrollments_handler(data: web::Data<AppState>) -> impl Responder {
    match data.admin.list_enrollments.execute().await {
        Ok(items) => ApiResponse::success(EnrollmentListResponse {
            enrollments: items.into_iter().map(EnrollmentResponse::from).collect(),
        }),
        Err(e) => {
            error!("Failed to list enrollments: {}", e);
            ApiResponse::internal_error()
        }
    }
}
