use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::dto::AdminCourseResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminCourseListResponse {
    pub courses: Vec<AdminCourseResponse>,
}

/// Every course, active or not, with enrollment figures
#[utoipa::path(
    get,
    path = "/api/admin/courses",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All courses", body = inline(SuccessResponse<AdminCourseListResponse>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/courses")]
pub async fn get_admin_courses_handler(data: web::Data<AppState>) -> impl Responder {
    match data.admin.list_courses.execute().await {
        Ok(summaries) => ApiResponse::success(AdminCourseListResponse {
            courses: summaries.into_iter().map(AdminCourseResponse::from).collect(),
        }),
        Err(e) => {
            error!("Failed to list courses for admin: {}", e);
            ApiResponse::internal_error()
        }
    }
}
