use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::dto::CourseResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseListResponse {
    pub courses: Vec<CourseResponse>,
}

/// Public course catalogue
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "courses",
    responses(
        (status = 200, description = "Active courses, newest first", body = inline(SuccessResponse<CourseListResponse>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/courses")]
pub async fn get_courses_handler(data: web::Data<AppState>) -> impl Responder {
    match data.course.get_list.execute().await {
        Ok(courses) => ApiResponse::success(CourseListResponse {
            courses: courses.into_iter().map(CourseResponse::from).collect(),
        }),
        Err(e) => {
            error!("Failed to list courses: {}", e);
            ApiResponse::internal_error()
        }
    }
}
