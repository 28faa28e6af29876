use actix_web::{put, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::dto::AdminCourseUpdateDto;
use crate::admin::application::ports::incoming::use_cases::UpdateCourseError;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::course::adapter::incoming::web::routes::dto::CourseResponse;
use crate::course::application::ports::incoming::use_cases::CourseCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseUpdatedResponse {
    #[schema(example = "Course updated successfully")]
    pub message: String,
    pub course: CourseResponse,
}

/// Replace a course's editable fields
#[utoipa::path(
    put,
    path = "/api/admin/courses/{course_id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("course_id" = Uuid, Path, description = "Course id")),
    request_body = AdminCourseUpdateDto,
    responses(
        (status = 200, description = "Course updated", body = inline(SuccessResponse<CourseUpdatedResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
#[put("/courses/{course_id}")]
pub async fn update_course_handler(
    path: web::Path<Uuid>,
    req: web::Json<AdminCourseUpdateDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = path.into_inner();
    let AdminCourseUpdateDto { course, is_active } = req.into_inner();

    let command = match CourseCommand::new(course.into()) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .admin
        .update_course
        .execute(course_id, command, is_active)
        .await
    {
        Ok(course) => ApiResponse::success(CourseUpdatedResponse {
            message: "Course updated successfully".to_string(),
            course: CourseResponse::from(course),
        }),
        Err(UpdateCourseError::NotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(UpdateCourseError::RepositoryError(e)) => {
            error!(course_id = %course_id, "Failed to update course: {}", e);
            ApiResponse::internal_error()
        }
    }
}
