use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::admin::application::ports::incoming::use_cases::DeleteCourseError;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::course::adapter::incoming::web::routes::dto::MessageResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a course nobody has enrolled in
#[utoipa::path(
    delete,
    path = "/api/admin/courses/{course_id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deleted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Course still has enrollments", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
#[delete("/courses/{course_id}")]
pub async fn delete_course_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = path.into_inner();

    match data.admin.delete_course.execute(course_id).await {
        Ok(()) => ApiResponse::success(MessageResponse::new("Course deleted successfully")),
        Err(e @ DeleteCourseError::HasEnrollments(_)) => {
            ApiResponse::bad_request("COURSE_HAS_ENROLLMENTS", &e.to_string())
        }
        Err(DeleteCourseError::NotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(DeleteCourseError::RepositoryError(e)) => {
            error!(course_id = %course_id, "Failed to delete course: {}", e);
            ApiResponse::internal_error()
        }
    }
}
