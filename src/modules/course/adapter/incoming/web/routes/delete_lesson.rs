use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::MessageResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::course::application::ports::incoming::use_cases::DeleteLessonError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Remove a lesson and renumber the remaining ones
#[utoipa::path(
    delete,
    path = "/api/courses/{course_id}/lessons/{lesson_id}",
    tag = "courses",
    security(("bearer_auth" = [])),
    params(
        ("course_id" = Uuid, Path, description = "Course id"),
        ("lesson_id" = Uuid, Path, description = "Lesson id"),
    ),
    responses(
        (status = 200, description = "Lesson deleted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 403, description = "Instructor or admin access required", body = ErrorResponse),
        (status = 404, description = "Course or lesson not found", body = ErrorResponse),
    )
)]
#[delete("/api/courses/{course_id}/lessons/{lesson_id}")]
pub async fn delete_lesson_handler(
    _user: StaffUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (course_id, lesson_id) = path.into_inner();

    match data.course.delete_lesson.execute(course_id, lesson_id).await {
        Ok(()) => ApiResponse::success(MessageResponse::new("Lesson deleted successfully")),
        Err(DeleteLessonError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(DeleteLessonError::LessonNotFound) => {
            ApiResponse::not_found("LESSON_NOT_FOUND", "Lesson not found")
        }
        Err(DeleteLessonError::RepositoryError(e)) => {
            error!(course_id = %course_id, lesson_id = %lesson_id, "Failed to delete lesson: {}", e);
            ApiResponse::internal_error()
        }
    }
}
