use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::LessonResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::CurrentUser;
use crate::course::application::ports::incoming::use_cases::GetLessonError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Single lesson
///
/// Open to everyone for free courses and preview lessons; other lessons of a
/// paid course require enrollment.
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}/lessons/{lesson_id}",
    tag = "courses",
    security(("bearer_auth" = [])),
    params(
        ("course_id" = Uuid, Path, description = "Course id"),
        ("lesson_id" = Uuid, Path, description = "Lesson id"),
    ),
    responses(
        (status = 200, description = "Lesson", body = inline(SuccessResponse<LessonResponse>)),
        (status = 403, description = "Enrollment required", body = ErrorResponse),
        (status = 404, description = "Course or lesson not found", body = ErrorResponse),
    )
)]
#[get("/api/courses/{course_id}/lessons/{lesson_id}")]
pub async fn get_lesson_handler(
    user: CurrentUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (course_id, lesson_id) = path.into_inner();

    match data
        .course
        .get_lesson
        .execute(course_id, lesson_id, &user)
        .await
    {
        Ok(lesson) => ApiResponse::success(LessonResponse::from(lesson)),
        Err(GetLessonError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(GetLessonError::LessonNotFound) => {
            ApiResponse::not_found("LESSON_NOT_FOUND", "Lesson not found")
        }
        Err(GetLessonError::AccessDenied) => ApiResponse::forbidden(
            "ENROLLMENT_REQUIRED",
            "Access denied. Please enroll in this course.",
        ),
        Err(GetLessonError::RepositoryError(e)) => {
            error!(course_id = %course_id, lesson_id = %lesson_id, "Failed to load lesson: {}", e);
            ApiResponse::internal_error()
        }
    }
}
