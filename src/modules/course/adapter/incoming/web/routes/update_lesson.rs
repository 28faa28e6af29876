use actix_web::{put, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::dto::{LessonRequestDto, LessonResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::course::application::ports::incoming::use_cases::{LessonCommand, UpdateLessonError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct LessonUpdatedResponse {
    #[schema(example = "Lesson updated successfully")]
    pub message: String,
    pub lesson: LessonResponse,
}

/// Replace a lesson's content. Its position is unchanged.
#[utoipa::path(
    put,
    path = "/api/courses/{course_id}/lessons/{lesson_id}",
    tag = "courses",
    security(("bearer_auth" = [])),
    params(
        ("course_id" = Uuid, Path, description = "Course id"),
        ("lesson_id" = Uuid, Path, description = "Lesson id"),
    ),
    request_body = LessonRequestDto,
    responses(
        (status = 200, description = "Lesson updated", body = inline(SuccessResponse<LessonUpdatedResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Instructor or admin access required", body = ErrorResponse),
        (status = 404, description = "Course or lesson not found", body = ErrorResponse),
    )
)]
#[put("/api/courses/{course_id}/lessons/{lesson_id}")]
pub async fn update_lesson_handler(
    _user: StaffUser,
    path: web::Path<(Uuid, Uuid)>,
    req: web::Json<LessonRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (course_id, lesson_id) = path.into_inner();

    let command = match LessonCommand::new(req.into_inner().into()) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .course
        .update_lesson
        .execute(course_id, lesson_id, command)
        .await
    {
        Ok(lesson) => ApiResponse::success(LessonUpdatedResponse {
            message: "Lesson updated successfully".to_string(),
            lesson: LessonResponse::from(lesson),
        }),
        Err(UpdateLessonError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(UpdateLessonError::LessonNotFound) => {
            ApiResponse::not_found("LESSON_NOT_FOUND", "Lesson not found")
        }
        Err(UpdateLessonError::RepositoryError(e)) => {
            error!(course_id = %course_id, lesson_id = %lesson_id, "Failed to update lesson: {}", e);
            ApiResponse::internal_error()
        }
    }
}
