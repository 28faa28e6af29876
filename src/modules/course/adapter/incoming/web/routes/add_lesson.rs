use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::dto::{LessonRequestDto, LessonResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::course::application::ports::incoming::use_cases::{AddLessonError, LessonCommand};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct LessonAddedResponse {
    #[schema(example = "Lesson added successfully")]
    pub message: String,
    pub lesson_id: Uuid,
    pub lesson: LessonResponse,
}

/// Append a lesson to a course
#[utoipa::path(
    post,
    path = "/api/courses/{course_id}/lessons",
    tag = "courses",
    security(("bearer_auth" = [])),
    params(("course_id" = Uuid, Path, description = "Course id")),
    request_body = LessonRequestDto,
    responses(
        (status = 200, description = "Lesson added", body = inline(SuccessResponse<LessonAddedResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Instructor or admin access required", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
#[post("/api/courses/{course_id}/lessons")]
pub async fn add_lesson_handler(
    _user: StaffUser,
    path: web::Path<Uuid>,
    req: web::Json<LessonRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = path.into_inner();

    let command = match LessonCommand::new(req.into_inner().into()) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.course.add_lesson.execute(course_id, command).await {
        Ok(lesson) => ApiResponse::success(LessonAddedResponse {
            message: "Lesson added successfully".to_string(),
            lesson_id: lesson.id,
            lesson: LessonResponse::from(lesson),
        }),
        Err(AddLessonError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(AddLessonError::RepositoryError(e)) => {
            error!(course_id = %course_id, "Failed to add lesson: {}", e);
            ApiResponse::internal_error()
        }
    }
}
