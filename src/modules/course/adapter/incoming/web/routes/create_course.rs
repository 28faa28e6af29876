use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::dto::CourseRequestDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::course::application::ports::incoming::use_cases::CourseCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseCreatedResponse {
    #[schema(example = "Course created successfully")]
    pub message: String,
    pub course_id: Uuid,
}

/// Create a course
///
/// The caller becomes the course's instructor.
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = "courses",
    security(("bearer_auth" = [])),
    request_body = CourseRequestDto,
    responses(
        (status = 201, description = "Course created", body = inline(SuccessResponse<CourseCreatedResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Instructor or admin access required", body = ErrorResponse),
    )
)]
#[post("/api/courses")]
pub async fn create_course_handler(
    user: StaffUser,
    req: web::Json<CourseRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CourseCommand::new(req.into_inner().into()) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.course.create.execute(command, user.id).await {
        Ok(course) => ApiResponse::created(CourseCreatedResponse {
            message: "Course created successfully".to_string(),
            course_id: course.id,
        }),
        Err(e) => {
            error!(user_id = %user.id, "Failed to create course: {}", e);
            ApiResponse::internal_error()
        }
    }
}
