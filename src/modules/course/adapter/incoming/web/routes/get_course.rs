use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::dto::CourseResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::CurrentUser;
use crate::course::application::ports::incoming::use_cases::GetCourseError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseDetailResponse {
    #[serde(flatten)]
    pub course: CourseResponse,
    pub is_enrolled: bool,
}

/// Course detail for the caller
///
/// Callers not enrolled in a paid course only receive its preview lessons.
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}",
    tag = "courses",
    security(("bearer_auth" = [])),
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course detail", body = inline(SuccessResponse<CourseDetailResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Course missing or inactive", body = ErrorResponse),
    )
)]
#[get("/api/courses/{course_id}")]
pub async fn get_course_handler(
    user: CurrentUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = path.into_inner();

    match data.course.get_single.execute(course_id, &user).await {
        Ok(detail) => ApiResponse::success(CourseDetailResponse {
            course: CourseResponse::from(detail.course),
            is_enrolled: detail.is_enrolled,
        }),
        Err(GetCourseError::NotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(GetCourseError::RepositoryError(e)) => {
            error!(course_id = %course_id, "Failed to load course: {}", e);
            ApiResponse::internal_error()
        }
    }
}
