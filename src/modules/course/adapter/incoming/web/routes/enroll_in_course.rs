use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::CurrentUser;
use crate::course::application::ports::incoming::use_cases::{
    EnrollInCourseError, EnrollmentOutcome,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct EnrolledResponse {
    #[schema(example = "Successfully enrolled in course")]
    pub message: String,
    #[schema(example = "completed")]
    pub enrollment_status: String,
    pub enrollment_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentRequiredResponse {
    #[schema(example = "Enrollment initiated. Please complete payment.")]
    pub message: String,
    pub enrollment_id: Uuid,
    #[schema(example = true)]
    pub payment_required: bool,
    #[schema(example = 1500.0)]
    pub amount: f64,
}

/// Enroll the caller in a course
///
/// Free courses grant access immediately. Paid courses return a pending
/// enrollment and the amount due.
#[utoipa::path(
    post,
    path = "/api/courses/{course_id}/enroll",
    tag = "courses",
    security(("bearer_auth" = [])),
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Enrolled in a free course", body = inline(SuccessResponse<EnrolledResponse>)),
        (status = 200, description = "Paid course, payment required", body = inline(SuccessResponse<PaymentRequiredResponse>)),
        (status = 400, description = "Already enrolled", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
    )
)]
#[post("/api/courses/{course_id}/enroll")]
pub async fn enroll_in_course_handler(
    user: CurrentUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = path.into_inner();

    match data.course.enroll.execute(course_id, &user).await {
        Ok(EnrollmentOutcome::Enrolled { enrollment_id }) => ApiResponse::success(EnrolledResponse {
            message: "Successfully enrolled in course".to_string(),
            enrollment_status: "completed".to_string(),
            enrollment_id,
        }),
        Ok(EnrollmentOutcome::PaymentRequired {
            enrollment_id,
            amount,
        }) => ApiResponse::success(PaymentRequiredResponse {
            message: "Enrollment initiated. Please complete payment.".to_string(),
            enrollment_id,
            payment_required: true,
            amount,
        }),
        Err(EnrollInCourseError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(EnrollInCourseError::AlreadyEnrolled) => {
            warn!(user_id = %user.id, course_id = %course_id, "Duplicate enrollment attempt");
            ApiResponse::bad_request("ALREADY_ENROLLED", "Already enrolled in this course")
        }
        Err(e) => {
            error!(user_id = %user.id, course_id = %course_id, "Enrollment failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
