use serde::Serialize;
use utoipa::ToSchema;

/// OpenAPI view of a successful `ApiResponse` envelope.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// OpenAPI view of a failed `ApiResponse` envelope.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable, machine-readable code such as `COURSE_NOT_FOUND` or `ADMIN_REQUIRED`
    #[schema(example = "COURSE_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Course not found")]
    pub message: String,
}
