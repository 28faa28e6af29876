use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::CurrentUser;
use crate::shared::api::ApiResponse;

#[derive(Serialize, ToSchema)]
pub struct CurrentUserResponse {
    pub id: Uuid,
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    #[schema(example = "student")]
    pub role: String,
    pub phone: Option<String>,
    pub enrolled_courses: Vec<Uuid>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Current user profile
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Authenticated user", body = inline(SuccessResponse<CurrentUserResponse>)),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn fetch_current_user_handler(user: CurrentUser) -> impl Responder {
    let user = user.into_inner();
    ApiResponse::success(CurrentUserResponse {
        id: user.id,
        full_name: user.full_name,
        email: user.email,
        role: user.role.to_string(),
        phone: user.phone,
        enrolled_courses: user.enrolled_courses,
        is_active: user.is_active,
        created_at: user.created_at,
    })
}
