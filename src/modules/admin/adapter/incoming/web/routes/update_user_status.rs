use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::StatusUpdateDto;
use super::update_user_role::UserUpdatedResponse;
use crate::admin::application::domain::role_policy::PolicyViolation;
use crate::admin::application::ports::incoming::use_cases::UpdateUserStatusError;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Activate or deactivate a user account
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/status",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("user_id" = Uuid, Path, description = "User id")),
    request_body = StatusUpdateDto,
    responses(
        (status = 200, description = "Status updated", body = inline(SuccessResponse<UserUpdatedResponse>)),
        (status = 400, description = "Cannot deactivate own account", body = ErrorResponse),
        (status = 403, description = "Not allowed to manage this account", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[put("/users/{user_id}/status")]
pub async fn update_user_status_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<StatusUpdateDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data
        .admin
        .update_user_status
        .execute(&admin, user_id, req.is_active)
        .await
    {
        Ok(user) => {
            let message = if user.is_active {
                "User activated"
            } else {
                "User deactivated"
            };
            ApiResponse::success(UserUpdatedResponse {
                message: message.to_string(),
                user: user.into(),
            })
        }
        Err(UpdateUserStatusError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateUserStatusError::Forbidden(v @ PolicyViolation::InsufficientPrivileges)) => {
            ApiResponse::forbidden("INSUFFICIENT_PRIVILEGES", &v.to_string())
        }
        Err(UpdateUserStatusError::Forbidden(v)) => {
            ApiResponse::bad_request("SELF_MODIFICATION", &v.to_string())
        }
        Err(UpdateUserStatusError::RepositoryError(e)) => {
            error!(user_id = %user_id, "Failed to update status: {}", e);
            ApiResponse::internal_error()
        }
    }
}
