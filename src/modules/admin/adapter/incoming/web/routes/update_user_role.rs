use actix_web::{put, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::dto::{AdminUserResponse, RoleUpdateDto};
use crate::admin::application::domain::role_policy::PolicyViolation;
use crate::admin::application::ports::incoming::use_cases::UpdateUserRoleError;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserUpdatedResponse {
    #[schema(example = "User role updated to instructor")]
    pub message: String,
    pub user: AdminUserResponse,
}

/// Change a user's role
///
/// Only a super admin may grant admin rights or touch an admin account.
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/role",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("user_id" = Uuid, Path, description = "User id")),
    request_body = RoleUpdateDto,
    responses(
        (status = 200, description = "Role updated", body = inline(SuccessResponse<UserUpdatedResponse>)),
        (status = 400, description = "Invalid role or own account", body = ErrorResponse),
        (status = 403, description = "Not allowed to grant this role", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[put("/users/{user_id}/role")]
pub async fn update_user_role_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<RoleUpdateDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data
        .admin
        .update_user_role
        .execute(&admin, user_id, &req.role)
        .await
    {
        Ok(user) => ApiResponse::success(UserUpdatedResponse {
            message: format!("User role updated to {}", user.role),
            user: AdminUserResponse::from(user),
        }),
        Err(UpdateUserRoleError::InvalidRole(role)) => {
            ApiResponse::bad_request("INVALID_ROLE", &format!("Invalid role: {role}"))
        }
        Err(UpdateUserRoleError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateUserRoleError::Forbidden(v @ PolicyViolation::InsufficientPrivileges)) => {
            ApiResponse::forbidden("INSUFFICIENT_PRIVILEGES", &v.to_string())
        }
        Err(UpdateUserRoleError::Forbidden(v)) => {
            ApiResponse::bad_request("SELF_MODIFICATION", &v.to_string())
        }
        Err(UpdateUserRoleError::RepositoryError(e)) => {
            error!(user_id = %user_id, "Failed to update role: {}", e);
            ApiResponse::internal_error()
        }
    }
}
