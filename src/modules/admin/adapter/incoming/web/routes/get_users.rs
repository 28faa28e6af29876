use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::dto::AdminUserResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<AdminUserResponse>,
}

/// Every registered user, newest first
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users", body = inline(SuccessResponse<UserListResponse>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/users")]
pub async fn get_users_handler(data: web::Data<AppState>) -> impl Responder {
    match data.admin.list_users.execute().await {
        Ok(users) => ApiResponse::success(UserListResponse {
            users: users.into_iter().map(AdminUserResponse::from).collect(),
        }),
        Err(e) => {
            error!("Failed to list users: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_app::send;
    use crate::auth::application::domain::entities::UserRole;
    use crate::tests::support::fixtures::sample_user;
    use crate::tests::support::in_memory::{InMemoryCourseStore, InMemoryUserStore};
    use actix_web::test;
    use uuid::Uuid;

    #[actix_web::test]
    async fn lists_users_without_password_hash() {
        let admin = sample_user(UserRole::Admin);
        let mut student = sample_user(UserRole::Student);
        student.enrolled_courses = vec![Uuid::new_v4(), Uuid::new_v4()];
        let store = InMemoryCourseStore::default()
            .with_users(InMemoryUserStore::with_users(vec![admin.clone(), student.clone()]));

        let (status, body) = send(
            admin,
            store,
            test::TestRequest::get().uri("/api/admin/users"),
        )
        .await;

        assert_eq!(status, 200);
        let users = body["data"]["users"].as_array().unwrap();
        assert_eq!(users.len(), 2);
        let listed = users
            .iter()
            .find(|u| u["id"] == student.id.to_string())
            .unwrap();
        assert_eq!(listed["total_enrollments"], 2);
        assert!(listed.get("password_hash").is_none());
    }
}
