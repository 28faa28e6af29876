use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::login_user::AuthTokenResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::register_user::{
    RegisterUserError, RegisterUserRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RegisterUserRequestDto {
    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "john@example.com")]
    pub email: String,

    /// At least 6 characters
    #[schema(example = "secret123")]
    pub password: String,

    #[schema(example = "+62 811 1234 5678")]
    pub phone: Option<String>,
}

/// Register a new student account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequestDto,
    responses(
        (status = 201, description = "User registered", body = inline(SuccessResponse<AuthTokenResponse>)),
        (
            status = 400,
            description = "Validation error or email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_ALREADY_REGISTERED",
                    "message": "Email already registered"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request =
        match RegisterUserRequest::new(dto.full_name, dto.email, dto.password, dto.phone) {
            Ok(request) => request,
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        };

    match data.auth.register.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "Registration completed");
            ApiResponse::created(AuthTokenResponse::from(response))
        }
        Err(RegisterUserError::EmailAlreadyRegistered) => {
            warn!("Registration rejected: email already registered");
            ApiResponse::bad_request("EMAIL_ALREADY_REGISTERED", "Email already registered")
        }
        Err(e) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::use_cases::auth_response::AuthResponse;
    use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_user;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockRegister(Result<AuthResponse, RegisterUserError>);

    #[async_trait]
    impl IRegisterUserUseCase for MockRegister {
        async fn execute(
            &self,
            _request: RegisterUserRequest,
        ) -> Result<AuthResponse, RegisterUserError> {
            self.0.clone()
        }
    }

    async fn call(use_case: MockRegister, body: serde_json::Value) -> (u16, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_register_user(use_case)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(crate::shared::api::custom_json_config())
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    fn payload() -> serde_json::Value {
        serde_json::json!({
            "full_name": "John Doe",
            "email": "john@example.com",
            "password": "secret123"
        })
    }

    #[actix_web::test]
    async fn test_register_success() {
        let user = sample_user(UserRole::Student);
        let ok = AuthResponse::bearer("jwt".to_string(), 86400, &user);

        let (status, body) = call(MockRegister(Ok(ok)), payload()).await;

        assert_eq!(status, 201);
        assert_eq!(body["data"]["user"]["email"], user.email);
        assert_eq!(body["data"]["user"]["role"], "student");
    }

    #[actix_web::test]
    async fn test_register_duplicate_email_is_bad_request() {
        let (status, body) = call(
            MockRegister(Err(RegisterUserError::EmailAlreadyRegistered)),
            payload(),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "EMAIL_ALREADY_REGISTERED");
    }

    #[actix_web::test]
    async fn test_register_short_password() {
        let (status, body) = call(
            MockRegister(Err(RegisterUserError::EmailAlreadyRegistered)),
            serde_json::json!({
                "full_name": "John Doe",
                "email": "john@example.com",
                "password": "123"
            }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_register_repository_failure() {
        let (status, _) = call(
            MockRegister(Err(RegisterUserError::RepositoryError("down".to_string()))),
            payload(),
        )
        .await;

        assert_eq!(status, 500);
    }
}
