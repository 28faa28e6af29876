use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::auth_response::AuthResponse;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "john@example.com")]
    pub email: String,

    #[schema(example = "secret123")]
    pub password: String,
}

/// Token issued after register or login
#[derive(Serialize, ToSchema)]
pub struct AuthTokenResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    #[schema(example = "bearer")]
    pub token_type: String,

    /// Lifetime in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,

    pub user: AuthUserBody,
}

#[derive(Serialize, ToSchema)]
pub struct AuthUserBody {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "john@example.com")]
    pub email: String,

    #[schema(example = "student")]
    pub role: String,
}

impl From<AuthResponse> for AuthTokenResponse {
    fn from(response: AuthResponse) -> Self {
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            expires_in: response.expires_in,
            user: AuthUserBody {
                id: response.user.id.to_string(),
                full_name: response.user.full_name,
                email: response.user.email,
                role: response.user.role.to_string(),
            },
        }
    }
}

/// User login
///
/// Authenticates with email and password and returns a bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<AuthTokenResponse>)),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials or disabled account",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.login.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User logged in");
            ApiResponse::success(AuthTokenResponse::from(response))
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::AccountDisabled) => {
            ApiResponse::unauthorized("ACCOUNT_DISABLED", "Account is disabled")
        }

        Err(LoginError::PasswordVerificationFailed(ref e))
        | Err(LoginError::TokenGenerationFailed(ref e))
        | Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
