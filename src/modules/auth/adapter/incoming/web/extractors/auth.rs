use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{Payload, ServiceRequest, ServiceResponse},
    middleware::Next,
    web, Error as ActixError, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures::future::LocalBoxFuture;
use std::ops::Deref;
use tracing::{error, warn};

use crate::auth::application::domain::entities::User;
use crate::auth::application::use_cases::resolve_current_user::ResolveUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn map_resolve_error(err: ResolveUserError) -> HttpResponse {
    match err {
        ResolveUserError::TokenExpired => {
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Token has expired")
        }
        ResolveUserError::InvalidToken => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }
        ResolveUserError::UserNotFound => {
            ApiResponse::unauthorized("USER_NOT_FOUND", "User not found")
        }
        ResolveUserError::AccountDisabled => {
            ApiResponse::unauthorized("ACCOUNT_DISABLED", "Account is disabled")
        }
        ResolveUserError::QueryError(msg) => {
            error!("Failed to resolve current user: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// The caller, resolved from the bearer token and reloaded from the store.
///
/// Resolution happens once per request; later extractors reuse the copy
/// cached in the request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl Deref for CurrentUser {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl CurrentUser {
    pub fn into_inner(self) -> User {
        self.0
    }

    pub async fn resolve(req: &HttpRequest) -> Result<Self, ActixError> {
        let cached = req.extensions().get::<CurrentUser>().cloned();
        if let Some(current) = cached {
            return Ok(current);
        }

        let state = req
            .app_data::<web::Data<AppState>>()
            .cloned()
            .ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

        let token = extract_token_from_header(req).ok_or_else(|| {
            create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ))
        })?;

        let user = state
            .auth
            .resolve_current_user
            .execute(&token)
            .await
            .map_err(|e| create_api_error(map_resolve_error(e)))?;

        let current = CurrentUser(user);
        req.extensions_mut().insert(current.clone());
        Ok(current)
    }
}

impl FromRequest for CurrentUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move { CurrentUser::resolve(&req).await })
    }
}

/// Instructor, admin or super admin.
#[derive(Debug, Clone)]
pub struct StaffUser(pub User);

impl Deref for StaffUser {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for StaffUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let current = CurrentUser::resolve(&req).await?;
            if !current.role.is_staff() {
                warn!(user_id = %current.id, "Staff-only endpoint called by student");
                return Err(create_api_error(ApiResponse::forbidden(
                    "STAFF_REQUIRED",
                    "Instructor or admin access required",
                )));
            }
            Ok(StaffUser(current.into_inner()))
        })
    }
}

/// Admin or super admin.
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

impl Deref for AdminUser {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn admin_required() -> ActixError {
    create_api_error(ApiResponse::forbidden(
        "ADMIN_REQUIRED",
        "Admin access required",
    ))
}

impl AdminUser {
    async fn resolve(req: &HttpRequest) -> Result<Self, ActixError> {
        let current = CurrentUser::resolve(req).await?;
        if !current.role.is_admin() {
            warn!(user_id = %current.id, path = %req.path(), "Admin endpoint called by non-admin");
            return Err(admin_required());
        }
        Ok(AdminUser(current.into_inner()))
    }
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move { AdminUser::resolve(&req).await })
    }
}

/// Scope middleware for `/api/admin`. Rejects non-admins before any
/// handler extractor (path, body) gets a chance to fail first.
pub async fn require_admin(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<EitherBody<impl MessageBody>>, ActixError> {
    if let Err(err) = AdminUser::resolve(req.request()).await {
        let response = err.error_response();
        return Ok(req.into_response(response).map_into_right_body());
    }
    next.call(req).await.map(ServiceResponse::map_into_left_body)
}
