use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: &'static str,
    #[schema(example = "Course Platform API")]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    #[schema(example = "ready")]
    pub status: &'static str,
    #[schema(example = "ok")]
    pub database: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
#[get("/api/health")]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        message: state.app_name.clone(),
    })
}

/// READINESS PROBE
/// - Pings the database
#[utoipa::path(
    get,
    path = "/api/ready",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = ReadinessResponse),
        (status = 503, description = "Database unreachable")
    )
)]
#[get("/api/ready")]
pub async fn readiness(state: web::Data<AppState>) -> impl Responder {
    let db = &state.db;
    match db
        .execute(Statement::from_string(db.get_database_backend(), "SELECT 1"))
        .await
    {
        Ok(_) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ready",
            database: "ok",
        }),
        Err(e) => {
            error!("Readiness check failed: {}", e);
            ApiResponse::service_unavailable("DATABASE_UNAVAILABLE", "Database is not reachable")
        }
    }
}
