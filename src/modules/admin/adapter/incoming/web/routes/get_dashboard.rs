use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::dto::{CourseStatsResponse, EnrollmentResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    /// Active courses
    pub total_courses: u64,
    /// Active students
    pub total_students: u64,
    /// Active instructors
    pub total_instructors: u64,
    /// Completed enrollments
    pub total_enrollments: u64,
    pub total_revenue: f64,
    /// The five newest enrollments
    pub recent_enrollments: Vec<EnrollmentResponse>,
    pub course_stats: Vec<CourseStatsResponse>,
}

/// Platform totals for the admin dashboard
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard figures", body = inline(SuccessResponse<DashboardResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/dashboard")]
pub async fn get_dashboard_handler(data: web::Data<AppState>) -> impl Responder {
    match data.admin.dashboard.execute().await {
        Ok(report) => ApiResponse::success(DashboardResponse {
            total_courses: report.totals.total_courses,
            total_students: report.totals.total_students,
            total_instructors: report.totals.total_instructors,
            total_enrollments: report.totals.total_enrollments,
            total_revenue: report.totals.total_revenue,
            recent_enrollments: report
                .recent_enrollments
                .into_iter()
                .map(EnrollmentResponse::from)
                .collect(),
            course_stats: report
                .course_stats
                .into_iter()
                .map(CourseStatsResponse::from)
                .collect(),
        }),
        Err(e) => {
            error!("Failed to build dashboard: {}", e);
            ApiResponse::internal_error()
        }
    }
}
