use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::dto::{CourseStatsResponse, MonthlyTrendResponse, TypeDistributionResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyticsResponse {
    /// Six calendar months, oldest first, ending with the current one
    pub monthly_trends: Vec<MonthlyTrendResponse>,
    pub course_type_distribution: TypeDistributionResponse,
    /// Five courses with the most completed enrollments
    pub top_courses: Vec<CourseStatsResponse>,
}

/// Enrollment trends and course rankings
#[utoipa::path(
    get,
    path = "/api/admin/analytics",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Analytics", body = inline(SuccessResponse<AnalyticsResponse>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/analytics")]
pub async fn get_analytics_handler(data: web::Data<AppState>) -> impl Responder {
    match data.admin.analytics.execute().await {
        Ok(report) => ApiResponse::success(AnalyticsResponse {
            monthly_trends: report
                .monthly_trends
                .into_iter()
                .map(MonthlyTrendResponse::from)
                .collect(),
            course_type_distribution: report.course_type_distribution.into(),
            top_courses: report
                .top_courses
                .into_iter()
                .map(CourseStatsResponse::from)
                .collect(),
        }),
        Err(e) => {
            error!("Failed to build analytics: {}", e);
            ApiResponse::internal_error()
        }
    }
}
