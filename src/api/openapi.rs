use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::admin::adapter::incoming::web::routes::dto::{
    AdminCourseResponse, AdminCourseUpdateDto, AdminUserResponse, CourseStatsResponse,
    EnrollmentResponse, MonthlyTrendResponse, RoleUpdateDto, StatusUpdateDto,
    TypeDistributionResponse,
};
use crate::admin::adapter::incoming::web::routes::{
    AdminCourseListResponse, AnalyticsResponse, CourseUpdatedResponse, DashboardResponse,
    EnrollmentListResponse, UserListResponse, UserUpdatedResponse,
};
use crate::auth::adapter::incoming::web::routes::{
    AuthTokenResponse, AuthUserBody, CurrentUserResponse, LoginRequestDto, RegisterUserRequestDto,
};
use crate::course::adapter::incoming::web::routes::dto::{
    CourseRequestDto, CourseResponse, LessonRequestDto, LessonResponse, MessageResponse,
};
use crate::course::adapter::incoming::web::routes::{
    CourseCreatedResponse, CourseDetailResponse, CourseListResponse, EnrolledResponse,
    LessonAddedResponse, LessonUpdatedResponse, PaymentRequiredResponse,
};
use crate::health::{HealthResponse, ReadinessResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course Platform API",
        version = "1.0.0",
        description = "Course catalogue, enrollment and administration API",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::readiness,

        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::fetch_current_user_handler,

        // Course endpoints
        crate::course::adapter::incoming::web::routes::get_courses_handler,
        crate::course::adapter::incoming::web::routes::get_course_handler,
        crate::course::adapter::incoming::web::routes::create_course_handler,
        crate::course::adapter::incoming::web::routes::add_lesson_handler,
        crate::course::adapter::incoming::web::routes::get_lesson_handler,
        crate::course::adapter::incoming::web::routes::update_lesson_handler,
        crate::course::adapter::incoming::web::routes::delete_lesson_handler,
        crate::course::adapter::incoming::web::routes::enroll_in_course_handler,

        // Admin endpoints
        crate::admin::adapter::incoming::web::routes::get_dashboard_handler,
        crate::admin::adapter::incoming::web::routes::get_users_handler,
        crate::admin::adapter::incoming::web::routes::update_user_role_handler,
        crate::admin::adapter::incoming::web::routes::update_user_status_handler,
        crate::admin::adapter::incoming::web::routes::get_admin_courses_handler,
        crate::admin::adapter::incoming::web::routes::update_course_handler,
        crate::admin::adapter::incoming::web::routes::delete_course_handler,
        crate::admin::adapter::incoming::web::routes::get_enrollments_handler,
        crate::admin::adapter::incoming::web::routes::get_analytics_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            HealthResponse,
            ReadinessResponse,

            // Auth DTOs
            RegisterUserRequestDto,
            LoginRequestDto,
            AuthTokenResponse,
            AuthUserBody,
            CurrentUserResponse,

            // Course DTOs
            CourseRequestDto,
            CourseResponse,
            LessonRequestDto,
            LessonResponse,
            MessageResponse,
            CourseListResponse,
            CourseDetailResponse,
            CourseCreatedResponse,
            LessonAddedResponse,
            LessonUpdatedResponse,
            EnrolledResponse,
            PaymentRequiredResponse,

            // Admin DTOs
            RoleUpdateDto,
            StatusUpdateDto,
            AdminCourseUpdateDto,
            AdminUserResponse,
            AdminCourseResponse,
            EnrollmentResponse,
            CourseStatsResponse,
            MonthlyTrendResponse,
            TypeDistributionResponse,
            DashboardResponse,
            AnalyticsResponse,
            UserListResponse,
            UserUpdatedResponse,
            AdminCourseListResponse,
            CourseUpdatedResponse,
            EnrollmentListResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "auth", description = "Registration, login and current user"),
        (name = "courses", description = "Course catalogue, lessons and enrollment"),
        (name = "admin", description = "Administration endpoints, admin roles only"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
