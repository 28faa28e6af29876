use actix_web::web;

mod delete_course;
pub mod dto;
mod get_analytics;
mod get_courses;
mod get_dashboard;
mod get_enrollments;
mod get_users;
mod update_course;
mod update_user_role;
mod update_user_status;

pub use delete_course::delete_course_handler;
pub use get_analytics::{get_analytics_handler, AnalyticsResponse};
pub use get_courses::{get_admin_courses_handler, AdminCourseListResponse};
pub use get_dashboard::{get_dashboard_handler, DashboardResponse};
pub use get_enrollments::{get_enrollments_handler, EnrollmentListResponse};
pub use get_users::{get_users_handler, UserListResponse};
pub use update_course::{update_course_handler, CourseUpdatedResponse};
pub use update_user_role::{update_user_role_handler, UserUpdatedResponse};
pub use update_user_status::update_user_status_handler;

// OpenAPI path items
pub use delete_course::__path_delete_course_handler;
pub use get_analytics::__path_get_analytics_handler;
pub use get_courses::__path_get_admin_courses_handler;
pub use get_dashboard::__path_get_dashboard_handler;
pub use get_enrollments::__path_get_enrollments_handler;
pub use get_users::__path_get_users_handler;
pub use update_course::__path_update_course_handler;
pub use update_user_role::__path_update_user_role_handler;
pub use update_user_status::__path_update_user_status_handler;

/// Registers the admin handlers. Mount inside the `/api/admin` scope,
/// behind `require_admin`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_dashboard_handler)
        .service(get_users_handler)
        .service(update_user_role_handler)
        .service(update_user_status_handler)
        .service(get_admin_courses_handler)
        .service(update_course_handler)
        .service(delete_course_handler)
        .service(get_enrollments_handler)
        .service(get_analytics_handler);
}
