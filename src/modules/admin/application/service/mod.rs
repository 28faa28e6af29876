pub mod delete_course_service;
pub mod get_analytics_service;
pub mod get_dashboard_service;
pub mod list_courses_service;
pub mod list_enrollments_service;
pub mod list_users_service;
pub mod update_course_service;
pub mod update_user_role_service;
pub mod update_user_status_service;

pub use delete_course_service::DeleteCourseService;
pub use get_analytics_service::GetAnalyticsService;
pub use get_dashboard_service::GetDashboardService;
pub use list_courses_service::ListCoursesService;
pub use list_enrollments_service::ListEnrollmentsService;
pub use list_users_service::ListUsersService;
pub use update_course_service::UpdateCourseService;
pub use update_user_role_service::UpdateUserRoleService;
pub use update_user_status_service::UpdateUserStatusService;
