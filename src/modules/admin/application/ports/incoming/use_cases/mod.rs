mod delete_course;
mod get_analytics;
mod get_dashboard;
mod list_courses;
mod list_enrollments;
mod list_users;
mod update_course;
mod update_user_role;
mod update_user_status;

pub use delete_course::{DeleteCourseError, DeleteCourseUseCase};
pub use get_analytics::{AnalyticsReport, GetAnalyticsError, GetAnalyticsUseCase};
pub use get_dashboard::{DashboardReport, GetDashboardError, GetDashboardUseCase};
pub use list_courses::{AdminCourseSummary, ListCoursesError, ListCoursesUseCase};
pub use list_enrollments::{ListEnrollmentsError, ListEnrollmentsUseCase};
pub use list_users::{ListUsersError, ListUsersUseCase};
pub use update_course::{UpdateCourseError, UpdateCourseUseCase};
pub use update_user_role::{UpdateUserRoleError, UpdateUserRoleUseCase};
pub use update_user_status::{UpdateUserStatusError, UpdateUserStatusUseCase};
