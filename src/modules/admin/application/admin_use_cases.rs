use std::sync::Arc;

use crate::admin::application::ports::incoming::use_cases::{
    DeleteCourseUseCase, GetAnalyticsUseCase, GetDashboardUseCase, ListCoursesUseCase,
    ListEnrollmentsUseCase, ListUsersUseCase, UpdateCourseUseCase, UpdateUserRoleUseCase,
    UpdateUserStatusUseCase,
};

#[derive(Clone)]
pub struct AdminUseCases {
    pub dashboard: Arc<dyn GetDashboardUseCase + Send + Sync>,
    pub list_users: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub update_user_role: Arc<dyn UpdateUserRoleUseCase + Send + Sync>,
    pub update_user_status: Arc<dyn UpdateUserStatusUseCase + Send + Sync>,
    pub list_courses: Arc<dyn ListCoursesUseCase + Send + Sync>,
    pub update_course: Arc<dyn UpdateCourseUseCase + Send + Sync>,
    pub delete_course: Arc<dyn DeleteCourseUseCase + Send + Sync>,
    pub list_enrollments: Arc<dyn ListEnrollmentsUseCase + Send + Sync>,
    pub analytics: Arc<dyn GetAnalyticsUseCase + Send + Sync>,
}
