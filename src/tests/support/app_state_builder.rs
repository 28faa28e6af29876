use actix_web::web;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;

use super::in_memory::InMemoryCourseStore;
use super::stubs::{StubLoginUseCase, StubRegisterUseCase, StubResolveUseCase};
use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::admin::application::service::{
    DeleteCourseService, GetAnalyticsService, GetDashboardService, ListCoursesService,
    ListEnrollmentsService, ListUsersService, UpdateCourseService, UpdateUserRoleService,
    UpdateUserStatusService,
};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::domain::entities::User;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::auth::application::use_cases::resolve_current_user::ResolveUserError;
use crate::course::application::course_use_cases::CourseUseCases;
use crate::course::application::ports::outgoing::{
    CourseQuery, CourseRepository, EnrollmentRepository,
};
use crate::course::application::service::{
    AddLessonService, CreateCourseService, DeleteLessonService, EnrollInCourseService,
    GetCourseService, GetCoursesService, GetLessonService, UpdateLessonService,
};
use crate::AppState;

fn course_use_cases<S>(store: S) -> CourseUseCases
where
    S: CourseQuery + CourseRepository + EnrollmentRepository + Clone + 'static,
{
    CourseUseCases {
        get_list: Arc::new(GetCoursesService::new(store.clone())),
        get_single: Arc::new(GetCourseService::new(store.clone())),
        create: Arc::new(CreateCourseService::new(store.clone())),
        add_lesson: Arc::new(AddLessonService::new(store.clone())),
        get_lesson: Arc::new(GetLessonService::new(store.clone())),
        update_lesson: Arc::new(UpdateLessonService::new(store.clone())),
        delete_lesson: Arc::new(DeleteLessonService::new(store.clone())),
        enroll: Arc::new(EnrollInCourseService::new(store.clone(), store)),
    }
}

fn admin_use_cases(store: InMemoryCourseStore) -> AdminUseCases {
    let users = store.user_store();
    AdminUseCases {
        dashboard: Arc::new(GetDashboardService::new(store.clone())),
        list_users: Arc::new(ListUsersService::new(store.clone())),
        update_user_role: Arc::new(UpdateUserRoleService::new(users.clone(), users.clone())),
        update_user_status: Arc::new(UpdateUserStatusService::new(users.clone(), users)),
        list_courses: Arc::new(ListCoursesService::new(store.clone())),
        update_course: Arc::new(UpdateCourseService::new(store.clone())),
        delete_course: Arc::new(DeleteCourseService::new(store.clone())),
        list_enrollments: Arc::new(ListEnrollmentsService::new(store.clone())),
        analytics: Arc::new(GetAnalyticsService::new(store)),
    }
}

/// Builds an `AppState` for handler tests. Every slot starts out wired to
/// an empty in-memory store, an anonymous caller and a database that
/// answers nothing.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    course: CourseUseCases,
    admin: AdminUseCases,
    db: DatabaseConnection,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let store = InMemoryCourseStore::default();
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUseCase),
                login: Arc::new(StubLoginUseCase),
                resolve_current_user: Arc::new(StubResolveUseCase(Err(
                    ResolveUserError::InvalidToken,
                ))),
            },
            course: course_use_cases(store.clone()),
            admin: admin_use_cases(store),
            db: MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        }
    }
}

impl TestAppStateBuilder {
    /// Any bearer token resolves to `user`.
    pub fn with_current_user(mut self, user: User) -> Self {
        self.auth.resolve_current_user = Arc::new(StubResolveUseCase(Ok(user)));
        self
    }

    pub fn with_resolve_error(mut self, err: ResolveUserError) -> Self {
        self.auth.resolve_current_user = Arc::new(StubResolveUseCase(Err(err)));
        self
    }

    pub fn with_login_user(mut self, use_case: impl ILoginUserUseCase + 'static) -> Self {
        self.auth.login = Arc::new(use_case);
        self
    }

    pub fn with_register_user(mut self, use_case: impl IRegisterUserUseCase + 'static) -> Self {
        self.auth.register = Arc::new(use_case);
        self
    }

    pub fn with_course_backend<S>(mut self, store: S) -> Self
    where
        S: CourseQuery + CourseRepository + EnrollmentRepository + Clone + 'static,
    {
        self.course = course_use_cases(store);
        self
    }

    pub fn with_admin_backend(mut self, store: InMemoryCourseStore) -> Self {
        self.admin = admin_use_cases(store);
        self
    }

    pub fn with_db(mut self, db: DatabaseConnection) -> Self {
        self.db = db;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            course: self.course,
            admin: self.admin,
            db: Arc::new(self.db),
            app_name: "Course Platform API".to_string(),
        })
    }
}
