pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::admin;
pub use modules::auth;
pub use modules::course;

use crate::admin::adapter::outgoing::admin_query_postgres::AdminQueryPostgres;
use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::admin::application::service::{
    DeleteCourseService, GetAnalyticsService, GetDashboardService, ListCoursesService,
    ListEnrollmentsService, ListUsersService, UpdateCourseService, UpdateUserRoleService,
    UpdateUserStatusService,
};
use crate::api::openapi::ApiDoc;
use crate::auth::adapter::incoming::web::extractors::require_admin;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::login_user::LoginUserUseCase;
use crate::auth::application::use_cases::register_user::RegisterUserUseCase;
use crate::auth::application::use_cases::resolve_current_user::ResolveCurrentUserUseCase;
use crate::config::AppConfig;
use crate::course::adapter::outgoing::course_query_postgres::CourseQueryPostgres;
use crate::course::adapter::outgoing::course_repository_postgres::CourseRepositoryPostgres;
use crate::course::adapter::outgoing::enrollment_repository_postgres::EnrollmentRepositoryPostgres;
use crate::course::application::course_use_cases::CourseUseCases;
use crate::course::application::service::{
    AddLessonService, CreateCourseService, DeleteLessonService, EnrollInCourseService,
    GetCourseService, GetCoursesService, GetLessonService, UpdateLessonService,
};
use crate::shared::api::{custom_json_config, custom_path_config};

use actix_web::middleware::{from_fn, Logger};
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub course: CourseUseCases,
    pub admin: AdminUseCases,
    pub db: Arc<DatabaseConnection>,
    pub app_name: String,
}

#[cfg(not(tarpaulin_include))]
fn build_state(db: Arc<DatabaseConnection>, app_name: String) -> anyhow::Result<AppState> {
    let token_provider: Arc<dyn TokenProvider> =
        Arc::new(JwtTokenService::new(JwtConfig::from_env()?));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_env()?);

    let user_query = UserQueryPostgres::new(Arc::clone(&db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db));
    let course_query = CourseQueryPostgres::new(Arc::clone(&db));
    let course_repo = CourseRepositoryPostgres::new(Arc::clone(&db));
    let enrollment_repo = EnrollmentRepositoryPostgres::new(Arc::clone(&db));
    let admin_query = AdminQueryPostgres::new(Arc::clone(&db));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&password_hasher),
            Arc::clone(&token_provider),
        )),
        login: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            password_hasher,
            Arc::clone(&token_provider),
        )),
        resolve_current_user: Arc::new(ResolveCurrentUserUseCase::new(
            user_query.clone(),
            token_provider,
        )),
    };

    let course = CourseUseCases {
        get_list: Arc::new(GetCoursesService::new(course_query.clone())),
        get_single: Arc::new(GetCourseService::new(course_query.clone())),
        create: Arc::new(CreateCourseService::new(course_repo.clone())),
        add_lesson: Arc::new(AddLessonService::new(course_repo.clone())),
        get_lesson: Arc::new(GetLessonService::new(course_query.clone())),
        update_lesson: Arc::new(UpdateLessonService::new(course_repo.clone())),
        delete_lesson: Arc::new(DeleteLessonService::new(course_repo.clone())),
        enroll: Arc::new(EnrollInCourseService::new(course_query, enrollment_repo)),
    };

    let admin = AdminUseCases {
        dashboard: Arc::new(GetDashboardService::new(admin_query.clone())),
        list_users: Arc::new(ListUsersService::new(admin_query.clone())),
        update_user_role: Arc::new(UpdateUserRoleService::new(
            user_query.clone(),
            user_repo.clone(),
        )),
        update_user_status: Arc::new(UpdateUserStatusService::new(user_query, user_repo)),
        list_courses: Arc::new(ListCoursesService::new(admin_query.clone())),
        update_course: Arc::new(UpdateCourseService::new(course_repo.clone())),
        delete_course: Arc::new(DeleteCourseService::new(course_repo)),
        list_enrollments: Arc::new(ListEnrollmentsService::new(admin_query.clone())),
        analytics: Arc::new(GetAnalyticsService::new(admin_query)),
    };

    Ok(AppState {
        auth,
        course,
        admin,
        db,
        app_name,
    })
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    config::load_env_file();
    let app_config = AppConfig::from_env()?;

    // Database connection
    let mut opt = ConnectOptions::new(app_config.database_url.clone());
    opt.max_connections(app_config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&conn, None)
        .await
        .context("Failed to run migrations")?;

    let state = build_state(Arc::new(conn), app_config.app_name.clone())?;

    let server_url = app_config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(
                web::scope("/api/admin")
                    .wrap(from_fn(require_admin))
                    .configure(crate::admin::adapter::incoming::web::routes::configure),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_current_user_handler);
    // Courses
    cfg.service(crate::course::adapter::incoming::web::routes::get_courses_handler);
    cfg.service(crate::course::adapter::incoming::web::routes::create_course_handler);
    cfg.service(crate::course::adapter::incoming::web::routes::get_course_handler);
    cfg.service(crate::course::adapter::incoming::web::routes::add_lesson_handler);
    cfg.service(crate::course::adapter::incoming::web::routes::get_lesson_handler);
    cfg.service(crate::course::adapter::incoming::web::routes::update_lesson_handler);
    cfg.service(crate::course::adapter::incoming::web::routes::delete_lesson_handler);
    cfg.service(crate::course::adapter::incoming::web::routes::enroll_in_course_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!("Error starting app: {e:#}");
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
