use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::admin::application::ports::outgoing::{AdminQuery, AdminQueryError};
use crate::auth::application::domain::entities::{NewUser, User, UserRole};
use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, TokenClaims, TokenError, TokenProvider, UserQuery, UserQueryError,
    UserRepository, UserRepositoryError,
};
use crate::auth::application::use_cases::auth_response::AuthResponse;
use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginError, LoginRequest};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserRequest,
};
use crate::auth::application::use_cases::resolve_current_user::{
    IResolveCurrentUserUseCase, ResolveUserError,
};
use crate::course::application::domain::entities::{Course, Enrollment, Lesson};
use crate::course::application::domain::lessons::LessonDraft;
use crate::course::application::ports::outgoing::{
    CourseChanges, CourseQuery, CourseQueryError, CourseRepository, CourseRepositoryError,
    EnrollmentRepository, EnrollmentRepositoryError, NewCourse,
};

const DB_DOWN: &str = "db down";

//
// ──────────────────────────────────────────────────────────
// Security ports
// ──────────────────────────────────────────────────────────
//

/// Stores passwords as `hashed:<password>`.
pub struct PlainTextHasher;

#[async_trait]
impl PasswordHasher for PlainTextHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

/// Issues readable `stub|<uid>|<role>|<email>` tokens.
#[derive(Default)]
pub struct StubTokenProvider;

impl StubTokenProvider {
    pub const EXPIRED_TOKEN: &'static str = "stub-expired";
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(
        &self,
        user_id: Uuid,
        email: &str,
        role: UserRole,
    ) -> Result<String, TokenError> {
        Ok(format!("stub|{user_id}|{role}|{email}"))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        if token == Self::EXPIRED_TOKEN {
            return Err(TokenError::TokenExpired);
        }

        let mut parts = token.splitn(4, '|');
        let (Some("stub"), Some(uid), Some(role), Some(email)) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::MalformedToken);
        };
        let uid = Uuid::parse_str(uid).map_err(|_| TokenError::MalformedToken)?;
        let role = role.parse::<UserRole>().map_err(|_| TokenError::MalformedToken)?;

        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            sub: email.to_string(),
            uid,
            role,
            iss: "stub".to_string(),
            exp: now + self.access_token_expiry(),
            iat: now,
            nbf: now,
            token_type: "access".to_string(),
        })
    }

    fn access_token_expiry(&self) -> i64 {
        86400
    }
}

//
// ──────────────────────────────────────────────────────────
// Auth use cases
// ──────────────────────────────────────────────────────────
//

pub struct StubLoginUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<AuthResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubRegisterUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUseCase {
    async fn execute(
        &self,
        _request: RegisterUserRequest,
    ) -> Result<AuthResponse, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(DB_DOWN.to_string()))
    }
}

/// Resolves every bearer token to the same outcome.
pub struct StubResolveUseCase(pub Result<User, ResolveUserError>);

#[async_trait]
impl IResolveCurrentUserUseCase for StubResolveUseCase {
    async fn execute(&self, _token: &str) -> Result<User, ResolveUserError> {
        self.0.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// A store whose backend is unreachable
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Default)]
pub struct FailingStore;

#[async_trait]
impl CourseQuery for FailingStore {
    async fn list_active(&self) -> Result<Vec<Course>, CourseQueryError> {
        Err(CourseQueryError::DatabaseError(DB_DOWN.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Course>, CourseQueryError> {
        Err(CourseQueryError::DatabaseError(DB_DOWN.to_string()))
    }

    async fn find_by_id(&self, _course_id: Uuid) -> Result<Option<Course>, CourseQueryError> {
        Err(CourseQueryError::DatabaseError(DB_DOWN.to_string()))
    }
}

#[async_trait]
impl CourseRepository for FailingStore {
    async fn create_course(&self, _data: NewCourse) -> Result<Course, CourseRepositoryError> {
        Err(CourseRepositoryError::DatabaseError(DB_DOWN.to_string()))
    }

    async fn update_course(
        &self,
        _course_id: Uuid,
        _changes: CourseChanges,
    ) -> Result<Course, CourseRepositoryError> {
        Err(CourseRepositoryError::DatabaseError(DB_DOWN.to_string()))
    }

    async fn delete_course(&self, _course_id: Uuid) -> Result<(), CourseRepositoryError> {
        Err(CourseRepositoryError::DatabaseError(DB_DOWN.to_string()))
    }

    async fn add_lesson(
        &self,
        _course_id: Uuid,
        _draft: LessonDraft,
    ) -> Result<Lesson, CourseRepositoryError> {
        Err(CourseRepositoryError::DatabaseError(DB_DOWN.to_string()))
    }

    async fn update_lesson(
        &self,
        _course_id: Uuid,
        _lesson_id: Uuid,
        _draft: LessonDraft,
    ) -> Result<Lesson, CourseRepositoryError> {
        Err(CourseRepositoryError::DatabaseError(DB_DOWN.to_string()))
    }

    async fn delete_lesson(
        &self,
        _course_id: Uuid,
        _lesson_id: Uuid,
    ) -> Result<(), CourseRepositoryError> {
        Err(CourseRepositoryError::DatabaseError(DB_DOWN.to_string()))
    }
}

#[async_trait]
impl EnrollmentRepository for FailingStore {
    async fn enroll_free(
        &self,
        _user_id: Uuid,
        _course_id: Uuid,
    ) -> Result<Enrollment, EnrollmentRepositoryError> {
        Err(EnrollmentRepositoryError::DatabaseError(DB_DOWN.to_string()))
    }

    async fn begin_paid_enrollment(
        &self,
        _user_id: Uuid,
        _course_id: Uuid,
    ) -> Result<Enrollment, EnrollmentRepositoryError> {
        Err(EnrollmentRepositoryError::DatabaseError(DB_DOWN.to_string()))
    }
}

#[async_trait]
impl UserQuery for FailingStore {
    async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        Err(UserQueryError::DatabaseError(DB_DOWN.to_string()))
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
        Err(UserQueryError::DatabaseError(DB_DOWN.to_string()))
    }
}

#[async_trait]
impl UserRepository for FailingStore {
    async fn create_user(&self, _user: NewUser) -> Result<User, UserRepositoryError> {
        Err(UserRepositoryError::DatabaseError(DB_DOWN.to_string()))
    }

    async fn update_role(&self, _user_id: Uuid, _role: UserRole) -> Result<User, UserRepositoryError> {
        Err(UserRepositoryError::DatabaseError(DB_DOWN.to_string()))
    }

    async fn set_active(&self, _user_id: Uuid, _is_active: bool) -> Result<User, UserRepositoryError> {
        Err(UserRepositoryError::DatabaseError(DB_DOWN.to_string()))
    }
}

#[async_trait]
impl AdminQuery for FailingStore {
    async fn list_users(&self) -> Result<Vec<User>, AdminQueryError> {
        Err(AdminQueryError::DatabaseError(DB_DOWN.to_string()))
    }

    async fn list_courses(&self) -> Result<Vec<Course>, AdminQueryError> {
        Err(AdminQueryError::DatabaseError(DB_DOWN.to_string()))
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, AdminQueryError> {
        Err(AdminQueryError::DatabaseError(DB_DOWN.to_string()))
    }
}
