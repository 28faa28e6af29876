//! Mutex-backed stores that honour the same contracts as the Postgres adapters.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::admin::application::ports::outgoing::{AdminQuery, AdminQueryError};
use crate::auth::application::domain::entities::{NewUser, User, UserRole};
use crate::auth::application::ports::outgoing::{
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::course::application::domain::entities::{Course, Enrollment, Lesson, PaymentStatus};
use crate::course::application::domain::lessons::{
    append_lesson, remove_lesson, replace_lesson, total_duration, LessonDraft,
};
use crate::course::application::ports::outgoing::{
    CourseChanges, CourseQuery, CourseQueryError, CourseRepository, CourseRepositoryError,
    EnrollmentRepository, EnrollmentRepositoryError, NewCourse,
};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn newest_first<T: Clone>(items: &[T], key: impl Fn(&T) -> chrono::DateTime<Utc>) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| std::cmp::Reverse(key(item)));
    sorted
}

//
// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserStore {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn users(&self) -> Vec<User> {
        lock(&self.users).clone()
    }

    fn user(&self, user_id: Uuid) -> Option<User> {
        lock(&self.users).iter().find(|u| u.id == user_id).cloned()
    }

    fn update<F>(&self, user_id: Uuid, apply: F) -> Result<User, UserRepositoryError>
    where
        F: FnOnce(&mut User),
    {
        let mut users = lock(&self.users);
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        apply(user);
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl UserQuery for InMemoryUserStore {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        Ok(self.user(user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(lock(&self.users).iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepositoryError> {
        let mut users = lock(&self.users);
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            full_name: new_user.full_name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            phone: new_user.phone,
            enrolled_courses: vec![],
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update_role(&self, user_id: Uuid, role: UserRole) -> Result<User, UserRepositoryError> {
        self.update(user_id, |u| u.role = role)
    }

    async fn set_active(&self, user_id: Uuid, is_active: bool) -> Result<User, UserRepositoryError> {
        self.update(user_id, |u| u.is_active = is_active)
    }
}

//
// ──────────────────────────────────────────────────────────
// Courses, enrollments and the admin read side
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct InMemoryCourseStore {
    courses: Arc<Mutex<Vec<Course>>>,
    enrollments: Arc<Mutex<Vec<Enrollment>>>,
    users: InMemoryUserStore,
}

impl InMemoryCourseStore {
    pub fn with_courses(self, courses: Vec<Course>) -> Self {
        lock(&self.courses).extend(courses);
        self
    }

    pub fn with_enrollments(self, enrollments: Vec<Enrollment>) -> Self {
        lock(&self.enrollments).extend(enrollments);
        self
    }

    pub fn with_users(mut self, users: InMemoryUserStore) -> Self {
        self.users = users;
        self
    }

    pub fn user_store(&self) -> InMemoryUserStore {
        self.users.clone()
    }

    pub fn courses(&self) -> Vec<Course> {
        lock(&self.courses).clone()
    }

    pub fn course(&self, course_id: Uuid) -> Option<Course> {
        lock(&self.courses).iter().find(|c| c.id == course_id).cloned()
    }

    pub fn user(&self, user_id: Uuid) -> Option<User> {
        self.users.user(user_id)
    }

    pub fn enrollments(&self) -> Vec<Enrollment> {
        lock(&self.enrollments).clone()
    }

    fn with_course_mut<T, F>(&self, course_id: Uuid, apply: F) -> Result<T, CourseRepositoryError>
    where
        F: FnOnce(&mut Course) -> Result<T, CourseRepositoryError>,
    {
        let mut courses = lock(&self.courses);
        let course = courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or(CourseRepositoryError::NotFound)?;
        let out = apply(course)?;
        course.total_duration = total_duration(&course.lessons);
        course.updated_at = Utc::now();
        Ok(out)
    }
}

#[async_trait]
impl CourseQuery for InMemoryCourseStore {
    async fn list_active(&self) -> Result<Vec<Course>, CourseQueryError> {
        let active: Vec<Course> = self.courses().into_iter().filter(|c| c.is_active).collect();
        Ok(newest_first(&active, |c| c.created_at))
    }

    async fn list_all(&self) -> Result<Vec<Course>, CourseQueryError> {
        Ok(newest_first(&self.courses(), |c| c.created_at))
    }

    async fn find_by_id(&self, course_id: Uuid) -> Result<Option<Course>, CourseQueryError> {
        Ok(self.course(course_id))
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseStore {
    async fn create_course(&self, data: NewCourse) -> Result<Course, CourseRepositoryError> {
        let now = Utc::now();
        let course = Course {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            instructor_name: data.instructor_name,
            instructor_id: data.instructor_id,
            course_type: data.course_type,
            price: data.price,
            thumbnail_url: data.thumbnail_url,
            category: data.category,
            tags: data.tags,
            lessons: vec![],
            total_duration: None,
            student_count: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        lock(&self.courses).push(course.clone());
        Ok(course)
    }

    async fn update_course(
        &self,
        course_id: Uuid,
        changes: CourseChanges,
    ) -> Result<Course, CourseRepositoryError> {
        self.with_course_mut(course_id, |course| {
            course.title = changes.title;
            course.description = changes.description;
            course.instructor_name = changes.instructor_name;
            course.course_type = changes.course_type;
            course.price = changes.price;
            course.thumbnail_url = changes.thumbnail_url;
            course.category = changes.category;
            course.tags = changes.tags;
            if let Some(is_active) = changes.is_active {
                course.is_active = is_active;
            }
            Ok(())
        })?;
        self.course(course_id).ok_or(CourseRepositoryError::NotFound)
    }

    async fn delete_course(&self, course_id: Uuid) -> Result<(), CourseRepositoryError> {
        let mut courses = lock(&self.courses);
        if !courses.iter().any(|c| c.id == course_id) {
            return Err(CourseRepositoryError::NotFound);
        }

        let attached = lock(&self.enrollments)
            .iter()
            .filter(|e| e.course_id == course_id)
            .count() as u64;
        if attached > 0 {
            return Err(CourseRepositoryError::HasEnrollments(attached));
        }

        courses.retain(|c| c.id != course_id);
        Ok(())
    }

    async fn add_lesson(
        &self,
        course_id: Uuid,
        draft: LessonDraft,
    ) -> Result<Lesson, CourseRepositoryError> {
        self.with_course_mut(course_id, |course| Ok(append_lesson(&mut course.lessons, draft)))
    }

    async fn update_lesson(
        &self,
        course_id: Uuid,
        lesson_id: Uuid,
        draft: LessonDraft,
    ) -> Result<Lesson, CourseRepositoryError> {
        self.with_course_mut(course_id, |course| {
            replace_lesson(&mut course.lessons, lesson_id, draft)
                .ok_or(CourseRepositoryError::LessonNotFound)
        })
    }

    async fn delete_lesson(
        &self,
        course_id: Uuid,
        lesson_id: Uuid,
    ) -> Result<(), CourseRepositoryError> {
        self.with_course_mut(course_id, |course| {
            if remove_lesson(&mut course.lessons, lesson_id) {
                Ok(())
            } else {
                Err(CourseRepositoryError::LessonNotFound)
            }
        })
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryCourseStore {
    async fn enroll_free(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Enrollment, EnrollmentRepositoryError> {
        let mut users = lock(&self.users.users);
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(EnrollmentRepositoryError::UserNotFound)?;
        if user.enrolled_courses.contains(&course_id) {
            return Err(EnrollmentRepositoryError::AlreadyEnrolled);
        }

        let mut courses = lock(&self.courses);
        let course = courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or(EnrollmentRepositoryError::CourseNotFound)?;

        user.enrolled_courses.push(course_id);
        course.student_count += 1;

        let enrollment = new_enrollment(user_id, course_id, PaymentStatus::Completed);
        lock(&self.enrollments).push(enrollment.clone());
        Ok(enrollment)
    }

    async fn begin_paid_enrollment(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Enrollment, EnrollmentRepositoryError> {
        if self.users.user(user_id).is_none() {
            return Err(EnrollmentRepositoryError::UserNotFound);
        }
        if self.course(course_id).is_none() {
            return Err(EnrollmentRepositoryError::CourseNotFound);
        }

        let mut enrollments = lock(&self.enrollments);
        let pending = enrollments.iter().find(|e| {
            e.user_id == user_id
                && e.course_id == course_id
                && e.payment_status == PaymentStatus::Pending
        });
        if let Some(existing) = pending {
            return Ok(existing.clone());
        }

        let enrollment = new_enrollment(user_id, course_id, PaymentStatus::Pending);
        enrollments.push(enrollment.clone());
        Ok(enrollment)
    }
}

fn new_enrollment(user_id: Uuid, course_id: Uuid, status: PaymentStatus) -> Enrollment {
    Enrollment {
        id: Uuid::new_v4(),
        user_id,
        course_id,
        enrolled_at: Utc::now(),
        payment_status: status,
        transaction_id: None,
        progress: 0.0,
        completed_lessons: vec![],
    }
}

#[async_trait]
impl AdminQuery for InMemoryCourseStore {
    async fn list_users(&self) -> Result<Vec<User>, AdminQueryError> {
        Ok(newest_first(&self.users.users(), |u| u.created_at))
    }

    async fn list_courses(&self) -> Result<Vec<Course>, AdminQueryError> {
        Ok(newest_first(&self.courses(), |c| c.created_at))
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, AdminQueryError> {
        Ok(newest_first(&self.enrollments(), |e| e.enrolled_at))
    }
}

#[async_trait]
impl UserQuery for InMemoryCourseStore {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        self.users.find_by_id(user_id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        self.users.find_by_email(email).await
    }
}

#[async_trait]
impl UserRepository for InMemoryCourseStore {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        self.users.create_user(user).await
    }

    async fn update_role(&self, user_id: Uuid, role: UserRole) -> Result<User, UserRepositoryError> {
        self.users.update_role(user_id, role).await
    }

    async fn set_active(&self, user_id: Uuid, is_active: bool) -> Result<User, UserRepositoryError> {
        self.users.set_active(user_id, is_active).await
    }
}
