use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::admin::application::domain::analytics::{
    CourseStats, EnrichedEnrollment, MonthlyTrend, TypeDistribution,
};
use crate::admin::application::ports::incoming::use_cases::AdminCourseSummary;
use crate::auth::application::domain::entities::User;
use crate::course::adapter::incoming::web::routes::dto::{CourseRequestDto, CourseResponse};

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RoleUpdateDto {
    /// One of `student`, `instructor`, `admin`, `super_admin`
    #[schema(example = "instructor")]
    pub role: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct StatusUpdateDto {
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AdminCourseUpdateDto {
    #[serde(flatten)]
    pub course: CourseRequestDto,
    /// Omit to keep the current status
    pub is_active: Option<bool>,
}

//
// ──────────────────────────────────────────────────────────
// Response DTOs
// ──────────────────────────────────────────────────────────
//

/// A user as shown to admins. Never carries the password hash.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminUserResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    #[schema(example = "student")]
    pub role: String,
    pub phone: Option<String>,
    pub enrolled_courses: Vec<Uuid>,
    pub total_enrollments: usize,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for AdminUserResponse {
    fn from(user: User) -> Self {
        AdminUserResponse {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: user.role.to_string(),
            phone: user.phone,
            total_enrollments: user.enrolled_courses.len(),
            enrolled_courses: user.enrolled_courses,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminCourseResponse {
    #[serde(flatten)]
    pub course: CourseResponse,
    /// Completed enrollments
    pub total_enrollments: u64,
    pub revenue: f64,
    pub lesson_count: usize,
}

impl From<AdminCourseSummary> for AdminCourseResponse {
    fn from(summary: AdminCourseSummary) -> Self {
        AdminCourseResponse {
            lesson_count: summary.course.lessons.len(),
            course: CourseResponse::from(summary.course),
            total_enrollments: summary.total_enrollments,
            revenue: summary.revenue,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub enrolled_at: DateTime<Utc>,
    #[schema(example = "completed")]
    pub payment_status: String,
    pub transaction_id: Option<String>,
    pub progress: f64,
    pub completed_lessons: Vec<Uuid>,
    #[schema(example = "Unknown User")]
    pub user_name: String,
    pub user_email: String,
    pub course_title: String,
    pub course_price: Option<f64>,
}

impl From<EnrichedEnrollment> for EnrollmentResponse {
    fn from(item: EnrichedEnrollment) -> Self {
        let enrollment = item.enrollment;
        EnrollmentResponse {
            id: enrollment.id,
            user_id: enrollment.user_id,
            course_id: enrollment.course_id,
            enrolled_at: enrollment.enrolled_at,
            payment_status: enrollment.payment_status.as_str().to_string(),
            transaction_id: enrollment.transaction_id,
            progress: enrollment.progress,
            completed_lessons: enrollment.completed_lessons,
            user_name: item.user_name,
            user_email: item.user_email,
            course_title: item.course_title,
            course_price: item.course_price,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseStatsResponse {
    pub course_id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    #[schema(example = "paid")]
    pub course_type: String,
    pub enrollments: u64,
    pub revenue: f64,
}

impl From<CourseStats> for CourseStatsResponse {
    fn from(stats: CourseStats) -> Self {
        CourseStatsResponse {
            course_id: stats.course_id,
            title: stats.title,
            course_type: stats.course_type.to_string(),
            enrollments: stats.enrollments,
            revenue: stats.revenue,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MonthlyTrendResponse {
    #[schema(example = "March")]
    pub month: String,
    pub year: i32,
    pub enrollments: u64,
}

impl From<MonthlyTrend> for MonthlyTrendResponse {
    fn from(trend: MonthlyTrend) -> Self {
        MonthlyTrendResponse {
            month: trend.month,
            year: trend.year,
            enrollments: trend.enrollments,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TypeDistributionResponse {
    pub free_courses: u64,
    pub paid_courses: u64,
}

impl From<TypeDistribution> for TypeDistributionResponse {
    fn from(dist: TypeDistribution) -> Self {
        TypeDistributionResponse {
            free_courses: dist.free_courses,
            paid_courses: dist.paid_courses,
        }
    }
}
