//! Read-side aggregation for the admin dashboard and analytics views.
//!
//! Every figure is recomputed from the full user, course and enrollment
//! snapshots on each request.

use chrono::{DateTime, Datelike, Month, Utc};
use std::collections::HashMap;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole};
use crate::course::application::domain::entities::{Course, CourseType, Enrollment};

pub const RECENT_ENROLLMENTS: usize = 5;
pub const TOP_COURSES: usize = 5;
pub const TREND_MONTHS: u32 = 6;

const UNKNOWN_USER: &str = "Unknown User";
const UNKNOWN_EMAIL: &str = "Unknown Email";
const UNKNOWN_COURSE: &str = "Unknown Course";

#[derive(Debug, Clone, PartialEq)]
pub struct CourseStats {
    pub course_id: Uuid,
    pub title: String,
    pub course_type: CourseType,
    /// Completed enrollments only
    pub enrollments: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTrend {
    pub month: String,
    pub year: i32,
    pub enrollments: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeDistribution {
    pub free_courses: u64,
    pub paid_courses: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardTotals {
    pub total_courses: u64,
    pub total_students: u64,
    pub total_instructors: u64,
    pub total_enrollments: u64,
    pub total_revenue: f64,
}

/// An enrollment joined with the names an admin wants to see.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedEnrollment {
    pub enrollment: Enrollment,
    pub user_name: String,
    pub user_email: String,
    pub course_title: String,
    pub course_price: Option<f64>,
}

fn completed_per_course(enrollments: &[Enrollment]) -> HashMap<Uuid, u64> {
    let mut counts = HashMap::new();
    for enrollment in enrollments.iter().filter(|e| e.is_completed()) {
        *counts.entry(enrollment.course_id).or_insert(0) += 1;
    }
    counts
}

/// Per-course completed enrollment count and revenue, in `courses` order.
pub fn course_stats(courses: &[Course], enrollments: &[Enrollment]) -> Vec<CourseStats> {
    let completed = completed_per_course(enrollments);

    courses
        .iter()
        .map(|course| {
            let count = completed.get(&course.id).copied().unwrap_or(0);
            CourseStats {
                course_id: course.id,
                title: course.title.clone(),
                course_type: course.course_type,
                enrollments: count,
                revenue: course.revenue_for(count),
            }
        })
        .collect()
}

/// The `limit` courses with most completed enrollments. Ties keep input order.
pub fn top_courses(mut stats: Vec<CourseStats>, limit: usize) -> Vec<CourseStats> {
    stats.sort_by(|a, b| b.enrollments.cmp(&a.enrollments));
    stats.truncate(limit);
    stats
}

pub fn type_distribution(courses: &[Course]) -> TypeDistribution {
    courses
        .iter()
        .fold(TypeDistribution::default(), |mut acc, course| {
            match course.course_type {
                CourseType::Free => acc.free_courses += 1,
                CourseType::Paid => acc.paid_courses += 1,
            }
            acc
        })
}

/// Enrollment counts for the `months` calendar months ending with the month
/// of `now`, oldest first. Every enrollment counts regardless of payment status.
pub fn monthly_trends(enrollments: &[Enrollment], now: DateTime<Utc>, months: u32) -> Vec<MonthlyTrend> {
    let current = now.year() * 12 + now.month0() as i32;

    (0..months as i32)
        .rev()
        .map(|back| {
            let index = current - back;
            let year = index.div_euclid(12);
            let month0 = index.rem_euclid(12) as u32;

            let count = enrollments
                .iter()
                .filter(|e| e.enrolled_at.year() == year && e.enrolled_at.month0() == month0)
                .count() as u64;

            MonthlyTrend {
                month: month_name(month0),
                year,
                enrollments: count,
            }
        })
        .collect()
}

fn month_name(month0: u32) -> String {
    Month::try_from(month0 as u8 + 1)
        .map(|m| m.name().to_string())
        .unwrap_or_default()
}

pub fn dashboard_totals(
    users: &[User],
    courses: &[Course],
    enrollments: &[Enrollment],
    stats: &[CourseStats],
) -> DashboardTotals {
    let active_with_role =
        |role: UserRole| users.iter().filter(|u| u.is_active && u.role == role).count() as u64;

    DashboardTotals {
        total_courses: courses.iter().filter(|c| c.is_active).count() as u64,
        total_students: active_with_role(UserRole::Student),
        total_instructors: active_with_role(UserRole::Instructor),
        total_enrollments: enrollments.iter().filter(|e| e.is_completed()).count() as u64,
        total_revenue: stats.iter().map(|s| s.revenue).sum(),
    }
}

/// Joins enrollments with their user and course, substituting placeholders
/// for references that no longer resolve.
pub fn enrich_enrollments(
    enrollments: Vec<Enrollment>,
    users: &[User],
    courses: &[Course],
) -> Vec<EnrichedEnrollment> {
    let users: HashMap<Uuid, &User> = users.iter().map(|u| (u.id, u)).collect();
    let courses: HashMap<Uuid, &Course> = courses.iter().map(|c| (c.id, c)).collect();

    enrollments
        .into_iter()
        .map(|enrollment| {
            let user = users.get(&enrollment.user_id);
            let course = courses.get(&enrollment.course_id);
            EnrichedEnrollment {
                user_name: user.map_or(UNKNOWN_USER.to_string(), |u| u.full_name.clone()),
                user_email: user.map_or(UNKNOWN_EMAIL.to_string(), |u| u.email.clone()),
                course_title: course.map_or(UNKNOWN_COURSE.to_string(), |c| c.title.clone()),
                course_price: course.and_then(|c| c.price),
                enrollment,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::application::domain::entities::PaymentStatus;
    use crate::tests::support::fixtures::{sample_course, sample_enrollment, sample_user};
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn enrollment(course: &Course, status: PaymentStatus) -> Enrollment {
        sample_enrollment(Uuid::new_v4(), course.id, status)
    }

    #[test]
    fn revenue_counts_completed_paid_enrollments_only() {
        let paid = sample_course(CourseType::Paid);
        let free = sample_course(CourseType::Free);
        let enrollments = vec![
            enrollment(&paid, PaymentStatus::Completed),
            enrollment(&paid, PaymentStatus::Completed),
            enrollment(&paid, PaymentStatus::Pending),
            enrollment(&free, PaymentStatus::Completed),
        ];

        let stats = course_stats(&[paid.clone(), free.clone()], &enrollments);

        assert_eq!(stats[0].enrollments, 2);
        assert_eq!(stats[0].revenue, 2.0 * paid.price.unwrap());
        assert_eq!(stats[1].enrollments, 1);
        assert_eq!(stats[1].revenue, 0.0);
    }

    #[test]
    fn paid_course_without_price_earns_nothing() {
        let mut paid = sample_course(CourseType::Paid);
        paid.price = None;
        let stats = course_stats(&[paid.clone()], &[enrollment(&paid, PaymentStatus::Completed)]);

        assert_eq!(stats[0].revenue, 0.0);
    }

    #[test]
    fn top_courses_orders_by_enrollments_and_truncates() {
        let courses: Vec<Course> = (0..7).map(|_| sample_course(CourseType::Free)).collect();
        let mut enrollments = Vec::new();
        for (i, course) in courses.iter().enumerate() {
            for _ in 0..i {
                enrollments.push(enrollment(course, PaymentStatus::Completed));
            }
        }

        let top = top_courses(course_stats(&courses, &enrollments), TOP_COURSES);

        let counts: Vec<u64> = top.iter().map(|s| s.enrollments).collect();
        assert_eq!(counts, vec![6, 5, 4, 3, 2]);
    }

    #[test]
    fn trends_cover_six_months_oldest_first_across_year_boundary() {
        let course = sample_course(CourseType::Free);
        let mut in_december = enrollment(&course, PaymentStatus::Pending);
        in_december.enrolled_at = at(2024, 12, 3);
        let mut in_march = enrollment(&course, PaymentStatus::Completed);
        in_march.enrolled_at = at(2025, 3, 30);
        let mut too_old = enrollment(&course, PaymentStatus::Completed);
        too_old.enrolled_at = at(2024, 9, 30);

        let trends = monthly_trends(&[in_december, in_march, too_old], at(2025, 3, 31), 6);

        let labels: Vec<(String, i32)> = trends.iter().map(|t| (t.month.clone(), t.year)).collect();
        assert_eq!(
            labels,
            vec![
                ("October".to_string(), 2024),
                ("November".to_string(), 2024),
                ("December".to_string(), 2024),
                ("January".to_string(), 2025),
                ("February".to_string(), 2025),
                ("March".to_string(), 2025),
            ]
        );
        let counts: Vec<u64> = trends.iter().map(|t| t.enrollments).collect();
        assert_eq!(counts, vec![0, 0, 1, 0, 0, 1]);
    }

    #[test]
    fn distribution_counts_each_type() {
        let courses = vec![
            sample_course(CourseType::Free),
            sample_course(CourseType::Paid),
            sample_course(CourseType::Paid),
        ];

        assert_eq!(
            type_distribution(&courses),
            TypeDistribution {
                free_courses: 1,
                paid_courses: 2
            }
        );
    }

    #[test]
    fn totals_count_active_entities() {
        let mut inactive_student = sample_user(UserRole::Student);
        inactive_student.is_active = false;
        let users = vec![
            sample_user(UserRole::Student),
            sample_user(UserRole::Student),
            inactive_student,
            sample_user(UserRole::Instructor),
            sample_user(UserRole::Admin),
        ];
        let paid = sample_course(CourseType::Paid);
        let mut retired = sample_course(CourseType::Free);
        retired.is_active = false;
        let courses = vec![paid.clone(), retired];
        let enrollments = vec![
            enrollment(&paid, PaymentStatus::Completed),
            enrollment(&paid, PaymentStatus::Pending),
        ];
        let stats = course_stats(&courses, &enrollments);

        let totals = dashboard_totals(&users, &courses, &enrollments, &stats);

        assert_eq!(totals.total_courses, 1);
        assert_eq!(totals.total_students, 2);
        assert_eq!(totals.total_instructors, 1);
        assert_eq!(totals.total_enrollments, 1);
        assert_eq!(totals.total_revenue, paid.price.unwrap());
    }

    #[test]
    fn dangling_references_get_placeholders() {
        let user = sample_user(UserRole::Student);
        let course = sample_course(CourseType::Paid);
        let known = sample_enrollment(user.id, course.id, PaymentStatus::Completed);
        let orphan = sample_enrollment(Uuid::new_v4(), Uuid::new_v4(), PaymentStatus::Pending);

        let enriched = enrich_enrollments(vec![known, orphan], &[user.clone()], &[course.clone()]);

        assert_eq!(enriched[0].user_name, user.full_name);
        assert_eq!(enriched[0].course_price, course.price);
        assert_eq!(enriched[1].user_name, "Unknown User");
        assert_eq!(enriched[1].user_email, "Unknown Email");
        assert_eq!(enriched[1].course_title, "Unknown Course");
        assert_eq!(enriched[1].course_price, None);
    }
}
