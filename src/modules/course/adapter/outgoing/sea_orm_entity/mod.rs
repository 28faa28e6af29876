pub mod courses;
pub mod enrollments;
