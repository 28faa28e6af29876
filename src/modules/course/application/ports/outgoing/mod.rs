pub mod course_query;
pub mod course_repository;
pub mod enrollment_repository;

pub use course_query::{CourseQuery, CourseQueryError};
pub use course_repository::{CourseChanges, CourseRepository, CourseRepositoryError, NewCourse};
pub use enrollment_repository::{EnrollmentRepository, EnrollmentRepositoryError};
