mod add_lesson;
mod create_course;
mod delete_lesson;
pub mod dto;
mod enroll_in_course;
mod get_course;
mod get_courses;
mod get_lesson;
mod update_lesson;

pub use add_lesson::{add_lesson_handler, LessonAddedResponse};
pub use create_course::{create_course_handler, CourseCreatedResponse};
pub use delete_lesson::delete_lesson_handler;
pub use enroll_in_course::{enroll_in_course_handler, EnrolledResponse, PaymentRequiredResponse};
pub use get_course::{get_course_handler, CourseDetailResponse};
pub use get_courses::{get_courses_handler, CourseListResponse};
pub use get_lesson::get_lesson_handler;
pub use update_lesson::{update_lesson_handler, LessonUpdatedResponse};

// OpenAPI path items
pub use add_lesson::__path_add_lesson_handler;
pub use create_course::__path_create_course_handler;
pub use delete_lesson::__path_delete_lesson_handler;
pub use enroll_in_course::__path_enroll_in_course_handler;
pub use get_course::__path_get_course_handler;
pub use get_courses::__path_get_courses_handler;
pub use get_lesson::__path_get_lesson_handler;
pub use update_lesson::__path_update_lesson_handler;
