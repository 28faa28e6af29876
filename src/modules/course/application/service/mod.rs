pub mod add_lesson_service;
pub mod create_course_service;
pub mod delete_lesson_service;
pub mod enroll_in_course_service;
pub mod get_course_service;
pub mod get_courses_service;
pub mod get_lesson_service;
pub mod update_lesson_service;

pub use add_lesson_service::AddLessonService;
pub use create_course_service::CreateCourseService;
pub use delete_lesson_service::DeleteLessonService;
pub use enroll_in_course_service::EnrollInCourseService;
pub use get_course_service::GetCourseService;
pub use get_courses_service::GetCoursesService;
pub use get_lesson_service::GetLessonService;
pub use update_lesson_service::UpdateLessonService;
