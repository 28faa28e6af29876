mod add_lesson;
mod create_course;
mod delete_lesson;
mod enroll_in_course;
mod get_course;
mod get_courses;
mod get_lesson;
mod update_lesson;

pub use add_lesson::{AddLessonError, AddLessonUseCase, LessonCommand, LessonCommandError, LessonFields};
pub use create_course::{
    CourseCommand, CourseCommandError, CourseFields, CreateCourseError, CreateCourseUseCase,
};
pub use delete_lesson::{DeleteLessonError, DeleteLessonUseCase};
pub use enroll_in_course::{EnrollInCourseError, EnrollInCourseUseCase, EnrollmentOutcome};
pub use get_course::{CourseDetail, GetCourseError, GetCourseUseCase};
pub use get_courses::{GetCoursesError, GetCoursesUseCase};
pub use get_lesson::{GetLessonError, GetLessonUseCase};
pub use update_lesson::{UpdateLessonError, UpdateLessonUseCase};
