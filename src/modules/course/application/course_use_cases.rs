use std::sync::Arc;

use crate::course::application::ports::incoming::use_cases::{
    AddLessonUseCase, CreateCourseUseCase, DeleteLessonUseCase, EnrollInCourseUseCase,
    GetCourseUseCase, GetCoursesUseCase, GetLessonUseCase, UpdateLessonUseCase,
};

#[derive(Clone)]
pub struct CourseUseCases {
    pub get_list: Arc<dyn GetCoursesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetCourseUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCourseUseCase + Send + Sync>,
    pub add_lesson: Arc<dyn AddLessonUseCase + Send + Sync>,
    pub get_lesson: Arc<dyn GetLessonUseCase + Send + Sync>,
    pub update_lesson: Arc<dyn UpdateLessonUseCase + Send + Sync>,
    pub delete_lesson: Arc<dyn DeleteLessonUseCase + Send + Sync>,
    pub enroll: Arc<dyn EnrollInCourseUseCase + Send + Sync>,
}
