use uuid::Uuid;

use super::entities::{Course, Lesson, VideoType};

/// Lesson fields supplied by an author. Identity and position are assigned here.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonDraft {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub video_type: VideoType,
    pub duration: Option<i32>,
    pub is_preview: bool,
    pub resources: Vec<String>,
}

/// Appends a lesson at position `len + 1`.
pub fn append_lesson(lessons: &mut Vec<Lesson>, draft: LessonDraft) -> Lesson {
    let lesson = Lesson {
        id: Uuid::new_v4(),
        title: draft.title,
        description: draft.description,
        video_url: draft.video_url,
        video_type: draft.video_type,
        duration: draft.duration,
        order: position(lessons.len()),
        is_preview: draft.is_preview,
        resources: draft.resources,
    };
    lessons.push(lesson.clone());
    lesson
}

/// Replaces the content of an existing lesson, keeping its id and order.
pub fn replace_lesson(lessons: &mut [Lesson], lesson_id: Uuid, draft: LessonDraft) -> Option<Lesson> {
    let lesson = lessons.iter_mut().find(|l| l.id == lesson_id)?;
    lesson.title = draft.title;
    lesson.description = draft.description;
    lesson.video_url = draft.video_url;
    lesson.video_type = draft.video_type;
    lesson.duration = draft.duration;
    lesson.is_preview = draft.is_preview;
    lesson.resources = draft.resources;
    Some(lesson.clone())
}

/// Removes a lesson and renumbers the rest 1..N in their existing sequence.
pub fn remove_lesson(lessons: &mut Vec<Lesson>, lesson_id: Uuid) -> bool {
    let before = lessons.len();
    lessons.retain(|l| l.id != lesson_id);
    if lessons.len() == before {
        return false;
    }
    renumber(lessons);
    true
}

/// Sorts by current order and rewrites `order` as 1..N.
pub fn renumber(lessons: &mut [Lesson]) {
    lessons.sort_by_key(|l| l.order);
    for (idx, lesson) in lessons.iter_mut().enumerate() {
        lesson.order = position(idx);
    }
}

/// One-based position for a zero-based index, saturating at `i32::MAX`.
fn position(idx: usize) -> i32 {
    i32::try_from(idx).map_or(i32::MAX, |i| i.saturating_add(1))
}

/// Sum of known lesson durations, `None` when no lesson declares one.
/// Saturates at `i32::MAX` minutes.
pub fn total_duration(lessons: &[Lesson]) -> Option<i32> {
    lessons
        .iter()
        .filter_map(|l| l.duration)
        .fold(None, |acc: Option<i64>, d| Some(acc.unwrap_or(0) + i64::from(d)))
        .map(|total| i32::try_from(total).unwrap_or(i32::MAX))
}

/// Whether a viewer may see every lesson of the course.
pub fn has_full_access(course: &Course, is_enrolled: bool) -> bool {
    is_enrolled || !course.is_paid()
}

pub fn can_view_lesson(course: &Course, lesson: &Lesson, is_enrolled: bool) -> bool {
    has_full_access(course, is_enrolled) || lesson.is_preview
}

/// Drops non-preview lessons unless the viewer has full access.
pub fn restrict_lessons(mut course: Course, is_enrolled: bool) -> Course {
    if !has_full_access(&course, is_enrolled) {
        course.lessons.retain(|l| l.is_preview);
    }
    course
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::application::domain::entities::CourseType;
    use crate::tests::support::fixtures::{sample_course, sample_lesson_draft};

    fn ordered(lessons: &[Lesson]) -> Vec<i32> {
        lessons.iter().map(|l| l.order).collect()
    }

    #[test]
    fn sequential_appends_are_numbered_one_to_n() {
        let mut lessons = Vec::new();
        let titles: Vec<String> = (1..=5).map(|i| format!("Lesson {i}")).collect();
        for title in &titles {
            let mut draft = sample_lesson_draft();
            draft.title = title.clone();
            append_lesson(&mut lessons, draft);
        }

        assert_eq!(ordered(&lessons), vec![1, 2, 3, 4, 5]);
        let stored: Vec<&String> = lessons.iter().map(|l| &l.title).collect();
        assert_eq!(stored, titles.iter().collect::<Vec<_>>());
    }

    #[test]
    fn removing_a_lesson_closes_the_gap() {
        let mut lessons = Vec::new();
        let ids: Vec<Uuid> = (0..4)
            .map(|_| append_lesson(&mut lessons, sample_lesson_draft()).id)
            .collect();

        assert!(remove_lesson(&mut lessons, ids[1]));

        assert_eq!(ordered(&lessons), vec![1, 2, 3]);
        let remaining: Vec<Uuid> = lessons.iter().map(|l| l.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn removing_unknown_lesson_is_a_noop() {
        let mut lessons = Vec::new();
        append_lesson(&mut lessons, sample_lesson_draft());

        assert!(!remove_lesson(&mut lessons, Uuid::new_v4()));
        assert_eq!(lessons.len(), 1);
    }

    #[test]
    fn replace_keeps_identity_and_position() {
        let mut lessons = Vec::new();
        append_lesson(&mut lessons, sample_lesson_draft());
        let second = append_lesson(&mut lessons, sample_lesson_draft());

        let mut draft = sample_lesson_draft();
        draft.title = "Rewritten".to_string();
        draft.is_preview = true;
        let updated = replace_lesson(&mut lessons, second.id, draft).unwrap();

        assert_eq!(updated.id, second.id);
        assert_eq!(updated.order, 2);
        assert_eq!(lessons[1].title, "Rewritten");
        assert!(lessons[1].is_preview);
    }

    #[test]
    fn total_duration_ignores_unknown_durations() {
        let mut lessons = Vec::new();
        let mut a = sample_lesson_draft();
        a.duration = Some(10);
        let mut b = sample_lesson_draft();
        b.duration = None;
        let mut c = sample_lesson_draft();
        c.duration = Some(15);
        for d in [a, b, c] {
            append_lesson(&mut lessons, d);
        }

        assert_eq!(total_duration(&lessons), Some(25));
        assert_eq!(total_duration(&[]), None);
    }

    #[test]
    fn total_duration_saturates_on_huge_sums() {
        let mut lessons = Vec::new();
        for _ in 0..2 {
            let mut draft = sample_lesson_draft();
            draft.duration = Some(2_000_000_000);
            append_lesson(&mut lessons, draft);
        }

        assert_eq!(total_duration(&lessons), Some(i32::MAX));
    }

    #[test]
    fn positions_saturate_past_i32_range() {
        assert_eq!(position(0), 1);
        assert_eq!(position(41), 42);
        assert_eq!(position(i32::MAX as usize), i32::MAX);
        assert_eq!(position(usize::MAX), i32::MAX);
    }

    #[test]
    fn paid_course_hides_non_preview_lessons_from_outsiders() {
        let mut course = sample_course(CourseType::Paid);
        let mut preview = sample_lesson_draft();
        preview.is_preview = true;
        append_lesson(&mut course.lessons, preview);
        append_lesson(&mut course.lessons, sample_lesson_draft());

        let outsider_view = restrict_lessons(course.clone(), false);
        assert_eq!(outsider_view.lessons.len(), 1);
        assert!(outsider_view.lessons[0].is_preview);

        let student_view = restrict_lessons(course, true);
        assert_eq!(student_view.lessons.len(), 2);
    }

    #[test]
    fn free_course_lessons_are_open() {
        let mut course = sample_course(CourseType::Free);
        let lesson = append_lesson(&mut course.lessons, sample_lesson_draft());

        assert!(can_view_lesson(&course, &lesson, false));
        assert_eq!(restrict_lessons(course, false).lessons.len(), 1);
    }
}
