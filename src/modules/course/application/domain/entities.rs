use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    Free,
    Paid,
}

impl CourseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Free => "free",
            CourseType::Paid => "paid",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(CourseType::Free),
            "paid" => Ok(CourseType::Paid),
            other => Err(format!("Invalid course type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
    Youtube,
    Vimeo,
}

impl VideoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoType::Youtube => "youtube",
            VideoType::Vimeo => "vimeo",
        }
    }
}

impl FromStr for VideoType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "youtube" => Ok(VideoType::Youtube),
            "vimeo" => Ok(VideoType::Vimeo),
            other => Err(format!("Invalid video type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "completed" => Ok(PaymentStatus::Completed),
            "failed" => Ok(PaymentStatus::Failed),
            other => Err(format!("Invalid payment status: {other}")),
        }
    }
}

/// A lesson as stored inside its course document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub video_type: VideoType,
    /// Minutes
    #[serde(default)]
    pub duration: Option<i32>,
    /// 1-based position within the course
    pub order: i32,
    #[serde(default)]
    pub is_preview: bool,
    #[serde(default)]
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub instructor_name: String,
    pub instructor_id: Option<Uuid>,
    pub course_type: CourseType,
    /// Only meaningful for paid courses
    pub price: Option<f64>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub lessons: Vec<Lesson>,
    pub total_duration: Option<i32>,
    pub student_count: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    pub fn is_paid(&self) -> bool {
        self.course_type == CourseType::Paid
    }

    pub fn find_lesson(&self, lesson_id: Uuid) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    /// Revenue earned from `completed` paid enrollments. Free courses earn nothing.
    pub fn revenue_for(&self, completed: u64) -> f64 {
        match (self.course_type, self.price) {
            (CourseType::Paid, Some(price)) => price * completed as f64,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub enrolled_at: DateTime<Utc>,
    pub payment_status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub progress: f64,
    pub completed_lessons: Vec<Uuid>,
}

impl Enrollment {
    pub fn is_completed(&self) -> bool {
        self.payment_status == PaymentStatus::Completed
    }
}
