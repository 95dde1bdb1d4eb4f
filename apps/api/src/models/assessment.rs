use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// 12th-grade academic stream. Drives fallback career selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Science,
    Commerce,
    Arts,
}

impl Stream {
    /// Exact-match lookup of the label stored on an assessment.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Science" => Some(Stream::Science),
            "Commerce" => Some(Stream::Commerce),
            "Arts" => Some(Stream::Arts),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stream::Science => "Science",
            Stream::Commerce => "Commerce",
            Stream::Arts => "Arts",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParentDetails {
    pub name: String,
    pub phone: String,
}

/// A captured student profile. Never updated after insert.
///
/// `stream` stays free text so an unrecognized label round-trips unchanged;
/// [`Stream::from_label`] gives the typed view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assessment {
    pub id: Uuid,
    pub user_id: String,
    pub student_name: String,
    pub stream: String,
    pub subjects: Vec<String>,
    pub marks_percentage: f64,
    pub career_interests: Vec<String>,
    pub strong_subjects: Vec<String>,
    /// "Job", "Higher Studies" or "Study Abroad".
    pub career_goal: String,
    pub parent_details: ParentDetails,
    pub created_at: DateTime<Utc>,
}

/// Flat request body for `POST /assessments`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentCreate {
    pub user_id: String,
    pub student_name: String,
    pub stream: String,
    pub subjects: Vec<String>,
    pub marks_percentage: f64,
    pub career_interests: Vec<String>,
    pub strong_subjects: Vec<String>,
    pub career_goal: String,
    pub parent_name: String,
    pub parent_phone: String,
}

impl AssessmentCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.user_id.trim().is_empty() {
            return Err(AppError::Validation("user_id cannot be empty".to_string()));
        }
        if !(0.0..=100.0).contains(&self.marks_percentage) {
            return Err(AppError::Validation(format!(
                "marks_percentage must be between 0 and 100, got {}",
                self.marks_percentage
            )));
        }
        Ok(())
    }

    pub fn into_assessment(self) -> Assessment {
        Assessment {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            student_name: self.student_name,
            stream: self.stream,
            subjects: self.subjects,
            marks_percentage: self.marks_percentage,
            career_interests: self.career_interests,
            strong_subjects: self.strong_subjects,
            career_goal: self.career_goal,
            parent_details: ParentDetails {
                name: self.parent_name,
                phone: self.parent_phone,
            },
            created_at: Utc::now(),
        }
    }
}
