use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recommended career path. All fields are free text written either by the
/// provider or by the static fallback table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Career {
    pub name: String,
    pub suitability: String,
    pub course: String,
    pub duration: String,
    pub estimated_cost: String,
    pub top_colleges: Vec<String>,
    pub job_prospects: String,
    pub starting_salary: String,
    pub roadmap: Vec<String>,
}

/// Which path produced the careers on a recommendation record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CareerSource {
    Model,
    FallbackUnparsable,
    FallbackProviderFailure,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerRecommendation {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub user_id: String,
    pub careers: Vec<Career>,
    pub source: CareerSource,
    pub created_at: DateTime<Utc>,
}

impl CareerRecommendation {
    pub fn new(
        assessment_id: Uuid,
        user_id: impl Into<String>,
        careers: Vec<Career>,
        source: CareerSource,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            assessment_id,
            user_id: user_id.into(),
            careers,
            source,
            created_at: Utc::now(),
        }
    }
}
