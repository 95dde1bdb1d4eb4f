//! Career recommendation generation.
//!
//! Flow: load assessment → render prompt → provider call (bounded, no retry) →
//!       parse_careers → select_careers (fallback on any failure) → persist.
//!
//! Every invocation writes exactly one new `CareerRecommendation`, whichever
//! path produced the careers. Nothing is cached between calls.

use std::time::Duration;

use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::careers::extract::{parse_careers, CareerParseError};
use crate::careers::fallback::fallback_careers;
use crate::careers::prompts::{CAREER_PROMPT_TEMPLATE, CAREER_SYSTEM_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::prompts::{
    fill_template, JSON_ONLY_INSTRUCTION, PLAIN_LANGUAGE_INSTRUCTION,
};
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::assessment::Assessment;
use crate::models::career::{Career, CareerRecommendation, CareerSource};
use crate::store::Store;

/// Attached to the response when the provider call itself failed.
pub const MERIT_BASED_NOTE: &str = "Using merit-based recommendations";

// ────────────────────────────────────────────────────────────────────────────
// Outcome of the provider round-trip
// ────────────────────────────────────────────────────────────────────────────

/// What came back from the provider, before fallback selection.
#[derive(Debug)]
pub enum GenerationOutcome {
    Generated(Vec<Career>),
    ProviderError(LlmError),
    ParseError(CareerParseError),
}

/// The careers that will be persisted and returned.
#[derive(Debug, Clone)]
pub struct CareerSelection {
    pub careers: Vec<Career>,
    pub source: CareerSource,
    pub note: Option<&'static str>,
}

/// Response body of `POST /career-recommendations`.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedRecommendation {
    pub success: bool,
    pub recommendation_id: Uuid,
    pub careers: Vec<Career>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Generates, persists and returns three careers for an assessment.
///
/// Fails only with `NotFound` (unknown or malformed assessment id, nothing
/// written) or a store error. Provider and decode failures fall back.
pub async fn generate_recommendations(
    store: &dyn Store,
    provider: &dyn TextGenerator,
    provider_timeout: Duration,
    assessment_id: &str,
    user_id: &str,
) -> Result<GeneratedRecommendation, AppError> {
    let assessment = load_assessment(store, assessment_id).await?;

    let outcome = request_careers(provider, provider_timeout, &assessment).await;
    let selection = select_careers(outcome, &assessment.stream);

    let recommendation =
        CareerRecommendation::new(assessment.id, user_id, selection.careers, selection.source);
    store.insert_recommendation(&recommendation).await?;

    info!(
        "Stored recommendation {} ({:?}) for assessment {} / user {}",
        recommendation.id, recommendation.source, assessment.id, user_id
    );

    Ok(GeneratedRecommendation {
        success: true,
        recommendation_id: recommendation.id,
        careers: recommendation.careers,
        note: selection.note.map(str::to_string),
    })
}

/// Careers from the user's most recent recommendation, if any.
pub async fn latest_careers(
    store: &dyn Store,
    user_id: &str,
) -> Result<Option<Vec<Career>>, AppError> {
    Ok(store
        .latest_recommendation_for_user(user_id)
        .await?
        .map(|r| r.careers))
}

async fn load_assessment(store: &dyn Store, assessment_id: &str) -> Result<Assessment, AppError> {
    let not_found = || AppError::NotFound("Assessment not found".to_string());
    let id = Uuid::parse_str(assessment_id.trim()).map_err(|_| not_found())?;
    store.get_assessment(id).await?.ok_or_else(not_found)
}

/// One bounded provider call plus decoding. Never retries.
pub async fn request_careers(
    provider: &dyn TextGenerator,
    provider_timeout: Duration,
    assessment: &Assessment,
) -> GenerationOutcome {
    let prompt = build_career_prompt(assessment);
    let system = career_system_prompt();
    let session = session_id(assessment.id);

    let raw = match tokio::time::timeout(
        provider_timeout,
        provider.complete(&prompt, &system, &session),
    )
    .await
    {
        Ok(Ok(raw)) => raw,
        Ok(Err(e)) => return GenerationOutcome::ProviderError(e),
        Err(_) => return GenerationOutcome::ProviderError(LlmError::Timeout(provider_timeout)),
    };

    match parse_careers(&raw) {
        Ok(careers) => GenerationOutcome::Generated(careers),
        Err(e) => GenerationOutcome::ParseError(e),
    }
}

/// Single fallback-selection step. Both failure kinds serve the stream's
/// static list; only a provider failure adds the merit-based note.
pub fn select_careers(outcome: GenerationOutcome, stream: &str) -> CareerSelection {
    match outcome {
        GenerationOutcome::Generated(careers) => {
            info!("Provider returned {} careers", careers.len());
            CareerSelection {
                careers,
                source: CareerSource::Model,
                note: None,
            }
        }
        GenerationOutcome::ParseError(e) => {
            warn!("Provider output unusable, serving '{stream}' fallback: {e}");
            CareerSelection {
                careers: fallback_careers(stream),
                source: CareerSource::FallbackUnparsable,
                note: None,
            }
        }
        GenerationOutcome::ProviderError(e) => {
            error!("LLM Error: {e}. Serving '{stream}' fallback");
            CareerSelection {
                careers: fallback_careers(stream),
                source: CareerSource::FallbackProviderFailure,
                note: Some(MERIT_BASED_NOTE),
            }
        }
    }
}

/// Conversation key shared by every call for the same assessment.
pub fn session_id(assessment_id: Uuid) -> String {
    format!("career-{assessment_id}")
}

pub fn career_system_prompt() -> String {
    fill_template(
        CAREER_SYSTEM_TEMPLATE,
        &[("json_only", JSON_ONLY_INSTRUCTION)],
    )
}

pub fn build_career_prompt(assessment: &Assessment) -> String {
    let subjects = assessment.subjects.join(", ");
    let marks = assessment.marks_percentage.to_string();
    let interests = assessment.career_interests.join(", ");
    let strong_subjects = assessment.strong_subjects.join(", ");

    fill_template(
        CAREER_PROMPT_TEMPLATE,
        &[
            ("student_name", assessment.student_name.as_str()),
            ("stream", assessment.stream.as_str()),
            ("subjects", subjects.as_str()),
            ("marks", marks.as_str()),
            ("interests", interests.as_str()),
            ("strong_subjects", strong_subjects.as_str()),
            ("career_goal", assessment.career_goal.as_str()),
            ("plain_language", PLAIN_LANGUAGE_INSTRUCTION),
        ],
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::models::assessment::AssessmentCreate;
    use crate::store::MemoryStore;

    const TIMEOUT: Duration = Duration::from_secs(5);

    enum Reply {
        Text(String),
        Fail,
        Hang,
    }

    struct StubProvider {
        reply: Reply,
        sessions: Mutex<Vec<String>>,
        prompts: Mutex<Vec<String>>,
    }

    impl StubProvider {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                sessions: Mutex::new(Vec::new()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for StubProvider {
        async fn complete(
            &self,
            prompt: &str,
            _system: &str,
            session_id: &str,
        ) -> Result<String, LlmError> {
            self.sessions.lock().unwrap().push(session_id.to_string());
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Reply::Text(text) => Ok(text.clone()),
                Reply::Fail => Err(LlmError::Api {
                    status: 503,
                    message: "overloaded".to_string(),
                }),
                Reply::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(String::new())
                }
            }
        }
    }

    fn model_careers() -> Vec<Career> {
        ["Commercial Pilot", "Aeronautical Engineering", "Study MS in Germany"]
            .iter()
            .map(|name| Career {
                name: name.to_string(),
                suitability: "Matches your interest in aviation.".to_string(),
                course: "CPL / B.Tech".to_string(),
                duration: "2-4 years".to_string(),
                estimated_cost: "₹25-45 Lakhs".to_string(),
                top_colleges: vec!["IGRUA".to_string()],
                job_prospects: "Airlines are hiring.".to_string(),
                starting_salary: "₹10-15 LPA".to_string(),
                roadmap: vec!["Class 2 medical".to_string(), "Flying school".to_string()],
            })
            .collect()
    }

    fn model_reply() -> Reply {
        let json = serde_json::to_string(&model_careers()).unwrap();
        Reply::Text(format!("Here are the best careers:\n{json}\nGood luck!"))
    }

    async fn seeded_store(stream: &str) -> (MemoryStore, Assessment) {
        let store = MemoryStore::new();
        let assessment = AssessmentCreate {
            user_id: "user-1".to_string(),
            student_name: "Ananya".to_string(),
            stream: stream.to_string(),
            subjects: vec!["Physics".to_string(), "Maths".to_string()],
            marks_percentage: 88.5,
            career_interests: vec!["Aviation".to_string()],
            strong_subjects: vec!["Physics".to_string()],
            career_goal: "Study Abroad".to_string(),
            parent_name: "Rekha".to_string(),
            parent_phone: "9000000000".to_string(),
        }
        .into_assessment();
        store.insert_assessment(&assessment).await.unwrap();
        (store, assessment)
    }

    #[test]
    fn test_prompt_embeds_profile_and_categories() {
        let assessment = AssessmentCreate {
            user_id: "u".to_string(),
            student_name: "Kiran".to_string(),
            stream: "Science".to_string(),
            subjects: vec!["Physics".to_string(), "Biology".to_string()],
            marks_percentage: 91.0,
            career_interests: vec!["Medical".to_string()],
            strong_subjects: vec!["Biology".to_string()],
            career_goal: "Higher Studies".to_string(),
            parent_name: "P".to_string(),
            parent_phone: "1".to_string(),
        }
        .into_assessment();

        let prompt = build_career_prompt(&assessment);
        assert!(prompt.contains("- Name: Kiran"));
        assert!(prompt.contains("- Subjects Studied: Physics, Biology"));
        assert!(prompt.contains("- Marks/Percentage: 91%"));
        assert!(prompt.contains("- Career Goal: Higher Studies"));
        assert!(prompt.contains("Aviation, Abroad Studies"));
        assert!(!prompt.contains("{student_name}") && !prompt.contains("{plain_language}"));
        assert!(career_system_prompt().contains("valid JSON"));
    }

    #[test]
    fn test_prompt_keeps_placeholder_like_student_text_literal() {
        let assessment = AssessmentCreate {
            user_id: "u".to_string(),
            student_name: "{career_goal} {plain_language}".to_string(),
            stream: "Arts".to_string(),
            subjects: vec!["{marks}".to_string()],
            marks_percentage: 50.0,
            career_interests: vec!["{student_name}".to_string()],
            strong_subjects: vec!["History".to_string()],
            career_goal: "Job".to_string(),
            parent_name: "P".to_string(),
            parent_phone: "1".to_string(),
        }
        .into_assessment();

        let prompt = build_career_prompt(&assessment);
        assert!(prompt.contains("- Name: {career_goal} {plain_language}\n"));
        assert!(prompt.contains("- Subjects Studied: {marks}\n"));
        assert!(prompt.contains("- Career Interests: {student_name}\n"));
        assert!(prompt.contains("- Marks/Percentage: 50%"));
        assert!(prompt.contains("- Career Goal: Job\n"));
    }

    #[tokio::test]
    async fn test_model_success_persists_model_careers() {
        let (store, assessment) = seeded_store("Science").await;
        let provider = StubProvider::new(model_reply());

        let response = generate_recommendations(
            &store,
            &provider,
            TIMEOUT,
            &assessment.id.to_string(),
            "user-1",
        )
        .await
        .unwrap();

        assert_eq!(response.careers, model_careers());
        assert!(response.note.is_none());

        let stored = store
            .latest_recommendation_for_user("user-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.id, response.recommendation_id);
        assert_eq!(stored.source, CareerSource::Model);
        assert_eq!(stored.assessment_id, assessment.id);
        assert_eq!(
            *provider.sessions.lock().unwrap(),
            vec![format!("career-{}", assessment.id)]
        );
    }

    #[tokio::test]
    async fn test_commerce_with_unreachable_provider_uses_fallback_and_note() {
        let (store, assessment) = seeded_store("Commerce").await;
        let provider = StubProvider::new(Reply::Fail);

        let response = generate_recommendations(
            &store,
            &provider,
            TIMEOUT,
            &assessment.id.to_string(),
            "user-1",
        )
        .await
        .unwrap();

        assert_eq!(response.careers.len(), 3);
        assert_eq!(response.careers[0].name, "Chartered Accountancy (CA)");
        assert_eq!(response.careers, fallback_careers("Commerce"));
        assert_eq!(response.note.as_deref(), Some(MERIT_BASED_NOTE));
        assert_eq!(store.recommendation_count().await, 1);
    }

    #[tokio::test]
    async fn test_unparsable_output_falls_back_without_note() {
        let (store, assessment) = seeded_store("Arts").await;
        let provider = StubProvider::new(Reply::Text("Sorry, I can't do that.".to_string()));

        let response = generate_recommendations(
            &store,
            &provider,
            TIMEOUT,
            &assessment.id.to_string(),
            "user-1",
        )
        .await
        .unwrap();

        assert_eq!(response.careers, fallback_careers("Arts"));
        assert!(response.note.is_none());
        let stored = store
            .latest_recommendation_for_user("user-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.source, CareerSource::FallbackUnparsable);
    }

    #[tokio::test(start_paused = true)]
    async fn test_provider_timeout_is_treated_as_failure() {
        let (store, assessment) = seeded_store("Vocational").await;
        let provider = StubProvider::new(Reply::Hang);

        let response = generate_recommendations(
            &store,
            &provider,
            Duration::from_secs(1),
            &assessment.id.to_string(),
            "user-1",
        )
        .await
        .unwrap();

        // Unknown stream label → Science list
        assert_eq!(response.careers, fallback_careers("Science"));
        assert_eq!(response.note.as_deref(), Some(MERIT_BASED_NOTE));
    }

    #[tokio::test]
    async fn test_unknown_assessment_is_not_found_and_writes_nothing() {
        let (store, _) = seeded_store("Science").await;
        let provider = StubProvider::new(model_reply());

        for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
            let result = generate_recommendations(&store, &provider, TIMEOUT, &id, "user-1").await;
            assert!(matches!(result, Err(AppError::NotFound(_))));
        }
        assert_eq!(store.recommendation_count().await, 0);
        assert!(provider.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_latest_careers_returns_second_generation() {
        let (store, assessment) = seeded_store("Commerce").await;
        let id = assessment.id.to_string();

        let failing = StubProvider::new(Reply::Fail);
        generate_recommendations(&store, &failing, TIMEOUT, &id, "user-1")
            .await
            .unwrap();

        let working = StubProvider::new(model_reply());
        let second = generate_recommendations(&store, &working, TIMEOUT, &id, "user-1")
            .await
            .unwrap();

        assert_eq!(store.recommendation_count().await, 2);
        let latest = latest_careers(&store, "user-1").await.unwrap().unwrap();
        assert_eq!(latest, second.careers);
        assert!(latest_careers(&store, "someone-else").await.unwrap().is_none());
    }

    #[test]
    fn test_select_careers_paths_are_distinct() {
        let generated = select_careers(GenerationOutcome::Generated(model_careers()), "Arts");
        assert_eq!(generated.source, CareerSource::Model);

        let unparsable = select_careers(
            GenerationOutcome::ParseError(CareerParseError::NoArray),
            "Arts",
        );
        assert_eq!(unparsable.source, CareerSource::FallbackUnparsable);
        assert_eq!(unparsable.note, None);

        let failed = select_careers(
            GenerationOutcome::ProviderError(LlmError::EmptyContent),
            "Arts",
        );
        assert_eq!(failed.source, CareerSource::FallbackProviderFailure);
        assert_eq!(failed.careers, unparsable.careers);
        assert_eq!(failed.note, Some(MERIT_BASED_NOTE));
    }
}
