use std::sync::Arc;

use crate::{
    errors::PipelineError,
    models::domain::{FrqQuestion, McqQuestion},
    parsing::{extract_span, parse_with_recovery, strip_code_fence},
    services::{
        completion_client::CompletionClient,
        question_kind::{Frq, Mcq, McqBatch, QuestionKind},
    },
};

/// Runs prompt → fetch → extract → parse → validate for any [`QuestionKind`].
pub struct QuestionGenerator {
    client: Arc<dyn CompletionClient>,
}

impl QuestionGenerator {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn generate<K: QuestionKind>(
        &self,
        subject: &str,
        unit: &str,
    ) -> Result<K::Record, PipelineError> {
        log::info!("Generating {} for {}, {}", K::NAME, subject, unit);

        let prompt = K::build_prompt(subject, unit);
        let raw = self.client.complete(&prompt).await.map_err(|e| {
            log::error!("{} request failed: {}", K::NAME, e);
            PipelineError::from(e)
        })?;

        log::debug!("Raw {} completion: {}", K::NAME, raw);

        decode::<K>(&raw).map_err(|e| {
            log::error!("{} response rejected: {}", K::NAME, e);
            e
        })
    }

    pub async fn generate_mcq(&self, subject: &str, unit: &str) -> Result<McqQuestion, PipelineError> {
        self.generate::<Mcq>(subject, unit).await
    }

    pub async fn generate_frq(&self, subject: &str, unit: &str) -> Result<FrqQuestion, PipelineError> {
        self.generate::<Frq>(subject, unit).await
    }

    pub async fn generate_mcq_batch(
        &self,
        subject: &str,
        topic: &str,
    ) -> Result<Vec<McqQuestion>, PipelineError> {
        self.generate::<McqBatch>(subject, topic).await
    }
}

/// Turns raw completion text into a validated record without touching the
/// network.
pub fn decode<K: QuestionKind>(raw: &str) -> Result<K::Record, PipelineError> {
    let unfenced = strip_code_fence(raw);
    let (open, close) = K::DELIMITERS;
    let fragment = extract_span(&unfenced, open, close);

    let value = parse_with_recovery(fragment)?;
    K::validate(&value).map_err(PipelineError::Schema)?;

    serde_json::from_value(value).map_err(|e| PipelineError::Schema(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::FetchError,
        models::domain::ChoiceLabel,
        services::completion_client::MockCompletionClient,
        test_utils::fixtures::{
            PROSE_WRAPPED_UNQUOTED_MCQ, RAW_FENCED_FRQ, RAW_MCQ_BATCH,
        },
    };

    fn generator_returning(raw: &str) -> QuestionGenerator {
        let raw = raw.to_string();
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .times(1)
            .returning(move |_| Ok(raw.clone()));
        QuestionGenerator::new(Arc::new(client))
    }

    #[test]
    fn decode_recovers_prose_wrapped_object_with_unquoted_key() {
        let mcq = decode::<Mcq>(PROSE_WRAPPED_UNQUOTED_MCQ).expect("should recover");

        assert_eq!(mcq.question, "Which organelle produces ATP?");
        assert_eq!(mcq.answer, ChoiceLabel::C);
    }

    #[test]
    fn decode_reports_schema_reason() {
        let raw = r#"{"question": "Q", "choices": {"A": "1", "B": "2", "C": "3", "D": "4"}, "answer": "E", "explanation": "x"}"#;

        match decode::<Mcq>(raw) {
            Err(PipelineError::Schema(reason)) => {
                assert_eq!(reason, "Invalid 'answer' value (must be A, B, C, or D)")
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn decode_without_delimiters_is_parse_error() {
        assert!(matches!(
            decode::<Mcq>("Sorry, I can't do that."),
            Err(PipelineError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn generate_mcq_end_to_end() {
        let generator = generator_returning(PROSE_WRAPPED_UNQUOTED_MCQ);

        let mcq = generator.generate_mcq("AP Biology", "Unit 2").await.unwrap();
        assert_eq!(mcq.choices.get(mcq.answer), "Mitochondrion");
    }

    #[tokio::test]
    async fn generate_sends_prompt_with_subject_and_unit() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .withf(|prompt| prompt.contains("AP Chemistry, Unit 6: Thermodynamics"))
            .times(1)
            .returning(|_| Ok(PROSE_WRAPPED_UNQUOTED_MCQ.to_string()));
        let generator = QuestionGenerator::new(Arc::new(client));

        assert!(generator
            .generate_mcq("AP Chemistry", "Unit 6: Thermodynamics")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn transport_failure_surfaces_before_parsing() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().times(1).returning(|_| {
            Err(FetchError::Status {
                status: 500,
                body: "Internal Server Error".to_string(),
            })
        });
        let generator = QuestionGenerator::new(Arc::new(client));

        let err = generator.generate_frq("AP Biology", "Unit 1").await.unwrap_err();
        assert!(matches!(err, PipelineError::Transport(FetchError::Status { status: 500, .. })));
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[tokio::test]
    async fn generate_frq_strips_code_fence_and_repairs() {
        let generator = generator_returning(RAW_FENCED_FRQ);

        let frq = generator.generate_frq("AP Calculus BC", "Unit 2").await.unwrap();
        assert_eq!(frq.rubric.len(), 2);
        assert!(frq.explanation.contains("$\\frac{d}{dx}x^2 = 2x$"));
    }

    #[tokio::test]
    async fn generate_mcq_batch_parses_array() {
        let generator = generator_returning(RAW_MCQ_BATCH);

        let questions = generator
            .generate_mcq_batch("AP Chemistry", "Kinetics")
            .await
            .unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].answer, ChoiceLabel::A);
    }
}
