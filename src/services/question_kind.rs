use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    constants::prompts::{render_prompt, FRQ_PROMPT, MCQ_BATCH_PROMPT, MCQ_PROMPT},
    models::domain::{FrqQuestion, McqQuestion},
    validation::{validate_frq, validate_mcq, validate_mcq_batch, SchemaResult},
};

/// Everything the generation pipeline needs to know about one kind of
/// question: how to ask for it, where to find it in the reply, and how to
/// check it.
pub trait QuestionKind {
    type Record: DeserializeOwned + Serialize;

    const NAME: &'static str;
    const PROMPT_TEMPLATE: &'static str;
    /// Outermost delimiters of the expected JSON value.
    const DELIMITERS: (char, char);

    fn validate(value: &Value) -> SchemaResult;

    fn build_prompt(subject: &str, unit: &str) -> String {
        render_prompt(Self::PROMPT_TEMPLATE, subject, unit)
    }
}

pub struct Mcq;

impl QuestionKind for Mcq {
    type Record = McqQuestion;

    const NAME: &'static str = "MCQ";
    const PROMPT_TEMPLATE: &'static str = MCQ_PROMPT;
    const DELIMITERS: (char, char) = ('{', '}');

    fn validate(value: &Value) -> SchemaResult {
        validate_mcq(value)
    }
}

pub struct Frq;

impl QuestionKind for Frq {
    type Record = FrqQuestion;

    const NAME: &'static str = "FRQ";
    const PROMPT_TEMPLATE: &'static str = FRQ_PROMPT;
    const DELIMITERS: (char, char) = ('{', '}');

    fn validate(value: &Value) -> SchemaResult {
        validate_frq(value)
    }
}

/// Several MCQs returned as one JSON array.
pub struct McqBatch;

impl QuestionKind for McqBatch {
    type Record = Vec<McqQuestion>;

    const NAME: &'static str = "MCQ batch";
    const PROMPT_TEMPLATE: &'static str = MCQ_BATCH_PROMPT;
    const DELIMITERS: (char, char) = ('[', ']');

    fn validate(value: &Value) -> SchemaResult {
        validate_mcq_batch(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_questions_expect_objects_and_batches_arrays() {
        assert_eq!(Mcq::DELIMITERS, ('{', '}'));
        assert_eq!(Frq::DELIMITERS, ('{', '}'));
        assert_eq!(McqBatch::DELIMITERS, ('[', ']'));
    }

    #[test]
    fn build_prompt_uses_kind_template() {
        let prompt = Frq::build_prompt("AP Physics 1", "Unit 5: Rotation");
        assert!(prompt.contains("free-response question (FRQ) for AP Physics 1, Unit 5: Rotation."));
    }
}
