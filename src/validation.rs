//! Field-level checks run on parsed model output before it is turned into a
//! typed record. Every check is total: it inspects a [`Value`] and returns
//! the first failure it finds as a readable reason.

use serde_json::{Map, Value};

use crate::models::domain::ChoiceLabel;

pub type SchemaResult = Result<(), String>;

pub fn validate_mcq(value: &Value) -> SchemaResult {
    let mcq = require_object(value, "MCQ")?;

    require_text(mcq, "question")?;

    let choices = mcq
        .get("choices")
        .and_then(Value::as_object)
        .ok_or_else(|| "Missing or invalid 'choices' property".to_string())?;
    for label in ChoiceLabel::ALL {
        match choices.get(label.as_str()) {
            Some(Value::String(text)) if !text.trim().is_empty() => {}
            _ => return Err(format!("Missing or invalid choice '{}' (A, B, C, D required)", label)),
        }
    }
    if let Some(extra) = choices
        .keys()
        .find(|key| ChoiceLabel::from_label(key).is_none())
    {
        return Err(format!("Unexpected choice '{}' (only A, B, C, D allowed)", extra));
    }

    let answer = mcq
        .get("answer")
        .and_then(Value::as_str)
        .and_then(ChoiceLabel::from_label)
        .ok_or_else(|| "Invalid 'answer' value (must be A, B, C, or D)".to_string())?;
    if !choices.contains_key(answer.as_str()) {
        return Err(format!("Answer '{}' does not match any choice", answer));
    }

    require_text(mcq, "explanation")?;
    Ok(())
}

pub fn validate_frq(value: &Value) -> SchemaResult {
    let frq = require_object(value, "FRQ")?;

    require_text(frq, "question")?;

    let rubric = frq
        .get("rubric")
        .and_then(Value::as_object)
        .filter(|rubric| !rubric.is_empty())
        .ok_or_else(|| "Missing or invalid 'rubric'".to_string())?;
    for (name, criterion) in rubric {
        validate_criterion(name, criterion)?;
    }

    require_text(frq, "answer")?;
    require_text(frq, "explanation")?;
    Ok(())
}

/// A batch is valid only if it is a non-empty array of valid MCQs.
pub fn validate_mcq_batch(value: &Value) -> SchemaResult {
    let questions = match value {
        Value::Array(items) if !items.is_empty() => items,
        Value::Array(_) => return Err("Question list is empty".to_string()),
        _ => return Err("Response is not a JSON array of questions".to_string()),
    };

    questions
        .iter()
        .enumerate()
        .try_for_each(|(index, question)| {
            validate_mcq(question).map_err(|reason| format!("Question {}: {}", index + 1, reason))
        })
}

fn validate_criterion(name: &str, criterion: &Value) -> SchemaResult {
    let criterion = criterion
        .as_object()
        .ok_or_else(|| format!("Rubric criterion '{}' is not an object", name))?;

    match criterion.get("description") {
        Some(Value::String(text)) if !text.trim().is_empty() => {}
        _ => return Err(format!("Rubric criterion '{}' has no description", name)),
    }

    match criterion.get("points") {
        Some(Value::Number(_)) => Ok(()),
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(()),
        _ => Err(format!("Rubric criterion '{}' has invalid points", name)),
    }
}

fn require_object<'a>(value: &'a Value, kind: &str) -> Result<&'a Map<String, Value>, String> {
    match value {
        Value::Null => Err(format!("{} object is null", kind)),
        Value::Object(map) => Ok(map),
        _ => Err(format!("{} is not an object", kind)),
    }
}

fn require_text(object: &Map<String, Value>, field: &str) -> SchemaResult {
    match object.get(field) {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(()),
        _ => Err(format!("Missing or invalid '{}' property", field)),
    }
}
