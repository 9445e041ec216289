#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    /// Prose around an object whose first key is unquoted.
    pub const PROSE_WRAPPED_UNQUOTED_MCQ: &str = "Here you go:\n{question: \"Which organelle produces ATP?\", \"choices\": {\"A\": \"Nucleus\", \"B\": \"Ribosome\", \"C\": \"Mitochondrion\", \"D\": \"Golgi apparatus\"}, \"answer\": \"C\", \"explanation\": \"Cellular respiration happens in the mitochondria.\"}\nHope that helps!";

    /// Fenced FRQ with bare keys, a raw newline, inline math and a trailing comma.
    pub const RAW_FENCED_FRQ: &str = r#"Here is your FRQ:
```json
{
  question: "Find the derivative of x^2.
Show your work.",
  rubric: {
    criterion_1: {description: "Applies the power rule", points: 5},
    criterion_2: {description: "Simplifies correctly", points: "5"},
  },
  answer: "2x",
  explanation: $\frac{d}{dx}x^2 = 2x$
}
```"#;

    pub const RAW_MCQ_BATCH: &str = r#"Sure, here are your questions:
[
  {"question": "What does a catalyst lower?", "choices": {"A": "Enthalpy", "B": "Activation energy", "C": "Entropy", "D": "Pressure"}, "answer": "B", "explanation": "Catalysts provide a lower-energy pathway."},
  {"question": "Units of a first-order rate constant?", "choices": {"A": "1/s", "B": "M/s", "C": "1/(M s)", "D": "M"}, "answer": "A", "explanation": "Rate = k[A] gives k in 1/s."},
]
Good luck!"#;

    pub fn sample_mcq_value() -> Value {
        json!({
            "question": "2+2=?",
            "choices": {"A": "3", "B": "4", "C": "5", "D": "6"},
            "answer": "B",
            "explanation": "Basic addition."
        })
    }

    pub fn sample_frq_value() -> Value {
        json!({
            "question": "Describe the stages of mitosis.",
            "rubric": {
                "criterion_1": {"description": "Names all stages", "points": 4},
                "criterion_2": {"description": "Describes chromosome movement", "points": "3"}
            },
            "answer": "Prophase, metaphase, anaphase, telophase.",
            "explanation": "Each stage moves chromosomes toward division."
        })
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::validation::{validate_frq, validate_mcq};

    #[test]
    fn test_fixture_values_are_valid() {
        assert!(validate_mcq(&sample_mcq_value()).is_ok());
        assert!(validate_frq(&sample_frq_value()).is_ok());
    }

    #[test]
    fn test_raw_fixtures_need_repair() {
        assert!(serde_json::from_str::<serde_json::Value>(PROSE_WRAPPED_UNQUOTED_MCQ).is_err());
        assert!(serde_json::from_str::<serde_json::Value>(RAW_FENCED_FRQ).is_err());
    }
}
