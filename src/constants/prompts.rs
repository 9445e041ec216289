//! Prompt templates. `{subject}` and `{unit}` are filled in by
//! [`render_prompt`]; `{unit}` carries the topic for the batch prompt.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub const MCQ_PROMPT: &str = "Generate one multiple-choice question for {subject}, {unit}.
The question should have four options (A, B, C, and D).
Clearly indicate the correct answer (A, B, C, or D).
Provide a brief explanation for why the answer is correct.
Return the response as a JSON object with the following schema:

{
  \"question\": \"The question text\",
  \"choices\": {
    \"A\": \"Choice A text\",
    \"B\": \"Choice B text\",
    \"C\": \"Choice C text\",
    \"D\": \"Choice D text\"
  },
  \"answer\": \"Correct answer (A, B, C, or D)\",
  \"explanation\": \"Explanation of the correct answer\"
}

Ensure the JSON response is valid and parsable.
Do not include any text outside of the JSON structure.
Change all numbers and ensure that question styles are unique, so that no two questions are the same.
If necessary, do not use LaTeX and use plain text instead.";

pub const FRQ_PROMPT: &str = "Generate one free-response question (FRQ) for {subject}, {unit}.
The FRQ should be clearly worded and require a short paragraph or a few steps of work to answer.
Include a \"rubric\" with four criteria scored from 1 to 10, each with a distinct name and point value for clarity.
Clearly indicate a model answer for the question.
Provide a brief explanation for why this is the correct approach or answer.
Return the response as a valid JSON object with the following schema:

{
  \"question\": \"The FRQ question text\",
  \"rubric\": {
    \"criterion_1\": { \"description\": \"Criterion 1 description\", \"points\": \"point value\" },
    \"criterion_2\": { \"description\": \"Criterion 2 description\", \"points\": \"point value\" },
    \"criterion_3\": { \"description\": \"Criterion 3 description\", \"points\": \"point value\" },
    \"criterion_4\": { \"description\": \"Criterion 4 description\", \"points\": \"point value\" }
  },
  \"answer\": \"Model answer to the FRQ\",
  \"explanation\": \"Explanation of the answer or approach\"
}

Only use plain text, do not format anything in Markdown or HTML or LaTeX.
Everything should be readable from a plain text box.";

pub const MCQ_BATCH_PROMPT: &str = "Generate 3 MCQs for {subject} on \"{unit}\".
Return as a JSON array:
[
  {
    \"question\": \"...\",
    \"choices\": { \"A\": \"...\", \"B\": \"...\", \"C\": \"...\", \"D\": \"...\" },
    \"answer\": \"A\",
    \"explanation\": \"...\"
  }
]
Do not include any text outside of the JSON array.";

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(subject|unit)\}").expect("PLACEHOLDER is a valid regex pattern")
});

/// Fills `{subject}` and `{unit}` in a single pass, so placeholder text
/// inside either value is left as written.
pub fn render_prompt(template: &str, subject: &str, unit: &str) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "subject" => subject.to_string(),
            _ => unit.to_string(),
        })
        .into_owned()
}
