pub mod completion_client;
pub mod gemini_client;
pub mod question_generator;
pub mod question_kind;
