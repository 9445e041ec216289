use serde::{Deserialize, Serialize};

use crate::models::domain::McqQuestion;

/// Body of a successful `POST /api/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuizResponse {
    pub questions: Vec<McqQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectsResponse {
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitsResponse {
    pub subject: String,
    pub units: Vec<String>,
}
