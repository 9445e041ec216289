use serde::Deserialize;
use validator::Validate;

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    #[validate(length(min = 1, max = 200))]
    pub topic: String,
}

/// Body of the single-question endpoints.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuestionRequest {
    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    #[validate(length(min = 1, max = 200))]
    pub unit: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnitsQuery {
    pub subject: String,
}
