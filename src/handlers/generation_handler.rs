use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{GenerateQuestionRequest, GenerateQuizRequest},
        response::GenerateQuizResponse,
    },
};

#[post("/api/generate")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let request_id = get_request_id(&req).unwrap_or_default();
    log::info!(
        "[{}] Generating MCQs for {} on \"{}\"",
        request_id,
        request.subject,
        request.topic
    );

    let questions = state
        .question_generator
        .generate_mcq_batch(&request.subject, &request.topic)
        .await
        .map_err(|e| {
            log::error!("[{}] Error generating content: {}", request_id, e);
            AppError::from(e)
        })?;

    Ok(HttpResponse::Ok().json(GenerateQuizResponse { questions }))
}

#[post("/api/questions/mcq")]
pub async fn generate_mcq(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    log::info!(
        "[{}] MCQ requested for {}, {}",
        get_request_id(&req).unwrap_or_default(),
        request.subject,
        request.unit
    );

    let mcq = state
        .question_generator
        .generate_mcq(&request.subject, &request.unit)
        .await?;
    Ok(HttpResponse::Ok().json(mcq))
}

#[post("/api/questions/frq")]
pub async fn generate_frq(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    log::info!(
        "[{}] FRQ requested for {}, {}",
        get_request_id(&req).unwrap_or_default(),
        request.subject,
        request.unit
    );

    let frq = state
        .question_generator
        .generate_frq(&request.subject, &request.unit)
        .await?;
    Ok(HttpResponse::Ok().json(frq))
}
