pub mod catalog_handler;
pub mod generation_handler;
pub mod health_handler;

use actix_web::web;

pub use catalog_handler::{list_subjects, list_units};
pub use generation_handler::{generate_frq, generate_mcq, generate_quiz};
pub use health_handler::health_check;

use crate::errors::AppError;

/// Registers every route plus a JSON extractor config that reports bad
/// bodies in the same `{error, details}` shape as other failures.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .service(health_check)
    .service(list_subjects)
    .service(list_units)
    .service(generate_quiz)
    .service(generate_mcq)
    .service(generate_frq);
}
