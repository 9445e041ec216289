use actix_web::{get, web, HttpResponse};

use crate::{
    constants::ap_units::{subjects, unit_label, units_for_subject},
    errors::AppError,
    models::dto::{
        request::UnitsQuery,
        response::{SubjectsResponse, UnitsResponse},
    },
};

#[get("/api/subjects")]
pub async fn list_subjects() -> HttpResponse {
    HttpResponse::Ok().json(SubjectsResponse {
        subjects: subjects().map(str::to_string).collect(),
    })
}

#[get("/api/units")]
pub async fn list_units(query: web::Query<UnitsQuery>) -> Result<HttpResponse, AppError> {
    let subject = query.into_inner().subject;
    let units = units_for_subject(&subject)
        .ok_or_else(|| AppError::NotFound(format!("Subject '{}' not found", subject)))?;

    Ok(HttpResponse::Ok().json(UnitsResponse {
        units: units
            .iter()
            .enumerate()
            .map(|(index, unit)| unit_label(index, unit))
            .collect(),
        subject,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_list_subjects() {
        let app = test::init_service(App::new().service(list_subjects)).await;

        let req = test::TestRequest::get().uri("/api/subjects").to_request();
        let body: SubjectsResponse = test::call_and_read_body_json(&app, req).await;

        assert!(body.subjects.iter().any(|s| s == "AP Biology"));
    }

    #[actix_web::test]
    async fn test_list_units_for_known_subject() {
        let app = test::init_service(App::new().service(list_units)).await;

        let req = test::TestRequest::get()
            .uri("/api/units?subject=AP%20Precalculus")
            .to_request();
        let body: UnitsResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.subject, "AP Precalculus");
        assert_eq!(body.units[0], "Unit 1: Polynomial and Rational Functions");
        assert_eq!(body.units.len(), 4);
    }

    #[actix_web::test]
    async fn test_list_units_for_unknown_subject() {
        let app = test::init_service(App::new().service(list_units)).await;

        let req = test::TestRequest::get()
            .uri("/api/units?subject=AP%20Latin")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
