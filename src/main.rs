use actix_web::{middleware::Logger, web, App, HttpServer};

use ap_question_server::{
    app_state::AppState,
    config::Config,
    handlers,
    middleware::{cors_policy, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let state = web::Data::new(AppState::new(Config::from_env()));
    let config = state.config.clone();
    if let Err(e) = config.validate_for_production() {
        log::warn!("Configuration problem, generation requests will fail: {}", e);
    }

    let (host, port) = config.bind_address();
    log::info!("Server running on http://{}:{}", host, port);
    log::info!("CORS allowed origin: {}", config.allowed_origin);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors_policy(&config.allowed_origin))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
