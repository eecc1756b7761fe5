use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use bookquiz_server::{
    app_state::AppState,
    auth::{AuthMiddleware, JwtService},
    config::Config,
    handlers,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);
    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let cors_allowed_origin = config.cors_allowed_origin.clone();

    let state = AppState::new(config)
        .await
        .unwrap_or_else(|err| panic!("Failed to initialize application state: {}", err));

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = match &cors_allowed_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(jwt_service.clone()))
            .service(handlers::health_check)
            .service(handlers::health_check_live)
            .service(handlers::health_check_ready)
            .service(
                web::scope("/api/auth")
                    .service(handlers::register)
                    .service(handlers::login),
            )
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .service(handlers::create_quiz)
                    .service(handlers::search_quizzes)
                    .service(handlers::get_quiz)
                    .service(handlers::update_quiz)
                    .service(handlers::delete_quiz)
                    .service(handlers::evaluate_answer)
                    .service(handlers::get_quizzes_by_book)
                    .service(handlers::submit_answer)
                    .service(handlers::correct_answer)
                    .service(handlers::get_user_answers)
                    .service(handlers::get_user_quiz_summary)
                    .service(handlers::get_user_answer_stats)
                    .service(handlers::get_user),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
