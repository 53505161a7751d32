use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod clock;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod repo;
mod services;
mod suggestions;

use config::Config;
use repo::PgCheckInRepository;
use services::CheckInService;
use suggestions::OpenRouterProvider;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub service: Arc<CheckInService>,
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route(
            "/api/check-in",
            post(handlers::check_in::create_or_update).get(handlers::check_in::list_by_range),
        )
        .route("/api/check-in/today", get(handlers::check_in::get_today))
        .fallback(handlers::not_found)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checkin_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();

    let db = db::create_pool(&config.database_url).await;

    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations applied");

    let repository = Arc::new(PgCheckInRepository::new(db.clone()));
    let provider = Arc::new(OpenRouterProvider::new(&config));
    let service = Arc::new(CheckInService::new(
        repository,
        provider,
        config.reference_timezone,
    ));

    let state = AppState { db, service };

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .frontend_url
                .parse::<axum::http::HeaderValue>()
                .expect("FRONTEND_URL must be a valid origin"),
        )
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    let app = build_router(state).layer(cors).layer(TraceLayer::new_for_http());

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
