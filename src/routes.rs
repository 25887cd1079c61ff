use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, CorsConfig};
use crate::error::TranslateError;
use crate::state::AppState;
use crate::translate::{supported_languages, TranslationRequest, TranslationResponse};

pub const SERVICE_NAME: &str = "deepl-translation-api";

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Translation API
        .route("/api/translate", post(translate_text))
        .route("/api/languages", get(get_supported_languages))
}

/// Full application: routes, request tracing and the CORS allow-list
pub fn build_app(state: AppState) -> Result<Router, ConfigError> {
    let cors = cors_layer(&state.config.cors)?;
    Ok(create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state))
}

/// Only listed origins may call the API, with any method or header, credentials included.
/// Methods and headers are mirrored since wildcards are not allowed together with credentials.
pub fn cors_layer(cors: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(cors.origin_headers()?))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME
    }))
}

async fn get_supported_languages() -> Json<Value> {
    Json(json!({ "languages": supported_languages() }))
}

async fn translate_text(
    State(state): State<AppState>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Json<TranslationResponse>, TranslateError> {
    let Json(request) =
        payload.map_err(|rejection| TranslateError::Validation(rejection.body_text()))?;
    let response = state.gateway.translate(request).await?;
    Ok(Json(response))
}
