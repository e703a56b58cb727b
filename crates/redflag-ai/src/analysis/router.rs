use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::chat::ChatMessage;
use super::profile::validate_profile_text;
use super::service::AnalysisService;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, alias = "roastMode")]
    pub roast_mode: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub second: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Router builder exposing the profile and chat analysis endpoints.
pub fn analysis_router(service: Arc<AnalysisService>) -> Router {
    Router::new()
        .route("/api/v1/profile/analyze", post(analyze_profile_handler))
        .route("/api/v1/profile/classify", post(classify_profile_handler))
        .route("/api/v1/profile/compare", post(compare_profiles_handler))
        .route("/api/v1/chat/analyze", post(analyze_chat_handler))
        .with_state(service)
}

pub(crate) async fn analyze_profile_handler(
    State(service): State<Arc<AnalysisService>>,
    axum::Json(request): axum::Json<ProfileRequest>,
) -> Response {
    let text = request.text.unwrap_or_default();
    match validate_profile_text(&text) {
        Ok(valid) => {
            let report = service.analyze_profile(valid, request.roast_mode);
            (StatusCode::OK, axum::Json(report)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

/// Raw classification; absent or empty text yields an empty list rather than an error.
pub(crate) async fn classify_profile_handler(
    State(service): State<Arc<AnalysisService>>,
    axum::Json(request): axum::Json<ProfileRequest>,
) -> Response {
    let text = request.text.unwrap_or_default();
    let types = service.classify_profile(&text);
    let response = service.compose_response(&types);
    let payload = json!({
        "profile_types": types,
        "response": response,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn compare_profiles_handler(
    State(service): State<Arc<AnalysisService>>,
    axum::Json(request): axum::Json<CompareRequest>,
) -> Response {
    let first = request.first.unwrap_or_default();
    let second = request.second.unwrap_or_default();
    let comparison = service.compare_profiles(&first, &second);
    (StatusCode::OK, axum::Json(comparison)).into_response()
}

pub(crate) async fn analyze_chat_handler(
    State(service): State<Arc<AnalysisService>>,
    axum::Json(request): axum::Json<ChatRequest>,
) -> Response {
    let analysis = service.analyze_chat(&request.messages);
    (StatusCode::OK, axum::Json(analysis)).into_response()
}
