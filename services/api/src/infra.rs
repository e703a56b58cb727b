use metrics_exporter_prometheus::PrometheusHandle;
use redflag_ai::analysis::{validate_profile_text, AnalysisService, ChatMessage};
use redflag_ai::config::AnalysisConfig;
use redflag_ai::error::AppError;
use serde::Deserialize;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Service for one-shot commands, with any persisted patterns already loaded.
pub(crate) fn warmed_service(config: &AnalysisConfig) -> AnalysisService {
    let service = AnalysisService::from_config(config);
    let loaded = service.memory().load();
    info!(loaded, "pattern memory loaded");
    service
}

/// Profile text from `--file` when given, else the positional argument, validated for length.
pub(crate) fn profile_text(text: Option<String>, file: Option<&Path>) -> Result<String, AppError> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => text.unwrap_or_default(),
    };
    let trimmed = raw.trim_end();
    validate_profile_text(trimmed)?;
    Ok(trimmed.to_string())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ChatDocument {
    Messages(Vec<ChatMessage>),
    Wrapped { messages: Vec<ChatMessage> },
}

/// Accepts either a bare message array or an object with a `messages` array.
pub(crate) fn parse_chat_messages(raw: &str) -> Result<Vec<ChatMessage>, AppError> {
    let document: ChatDocument = serde_json::from_str(raw)?;
    Ok(match document {
        ChatDocument::Messages(messages) | ChatDocument::Wrapped { messages } => messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_and_wrapped_chat_documents() {
        let bare = parse_chat_messages(r#"[{"text": "hi", "replyTime": 30}]"#).expect("bare");
        let wrapped =
            parse_chat_messages(r#"{"messages": [{"text": "hi", "reply_time": 30}]}"#)
                .expect("wrapped");

        assert_eq!(bare, wrapped);
        assert_eq!(bare[0].reply_time, Some(30.0));
    }

    #[test]
    fn rejects_malformed_chat_documents() {
        let error = parse_chat_messages(r#"{"text": "hi"}"#).expect_err("not a chat log");
        assert!(matches!(error, AppError::Payload(_)));
    }

    #[test]
    fn profile_text_is_validated() {
        let error = profile_text(Some("short".to_string()), None).expect_err("too short");
        assert!(matches!(error, AppError::Input(_)));

        let text = profile_text(Some("long enough profile text\n".to_string()), None)
            .expect("valid text");
        assert_eq!(text, "long enough profile text");
    }
}
