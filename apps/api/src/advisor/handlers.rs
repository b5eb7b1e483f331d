//! Axum route handler for the advisor chat.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::advisor::canned_reply;
use crate::documents::handlers::TEMPLATE_PROVIDER;
use crate::errors::AppError;
use crate::llm_client::prompts::ADVISOR_SYSTEM;
use crate::state::AppState;

/// One turn of the conversation; only the content is used.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,
    #[serde(default)]
    pub country: Option<String>,
}

impl ChatRequest {
    /// The last message of the conversation, or the single `message`.
    fn question(&self) -> Option<&str> {
        self.messages
            .as_deref()
            .and_then(|messages| messages.last())
            .map(|m| m.content.as_str())
            .or(self.message.as_deref())
            .filter(|q| !q.trim().is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub provider: &'static str,
}

fn build_prompt(country: &str, question: &str) -> String {
    format!(
        "User moving to: {country}\nQuestion: {question}\n\n\
         Provide helpful advice with emojis and markdown:"
    )
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let question = request
        .question()
        .ok_or_else(|| AppError::Validation("Message is required".to_string()))?;

    let advisor = &state.catalog.advisor;
    let country = request
        .country
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let prompt = build_prompt(country.unwrap_or(&advisor.default_country), question);
    match state.llm.generate(&prompt, ADVISOR_SYSTEM).await {
        Ok(message) => {
            debug!("Advisor reply generated by {}", state.llm.provider());
            return Ok(Json(ChatResponse {
                message,
                provider: state.llm.provider(),
            }));
        }
        Err(e) => warn!("Advisor generation unavailable, using canned reply: {e}"),
    }

    Ok(Json(ChatResponse {
        message: canned_reply(question, country, advisor).to_string(),
        provider: TEMPLATE_PROVIDER,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> ChatRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_last_message_is_the_question() {
        let req = request(
            r#"{"message": "ignored", "messages": [
                {"role": "user", "content": "first"},
                {"role": "assistant", "content": "reply"},
                {"role": "user", "content": "where do I live?"}
            ]}"#,
        );
        assert_eq!(req.question(), Some("where do I live?"));
    }

    #[test]
    fn test_single_message() {
        assert_eq!(request(r#"{"message": "hi"}"#).question(), Some("hi"));
    }

    #[test]
    fn test_no_question() {
        assert!(request(r#"{}"#).question().is_none());
        assert!(request(r#"{"message": "  ", "messages": []}"#).question().is_none());
    }

    #[test]
    fn test_prompt_names_destination() {
        let prompt = build_prompt("Canada", "Is rent high?");
        assert!(prompt.starts_with("User moving to: Canada\nQuestion: Is rent high?"));
    }
}
