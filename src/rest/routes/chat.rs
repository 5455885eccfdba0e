// rest/routes/chat.rs — interactive fix-my-code turn.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

use crate::parse::{parse_reply, strip_fences};
use crate::prompt;
use crate::AppContext;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user: String,
    pub lang: String,
    pub code: String,
    pub error: Option<String>,
}

/// Build the chat prompt, call the model, and return the labeled sections.
/// Absent labels come back as null; only upstream failures are errors.
pub async fn chat(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let prompt = prompt::chat_prompt(&body.user, &body.lang, &body.code, body.error.as_deref());

    let reply = ctx.upstream.generate(&prompt).await.map_err(|e| {
        warn!(error = %e, "chat relay failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": e.to_string() })),
        )
    })?;

    let parsed = parse_reply(&reply);
    Ok(Json(json!({
        "language": parsed.language,
        "chat": parsed.chat,
        "fixed_code": parsed.fixed_code.as_deref().map(strip_fences),
    })))
}
