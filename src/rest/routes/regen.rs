// rest/routes/regen.rs — regeneration-only fix.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

use crate::parse::strip_fences;
use crate::prompt;
use crate::AppContext;

#[derive(Debug, Deserialize)]
pub struct ChatRegenRequest {
    pub error: String,
    pub code: String,
    pub language: String,
}

/// Ask the model for corrected code only; the whole reply is treated as
/// code (no labeled sections) and fence-stripped before returning.
pub async fn regen(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<ChatRegenRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let prompt = prompt::regen_prompt(&body.language, &body.error, &body.code);

    let reply = ctx.upstream.generate(&prompt).await.map_err(|e| {
        warn!(error = %e, "regen relay failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": e.to_string() })),
        )
    })?;

    Ok(Json(json!({ "response": strip_fences(&reply) })))
}
