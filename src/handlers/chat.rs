use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use super::generate::{admit, generate, parse_body, require_text};
use crate::error::AppError;
use crate::identity::ClientIdentity;
use crate::models::{ChatRequest, ChatResponse};
use crate::rate_limit::{QuotaReport, now_millis};
use crate::state::AppState;

/// POST /chat
///
/// Admission runs before the body is read. A rejected request gets a 429 and
/// is not recorded; an admitted one is counted even if Gemini then fails.
pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    identity: ClientIdentity,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    admit(&state, &identity)?;

    let payload: ChatRequest = parse_body(&body)?;
    require_text("message", &payload.message)?;

    let reply = generate(&state, &payload.message).await?;
    Ok(Json(ChatResponse { reply }))
}

/// GET /chat/quota
pub async fn quota_handler(
    State(state): State<Arc<AppState>>,
    identity: ClientIdentity,
) -> Json<QuotaReport> {
    Json(state.history.report(&identity, now_millis()))
}
