use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use super::generate::{admit, generate, parse_body, require_text};
use crate::error::AppError;
use crate::gemini::GenerationError;
use crate::identity::ClientIdentity;
use crate::models::{MoodQuoteRequest, MoodQuoteResponse, StoryRequest, StoryResponse};
use crate::state::AppState;

pub fn mood_quote_prompt(mood: &str) -> String {
    format!("Generate a short motivational quote based on the mood: \"{mood}\".")
}

pub fn story_prompt(concern: &str) -> String {
    format!(
        "Write a 100 word or less long, supportive story for someone dealing with: \"{concern}\"."
    )
}

async fn generate_trimmed(state: &AppState, prompt: &str) -> Result<String, AppError> {
    let text = generate(state, prompt).await?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::Empty.into());
    }
    Ok(trimmed.to_string())
}

/// POST /quotes/mood
pub async fn mood_quote_handler(
    State(state): State<Arc<AppState>>,
    identity: ClientIdentity,
    body: Bytes,
) -> Result<Json<MoodQuoteResponse>, AppError> {
    admit(&state, &identity)?;

    let payload: MoodQuoteRequest = parse_body(&body)?;
    require_text("mood", &payload.mood)?;

    let quote = generate_trimmed(&state, &mood_quote_prompt(payload.mood.trim())).await?;
    Ok(Json(MoodQuoteResponse { quote }))
}

/// POST /stories
pub async fn story_handler(
    State(state): State<Arc<AppState>>,
    identity: ClientIdentity,
    body: Bytes,
) -> Result<Json<StoryResponse>, AppError> {
    admit(&state, &identity)?;

    let payload: StoryRequest = parse_body(&body)?;
    require_text("concern", &payload.concern)?;

    let story = generate_trimmed(&state, &story_prompt(payload.concern.trim())).await?;
    Ok(Json(StoryResponse { story }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::test_support::{FakeGenerator, body_json, get, post_json, test_app};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn mood_quote_uses_mood_prompt_and_trims() {
        let (app, generator) = test_app(FakeGenerator::replying("  Keep going.\n"));

        let res = app
            .oneshot(post_json("/quotes/mood", Some("7.7.7.7"), json!({"mood": "anxious"})))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, json!({"quote": "Keep going."}));
        assert_eq!(generator.prompts(), vec![mood_quote_prompt("anxious")]);
    }

    #[tokio::test]
    async fn story_shares_quota_with_chat() {
        let (app, generator) = test_app(FakeGenerator::replying("Once upon a time."));

        app.clone()
            .oneshot(post_json("/chat", Some("8.8.8.8"), json!({"message": "hey"})))
            .await
            .unwrap();
        let res = app
            .clone()
            .oneshot(post_json("/stories", Some("8.8.8.8"), json!({"concern": "exam stress"})))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, json!({"story": "Once upon a time."}));
        assert_eq!(generator.prompts()[1], story_prompt("exam stress"));

        let res = app.oneshot(get("/chat/quota", Some("8.8.8.8"))).await.unwrap();
        assert_eq!(body_json(res).await["used"], 2);
    }

    #[tokio::test]
    async fn blank_reply_is_generation_failure() {
        let (app, _) = test_app(FakeGenerator::replying("   "));

        let res = app
            .oneshot(post_json("/stories", None, json!({"concern": "loneliness"})))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn blank_mood_is_bad_request() {
        let (app, generator) = test_app(FakeGenerator::replying("x"));

        let res = app
            .oneshot(post_json("/quotes/mood", None, json!({"mood": " "})))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(generator.prompts().is_empty());
    }
}
