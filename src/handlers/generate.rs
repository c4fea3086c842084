use std::time::Instant;

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::identity::ClientIdentity;
use crate::metrics::{
    ADMITTED_TOTAL, GENERATION_FAILURES, GENERATION_LATENCY, REJECTED_TOTAL, REQUEST_TOTAL,
    TRACKED_CLIENTS,
};
use crate::rate_limit::{Decision, now_millis};
use crate::state::AppState;

// Admission gate shared by every route that calls Gemini
pub(crate) fn admit(state: &AppState, identity: &ClientIdentity) -> Result<(), AppError> {
    REQUEST_TOTAL.inc();

    let decision = state.history.evaluate(identity, now_millis());
    TRACKED_CLIENTS.set(state.history.tracked_clients() as f64);
    tracing::debug!(client = %identity, admitted = decision.is_admitted(), "admission evaluated");

    match decision {
        Decision::Admit => {
            ADMITTED_TOTAL.inc();
            Ok(())
        }
        Decision::Reject(reason) => {
            REJECTED_TOTAL.with_label_values(&[reason.kind()]).inc();
            tracing::info!(client = %identity, %reason, "request rejected");
            Err(reason.into())
        }
    }
}

// Body is parsed only after admission, so a malformed body still uses a slot
pub(crate) fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::InvalidRequest(format!("invalid request body: {e}")))
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidRequest(format!("{field} must not be empty")));
    }
    Ok(())
}

// Forward a prompt to the generator; failures do not refund the slot
pub(crate) async fn generate(state: &AppState, prompt: &str) -> Result<String, AppError> {
    let start_time = Instant::now();
    let result = state.generator.generate(prompt).await;
    GENERATION_LATENCY.observe(start_time.elapsed().as_secs_f64());

    result.map_err(|e| {
        GENERATION_FAILURES.inc();
        tracing::error!(error = %e, "Gemini generation failed");
        AppError::from(e)
    })
}
