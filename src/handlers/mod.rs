mod chat;
mod generate;
mod health;
mod quotes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use chat::{chat_handler, quota_handler};
pub use health::{health_handler, metrics_handler};
pub use quotes::{mood_quote_handler, story_handler};

// every route the gateway serves
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/chat", post(chat_handler))
        .route("/chat/quota", get(quota_handler))
        .route("/quotes/mood", post(mood_quote_handler))
        .route("/stories", post(story_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::Router;
    use axum::body::Body;
    use axum::http::Request;
    use axum::response::Response;

    use crate::gemini::{GenerationError, TextGenerator};
    use crate::identity::FORWARDED_FOR;
    use crate::rate_limit::RequestHistoryStore;
    use crate::state::AppState;

    // Records prompts and answers with a canned reply or a failure
    pub struct FakeGenerator {
        reply: Option<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeGenerator {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => Err(GenerationError::Upstream {
                    status: 503,
                    body: "unavailable".to_string(),
                }),
            }
        }
    }

    pub fn test_app(generator: FakeGenerator) -> (Router, Arc<FakeGenerator>) {
        let generator = Arc::new(generator);
        let state = Arc::new(AppState::new(
            generator.clone(),
            Arc::new(RequestHistoryStore::default()),
        ));
        (super::router(state), generator)
    }

    pub fn post_json(uri: &str, client: Option<&str>, body: serde_json::Value) -> Request<Body> {
        let mut builder = Request::post(uri).header("content-type", "application/json");
        if let Some(ip) = client {
            builder = builder.header(FORWARDED_FOR, ip);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    pub fn get(uri: &str, client: Option<&str>) -> Request<Body> {
        let mut builder = Request::get(uri);
        if let Some(ip) = client {
            builder = builder.header(FORWARDED_FOR, ip);
        }
        builder.body(Body::empty()).unwrap()
    }

    pub async fn body_json(res: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
