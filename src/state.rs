use std::sync::Arc;
use std::time::Instant;

use crate::gemini::TextGenerator;
use crate::rate_limit::RequestHistoryStore;

// app's shared state
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub history: Arc<RequestHistoryStore>, // owned here, shared with the sweeper
    pub started_at: Instant,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, history: Arc<RequestHistoryStore>) -> Self {
        Self {
            generator,
            history,
            started_at: Instant::now(),
        }
    }
}
