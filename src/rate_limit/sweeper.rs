use std::sync::Arc;

use tokio::time::{Duration, interval};

use super::{RequestHistoryStore, now_millis};
use crate::metrics::TRACKED_CLIENTS;

// Idle client sweep - runs every `every` until the runtime shuts down
pub async fn idle_sweeper(store: Arc<RequestHistoryStore>, every: Duration) {
    let mut ticker = interval(every);

    tracing::info!(interval = ?every, "idle client sweeper started");

    loop {
        ticker.tick().await;

        let removed = store.sweep(now_millis());
        let remaining = store.tracked_clients();
        TRACKED_CLIENTS.set(remaining as f64);

        tracing::debug!(removed, remaining, "idle client sweep complete");
    }
}
