use serde::Serialize;

use super::{Millis, RequestHistoryStore};
use crate::identity::ClientIdentity;

/// Daily usage summary shown to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotaReport {
    pub used: usize,
    pub remaining: usize,
    pub max: usize,
}

impl RequestHistoryStore {
    /// Project a client's history into a quota summary.
    ///
    /// Uses the same trailing-day filter as [`RequestHistoryStore::evaluate`]
    /// but never mutates the store and is not counted as a request.
    pub fn report(&self, identity: &ClientIdentity, now: Millis) -> QuotaReport {
        let max = self.limits().daily_limit;
        let used = self.daily_usage(identity, now);

        QuotaReport {
            used,
            remaining: max.saturating_sub(used),
            max,
        }
    }
}
