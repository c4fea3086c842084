use std::collections::VecDeque;

use dashmap::DashMap;

use super::{AdmissionLimits, Decision, Millis, Rejection};
use crate::identity::ClientIdentity;

/// Accepted-request history per client.
///
/// Built once at startup and shared behind an `Arc`. Each identity lives in a
/// `DashMap` entry; `evaluate` holds that entry's write guard for the whole
/// prune, decide and append sequence, so two concurrent requests from the same
/// client cannot both see the same pre-append history.
pub struct RequestHistoryStore {
    histories: DashMap<ClientIdentity, VecDeque<Millis>>,
    limits: AdmissionLimits,
}

impl RequestHistoryStore {
    pub fn new(limits: AdmissionLimits) -> Self {
        Self {
            histories: DashMap::new(),
            limits,
        }
    }

    pub fn limits(&self) -> &AdmissionLimits {
        &self.limits
    }

    /// Decide whether a request from `identity` at `now` may go through.
    ///
    /// Stale timestamps are pruned whatever the outcome. The daily quota is
    /// checked before the burst limit, and only an admitted request is
    /// recorded.
    pub fn evaluate(&self, identity: &ClientIdentity, now: Millis) -> Decision {
        let day_cutoff = now - self.limits.daily_window_ms;
        let burst_cutoff = now - self.limits.burst_window_ms;

        let mut history = self.histories.entry(identity.clone()).or_default();
        history.retain(|&t| t > day_cutoff);

        if history.len() >= self.limits.daily_limit {
            return Decision::Reject(Rejection::DailyLimitExceeded);
        }

        let recent = history.iter().filter(|&&t| t > burst_cutoff).count();
        if recent >= self.limits.burst_limit {
            return Decision::Reject(Rejection::BurstLimitExceeded);
        }

        history.push_back(now);
        Decision::Admit
    }

    /// Number of accepted requests from `identity` inside the daily window.
    /// Read-only: nothing is pruned and no entry is created.
    pub(super) fn daily_usage(&self, identity: &ClientIdentity, now: Millis) -> usize {
        let day_cutoff = now - self.limits.daily_window_ms;

        self.histories
            .get(identity)
            .map(|history| history.iter().filter(|&&t| t > day_cutoff).count())
            .unwrap_or(0)
    }

    /// Drop every client with no request left in the daily window.
    /// Returns how many were removed.
    pub fn sweep(&self, now: Millis) -> usize {
        let day_cutoff = now - self.limits.daily_window_ms;
        let before = self.histories.len();

        self.histories
            .retain(|_, history| history.iter().any(|&t| t > day_cutoff));

        before.saturating_sub(self.histories.len())
    }

    /// Number of clients currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.histories.len()
    }
}

impl Default for RequestHistoryStore {
    fn default() -> Self {
        Self::new(AdmissionLimits::default())
    }
}
