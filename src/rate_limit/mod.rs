//! Admission control for calls to the language model.
//!
//! Every client identity gets a history of accepted request timestamps. A new
//! request is admitted only if the client is under both the daily quota and
//! the short burst limit; the quota endpoint reads the same history without
//! touching it.

mod quota;
mod store;
mod sweeper;

pub use quota::QuotaReport;
pub use store::RequestHistoryStore;
pub use sweeper::idle_sweeper;

/// Milliseconds since the Unix epoch.
pub type Millis = i64;

pub const MINUTE_MS: Millis = 60 * 1000;
pub const DAY_MS: Millis = 24 * 60 * MINUTE_MS;

/// Burst and daily limits, shared by every client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionLimits {
    pub burst_limit: usize,
    pub burst_window_ms: Millis,
    pub daily_limit: usize,
    pub daily_window_ms: Millis,
}

impl Default for AdmissionLimits {
    fn default() -> Self {
        Self {
            burst_limit: 5,
            burst_window_ms: MINUTE_MS,
            daily_limit: 50,
            daily_window_ms: DAY_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("daily limit reached, try again tomorrow")]
    DailyLimitExceeded,
    #[error("too many messages, wait a moment and try again")]
    BurstLimitExceeded,
}

impl Rejection {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DailyLimitExceeded => "daily",
            Self::BurstLimitExceeded => "burst",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Admit,
    Reject(Rejection),
}

impl Decision {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Decision::Admit)
    }
}

/// Current wall clock in epoch milliseconds.
pub fn now_millis() -> Millis {
    chrono::Utc::now().timestamp_millis()
}
