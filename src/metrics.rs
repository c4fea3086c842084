use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Gauge, Histogram, register_counter, register_counter_vec, register_gauge,
    register_histogram,
};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("chatty_generation_requests_total", "Total generation requests").unwrap();
    pub static ref ADMITTED_TOTAL: Counter =
        register_counter!("chatty_admitted_total", "Requests admitted by the rate limiter").unwrap();
    pub static ref REJECTED_TOTAL: CounterVec = register_counter_vec!(
        "chatty_rejected_total",
        "Requests rejected by the rate limiter",
        &["reason"]
    )
    .unwrap();
    pub static ref GENERATION_FAILURES: Counter =
        register_counter!("chatty_generation_failures_total", "Failed Gemini calls").unwrap();
    pub static ref GENERATION_LATENCY: Histogram = register_histogram!(
        "chatty_generation_latency_seconds",
        "Gemini call latency in seconds"
    )
    .unwrap();
    pub static ref TRACKED_CLIENTS: Gauge =
        register_gauge!("chatty_tracked_clients", "Client identities held in memory").unwrap();
}
