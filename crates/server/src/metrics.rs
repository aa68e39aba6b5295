use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use once_cell::sync::Lazy;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Encoder, Histogram,
    IntCounter, IntCounterVec, TextEncoder,
};

// Prometheus metrics (default registry)
pub static REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "customer_api_requests_total",
        "Total HTTP requests handled"
    )
    .expect("register requests_total")
});

pub static REQUEST_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "customer_api_request_duration_seconds",
        "Request duration in seconds",
        vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("register request_duration")
});

pub static CUSTOMERS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "customer_api_customers_created_total",
        "Total customers saved"
    )
    .expect("register customers_created_total")
});

/// Lookups by id, labelled `hit` or `miss`.
pub static CUSTOMER_LOOKUPS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "customer_api_customer_lookups_total",
        "Customer lookups by id",
        &["result"]
    )
    .expect("register customer_lookups_total")
});

pub fn record_lookup(found: bool) {
    let label = if found { "hit" } else { "miss" };
    CUSTOMER_LOOKUPS_TOTAL.with_label_values(&[label]).inc();
}

/// Middleware: count every request and observe its latency.
pub async fn track_requests(req: Request, next: Next) -> Response {
    REQUESTS_TOTAL.inc();
    let timer = REQUEST_DURATION.start_timer();
    let resp = next.run(req).await;
    timer.observe_duration();
    resp
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
