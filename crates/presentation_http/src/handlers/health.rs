//! Health check handler

/// Liveness check - is the server running?
///
/// Plain-text `OK`, nothing else; load balancers only look at the status.
pub async fn healthz() -> &'static str {
    "OK"
}
