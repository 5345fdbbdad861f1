//! Visit counting and the admin metrics page

use std::sync::atomic::{AtomicU64, Ordering};

use axum::{extract::State, response::Html};

use crate::state::AppState;

/// Atomic counter for static asset visits
///
/// Lives for the process only; a restart starts the count from zero.
/// Increments are atomic so no hit is lost however many requests are in
/// flight.
#[derive(Debug)]
pub struct HitCounter {
    hits: AtomicU64,
}

impl Default for HitCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl HitCounter {
    /// Create a counter starting at zero
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
        }
    }

    /// Record one visit
    pub fn record(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Current visit count
    #[must_use]
    pub fn count(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Reset the count to zero
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}

/// Admin metrics page reporting the visit count
pub async fn admin_metrics(State(state): State<AppState>) -> Html<String> {
    let hits = state.hits.count();
    Html(format!(
        "<html><body><h1>Welcome, Chirpy Admin</h1><p>Chirpy has been visited {hits} times!</p></body></html>"
    ))
}
