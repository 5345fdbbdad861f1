//! Visit counting middleware for the static file route

use std::{
    sync::Arc,
    task::{Context, Poll},
};

use tower::{Layer, Service};

use crate::handlers::metrics::HitCounter;

/// Layer that counts every request passing through the wrapped service
#[derive(Debug, Clone)]
pub struct HitCountLayer {
    counter: Arc<HitCounter>,
}

impl HitCountLayer {
    /// Create a layer recording into the given counter
    #[must_use]
    pub fn new(counter: Arc<HitCounter>) -> Self {
        Self { counter }
    }
}

impl<S> Layer<S> for HitCountLayer {
    type Service = HitCountService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HitCountService {
            inner,
            counter: Arc::clone(&self.counter),
        }
    }
}

/// Service wrapper that records a hit before dispatching
#[derive(Debug, Clone)]
pub struct HitCountService<S> {
    inner: S,
    counter: Arc<HitCounter>,
}

impl<S, Request> Service<Request> for HitCountService<S>
where
    S: Service<Request>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        // Counted before dispatch: misses register as visits too.
        self.counter.record();
        self.inner.call(request)
    }
}
