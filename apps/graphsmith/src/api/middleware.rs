//! # Middleware Module
//!
//! Global rate limiting for the Graphsmith HTTP API.
//!
//! Generation requests do real disk writes, so the API carries a single
//! process-wide limiter rather than a per-client one.
//!
//! ## Configuration
//!
//! - `GRAPHSMITH_RATE_LIMIT`: requests per second (default: 100,
//!   0 disables the limiter entirely)

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;

// =============================================================================
// RATE LIMITER
// =============================================================================

/// Global rate limiter type alias.
pub type GlobalRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Build the global rate limiter from `GRAPHSMITH_RATE_LIMIT`.
///
/// Returns `None` when the variable is set to 0 (limiter disabled).
/// Unset or unparseable values fall back to the default of 100 req/s.
pub fn rate_limiter_from_env() -> Option<GlobalRateLimiter> {
    let rps = std::env::var("GRAPHSMITH_RATE_LIMIT")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(100);

    let rps = NonZeroU32::new(rps)?;
    tracing::info!("Rate limiting enabled: {} requests/second", rps);
    Some(Arc::new(RateLimiter::direct(Quota::per_second(rps))))
}

/// Rate limiting middleware.
///
/// Checks the global rate limiter before allowing requests through.
/// Returns 429 Too Many Requests if the limit is exceeded.
pub async fn rate_limit_middleware(
    State(limiter): State<GlobalRateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, &'static str)> {
    match limiter.check() {
        Ok(_) => Ok(next.run(request).await),
        Err(_) => {
            tracing::warn!("Rate limit exceeded");
            Err((StatusCode::TOO_MANY_REQUESTS, "Too Many Requests"))
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_limiter_allows_first_request() {
        let limiter = Arc::new(RateLimiter::direct(Quota::per_second(
            NonZeroU32::new(50).expect("nonzero"),
        )));
        assert!(limiter.check().is_ok());
    }

    #[test]
    fn exhausted_limiter_rejects() {
        let limiter = Arc::new(RateLimiter::direct(Quota::per_second(
            NonZeroU32::new(1).expect("nonzero"),
        )));
        assert!(limiter.check().is_ok());
        // Burst capacity is one; the second immediate check must fail.
        assert!(limiter.check().is_err());
    }
}
