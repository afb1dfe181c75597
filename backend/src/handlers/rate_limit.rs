use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use governor::clock::{Clock, DefaultClock};
use governor::middleware::NoOpMiddleware;
use governor::state::keyed::DashMapStateStore;
use governor::{Quota, RateLimiter};
use serde_json::json;
use tokio::task::JoinHandle;

use crate::AppState;

/// How often idle clients are dropped from the limiter.
pub const PRUNE_INTERVAL: Duration = Duration::from_secs(60);

type KeyedLimiter<C> =
    RateLimiter<String, DashMapStateStore<String>, C, NoOpMiddleware<<C as Clock>::Instant>>;

/// Per-client submission quota.
///
/// Clients are keyed by socket address. Proxy headers are only read when the
/// service is configured to sit behind a proxy that sets them.
pub struct LeadRateLimiter<C: Clock = DefaultClock> {
    limiter: KeyedLimiter<C>,
    trust_proxy_headers: bool,
}

impl LeadRateLimiter {
    pub fn new(per_minute: NonZeroU32, trust_proxy_headers: bool) -> Self {
        Self::with_clock(per_minute, trust_proxy_headers, &DefaultClock::default())
    }
}

impl<C: Clock> LeadRateLimiter<C> {
    pub fn with_clock(per_minute: NonZeroU32, trust_proxy_headers: bool, clock: &C) -> Self {
        Self {
            limiter: RateLimiter::dashmap_with_clock(Quota::per_minute(per_minute), clock),
            trust_proxy_headers,
        }
    }

    /// Records one submission for `key`; `false` once the quota is used up.
    pub fn allow(&self, key: &str) -> bool {
        self.limiter.check_key(&key.to_string()).is_ok()
    }

    pub fn client_key(&self, request: &Request) -> String {
        if self.trust_proxy_headers {
            if let Some(client) = forwarded_client(request.headers()) {
                return client;
            }
        }
        request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Forgets clients whose quota has fully refilled.
    pub fn prune(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }
}

/// First hop of `X-Forwarded-For`, else `X-Real-IP`.
fn forwarded_client(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        })
        .map(str::to_string)
}

pub fn spawn_pruning(state: Arc<AppState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            state.limiter.prune();
            tracing::debug!("Rate limiter tracking {} clients", state.limiter.tracked_clients());
        }
    })
}

pub async fn limit_lead_submissions(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let key = state.limiter.client_key(&request);
    if !state.limiter.allow(&key) {
        tracing::warn!("Lead submission rate limit hit for {}", key);
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": "Too many requests, please wait a minute and try again."})),
        )
            .into_response();
    }
    next.run(request).await
}
