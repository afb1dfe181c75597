use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
    middleware,
    http::{HeaderValue, Method, header},
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;

mod handlers {
    pub mod lead_handlers;
    pub mod rate_limit;
}
mod api {
    pub mod lead_delivery;
    pub mod smtp_mailer;
    pub mod crm_webhook;
}
mod config {
    pub mod settings;
}

use api::lead_delivery::LeadDelivery;
use config::settings::{Environment, Settings};
use handlers::lead_handlers;
use handlers::rate_limit::{self, LeadRateLimiter};


pub struct AppState {
    delivery: LeadDelivery,
    business_types: Vec<leads::BusinessType>,
    limiter: LeadRateLimiter,
}

fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_TYPE]);

    match frontend_url.and_then(|url| url.parse::<HeaderValue>().ok()) {
        Some(origin) => cors.allow_origin(origin),
        None => cors.allow_origin(Any),
    }
}

pub fn build_app(state: Arc<AppState>, frontend_url: Option<&str>) -> Router {
    let lead_routes = Router::new()
        .route("/api/leads", post(lead_handlers::submit_lead))
        .route_layer(middleware::from_fn_with_state(state.clone(), rate_limit::limit_lead_submissions));

    Router::new()
        .route("/api/health", get(lead_handlers::health_check))
        .merge(lead_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors_layer(frontend_url))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let settings = Settings::from_env().context("invalid configuration")?;

    let _guard = settings.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if settings.environment == Environment::Production && settings.frontend_url.is_none() {
        tracing::warn!("FRONTEND_URL is not set, accepting leads from any origin");
    }

    let delivery = LeadDelivery::from_settings(&settings).context("failed to set up lead delivery")?;
    tracing::info!("Lead delivery sinks: {:?}", delivery.sink_names());

    let state = Arc::new(AppState {
        delivery,
        business_types: leads::all_business_types(),
        limiter: LeadRateLimiter::new(settings.submissions_per_minute, settings.trust_proxy_headers),
    });
    if settings.trust_proxy_headers {
        tracing::info!("Rate limiting by proxy-supplied client address");
    }
    rate_limit::spawn_pruning(state.clone());

    let app = build_app(state, settings.frontend_url.as_deref());

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    tracing::info!("Lead intake listening on {}", settings.bind_addr);
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}
