use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use leads::LeadDraft;
use serde_json::{json, Value};

use crate::api::lead_delivery::LeadEnvelope;
use crate::AppState;

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<LeadDraft>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    // the wire shape has no industry, so any page's business type is accepted here
    let lead = match leads::validate(&draft, &state.business_types) {
        Ok(lead) => lead,
        Err(errors) => {
            tracing::info!("Rejected lead submission: {}", errors);
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"error": "Validation failed", "fields": errors})),
            ));
        }
    };

    let envelope = LeadEnvelope::new(lead);
    if let Err(e) = state.delivery.deliver(&envelope).await {
        tracing::error!("Lead {} could not be delivered: {}", envelope.id, e);
        sentry::capture_message(
            &format!("Lead {} could not be delivered: {}", envelope.id, e),
            sentry::Level::Error,
        );
        return Err((
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": "We couldn't send your request right now. Please try again shortly."})),
        ));
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({
            "message": "Thanks! We'll be in touch within one business day.",
            "id": envelope.id,
        })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::crm_webhook::CrmWebhook;
    use crate::api::lead_delivery::{LeadDelivery, LeadSink};
    use crate::handlers::rate_limit::LeadRateLimiter;
    use axum::extract::ConnectInfo;
    use std::net::SocketAddr;
    use crate::build_app;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use nonzero_ext::nonzero;
    use tower::ServiceExt;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state_with(sinks: Vec<LeadSink>, per_minute: std::num::NonZeroU32) -> Arc<AppState> {
        state_with_limiter(sinks, LeadRateLimiter::new(per_minute, false))
    }

    fn state_with_limiter(sinks: Vec<LeadSink>, limiter: LeadRateLimiter) -> Arc<AppState> {
        Arc::new(AppState {
            delivery: LeadDelivery::new(sinks),
            business_types: leads::all_business_types(),
            limiter,
        })
    }

    fn valid_body() -> Value {
        json!({
            "name": "Grace Okafor",
            "email": "grace@okaforlaw.com",
            "phone": "(404) 555-0110",
            "businessType": "family-law",
            "message": "Most of our clients still come from referrals.",
            "selectedService": "Law Firm Marketing Consultation"
        })
    }

    /// A lead POST arriving from `client` port 5000, as `into_make_service_with_connect_info` would tag it.
    fn post_lead(body: &Value, client: &str) -> Request<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri("/api/leads")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        let socket: SocketAddr = format!("{client}:5000").parse().expect("socket address");
        request.extensions_mut().insert(ConnectInfo(socket));
        request
    }

    fn forwarded_for(mut request: Request<Body>, client: &str) -> Request<Body> {
        request
            .headers_mut()
            .insert("x-forwarded-for", client.parse().expect("header value"));
        request
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        serde_json::from_slice(&bytes).expect("json parse")
    }

    #[tokio::test]
    async fn valid_lead_is_accepted() {
        let app = build_app(state_with(vec![LeadSink::Log], nonzero!(5u32)), None);
        let response = app
            .oneshot(post_lead(&valid_body(), "203.0.113.1"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let json = json_body(response).await;
        assert!(json["id"].is_string());
        assert!(json["message"].as_str().unwrap().starts_with("Thanks"));
    }

    #[tokio::test]
    async fn invalid_lead_reports_fields() {
        let app = build_app(state_with(vec![LeadSink::Log], nonzero!(5u32)), None);
        let mut body = valid_body();
        body["email"] = json!("grace-at-okaforlaw");
        body["businessType"] = json!("space-tourism");

        let response = app
            .oneshot(post_lead(&body, "203.0.113.2"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = json_body(response).await;
        assert_eq!(json["error"], "Validation failed");
        assert_eq!(json["fields"]["email"], "Please enter a valid email address");
        assert_eq!(json["fields"]["businessType"], "Please select a valid business type");
        assert!(json["fields"].get("name").is_none());
    }

    #[tokio::test]
    async fn missing_fields_are_validation_errors() {
        let app = build_app(state_with(vec![LeadSink::Log], nonzero!(5u32)), None);
        let response = app
            .oneshot(post_lead(&json!({"name": "Jo"}), "203.0.113.3"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = json_body(response).await;
        assert!(json["fields"].get("name").is_none());
        assert!(json["fields"]["phone"].is_string());
        assert!(json["fields"]["selectedService"].is_string());
    }

    #[tokio::test]
    async fn lead_reaches_the_webhook() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "email": "grace@okaforlaw.com",
                "businessType": "family-law",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let sinks = vec![LeadSink::Log, LeadSink::Webhook(CrmWebhook::new(server.uri()))];
        let app = build_app(state_with(sinks, nonzero!(5u32)), None);
        let response = app
            .oneshot(post_lead(&valid_body(), "203.0.113.4"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn failed_delivery_is_a_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let sinks = vec![LeadSink::Log, LeadSink::Webhook(CrmWebhook::new(server.uri()))];
        let app = build_app(state_with(sinks, nonzero!(5u32)), None);
        let response = app
            .oneshot(post_lead(&valid_body(), "203.0.113.5"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn repeated_submissions_are_rate_limited() {
        let app = build_app(state_with(vec![LeadSink::Log], nonzero!(1u32)), None);

        let first = app
            .clone()
            .oneshot(post_lead(&valid_body(), "198.51.100.9"))
            .await
            .expect("response");
        assert_eq!(first.status(), StatusCode::ACCEPTED);

        let second = app
            .clone()
            .oneshot(post_lead(&valid_body(), "198.51.100.9"))
            .await
            .expect("response");
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);

        let other_client = app
            .oneshot(post_lead(&valid_body(), "198.51.100.10"))
            .await
            .expect("response");
        assert_eq!(other_client.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn rotating_forwarded_for_does_not_reset_the_quota() {
        let app = build_app(state_with(vec![LeadSink::Log], nonzero!(1u32)), None);

        let mut accepted = 0;
        for i in 0..10 {
            let request = forwarded_for(post_lead(&valid_body(), "192.0.2.10"), &format!("203.0.113.{i}"));
            let response = app.clone().oneshot(request).await.expect("response");
            if response.status() == StatusCode::ACCEPTED {
                accepted += 1;
            } else {
                assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
            }
        }
        assert_eq!(accepted, 1);
    }

    #[tokio::test]
    async fn trusted_proxy_headers_separate_clients() {
        let limiter = LeadRateLimiter::new(nonzero!(1u32), true);
        let app = build_app(state_with_limiter(vec![LeadSink::Log], limiter), None);

        // every request comes through the same proxy socket
        for client in ["203.0.113.20", "203.0.113.21"] {
            let request = forwarded_for(post_lead(&valid_body(), "10.0.0.1"), client);
            let response = app.clone().oneshot(request).await.expect("response");
            assert_eq!(response.status(), StatusCode::ACCEPTED);
        }

        let again = forwarded_for(post_lead(&valid_body(), "10.0.0.1"), "203.0.113.20");
        let response = app.oneshot(again).await.expect("response");
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn health_is_not_rate_limited() {
        let app = build_app(state_with(vec![LeadSink::Log], nonzero!(1u32)), None);
        for _ in 0..3 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/api/health")
                        .body(Body::empty())
                        .expect("request"),
                )
                .await
                .expect("response");
            assert_eq!(response.status(), StatusCode::OK);
        }
    }
}
