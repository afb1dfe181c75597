use leads::{LeadFormData, SubmitError};

#[cfg(not(feature = "simulated-intake"))]
mod http {
    use gloo_net::http::Request;
    use leads::{FieldErrors, LeadFormData, SubmitError};
    use serde::Deserialize;

    use crate::config;

    #[derive(Deserialize)]
    struct ErrorResponse {
        error: Option<String>,
        #[serde(default)]
        fields: Option<FieldErrors>,
    }

    pub async fn post_lead(lead: LeadFormData) -> Result<(), SubmitError> {
        let response = Request::post(&config::lead_intake_url())
            .json(&lead)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        log::warn!("Lead intake responded with status {}", status);
        match response.json::<ErrorResponse>().await {
            Ok(ErrorResponse { fields: Some(fields), .. }) if status == 422 && !fields.is_empty() => {
                Err(SubmitError::Invalid(fields))
            }
            Ok(body) => Err(SubmitError::Rejected {
                status,
                message: body.error,
            }),
            Err(_) => Err(SubmitError::Rejected { status, message: None }),
        }
    }
}

/// Hands a validated lead to the intake service.
#[cfg(not(feature = "simulated-intake"))]
pub async fn submit_lead(lead: LeadFormData) -> Result<(), SubmitError> {
    #[cfg(debug_assertions)]
    log::info!("Submitting lead for {}", lead.selected_service);
    http::post_lead(lead).await
}

/// Offline stand-in: waits like a request would, then succeeds.
#[cfg(feature = "simulated-intake")]
pub async fn submit_lead(lead: LeadFormData) -> Result<(), SubmitError> {
    gloo_timers::future::sleep(leads::form::SIMULATED_SUBMIT_DELAY).await;
    #[cfg(debug_assertions)]
    log::info!("Simulated lead submission: {:?}", lead);
    #[cfg(not(debug_assertions))]
    drop(lead);
    Ok(())
}
