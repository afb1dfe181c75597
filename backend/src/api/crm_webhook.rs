use reqwest::Client;
use std::time::Duration;

use crate::api::lead_delivery::{DeliveryError, LeadEnvelope};

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts each lead as JSON to a CRM or automation inbox (Zapier, HubSpot forms, ...).
pub struct CrmWebhook {
    client: Client,
    url: String,
}

impl CrmWebhook {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    pub async fn post(&self, envelope: &LeadEnvelope) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.url)
            .timeout(WEBHOOK_TIMEOUT)
            .json(envelope)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DeliveryError::WebhookStatus(response.status().as_u16()));
        }
        Ok(())
    }
}
