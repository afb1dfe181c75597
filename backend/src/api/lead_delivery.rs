use chrono::{DateTime, Utc};
use leads::LeadFormData;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::api::crm_webhook::CrmWebhook;
use crate::api::smtp_mailer::SmtpMailer;
use crate::config::settings::Settings;

/// A validated lead plus what the server knows about its arrival.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadEnvelope {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub lead: LeadFormData,
}

impl LeadEnvelope {
    pub fn new(lead: LeadFormData) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            lead,
        }
    }
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("smtp setup failed: {0}")]
    SmtpSetup(String),
    #[error("smtp delivery failed: {0}")]
    Smtp(String),
    #[error("webhook request failed: {0}")]
    Webhook(#[from] reqwest::Error),
    #[error("webhook responded with status {0}")]
    WebhookStatus(u16),
    #[error("no sink accepted lead {0}")]
    Undelivered(Uuid),
}

pub enum LeadSink {
    Log,
    Smtp(SmtpMailer),
    Webhook(CrmWebhook),
}

impl LeadSink {
    pub fn name(&self) -> &'static str {
        match self {
            LeadSink::Log => "log",
            LeadSink::Smtp(_) => "smtp",
            LeadSink::Webhook(_) => "webhook",
        }
    }

    fn is_external(&self) -> bool {
        !matches!(self, LeadSink::Log)
    }

    pub async fn deliver(&self, envelope: &LeadEnvelope) -> Result<(), DeliveryError> {
        match self {
            LeadSink::Log => {
                tracing::info!(
                    lead_id = %envelope.id,
                    service = %envelope.lead.selected_service,
                    business_type = %envelope.lead.business_type,
                    "New lead received"
                );
                Ok(())
            }
            LeadSink::Smtp(mailer) => mailer.send(envelope).await,
            LeadSink::Webhook(webhook) => webhook.post(envelope).await,
        }
    }
}

/// Fans a lead out to every configured sink.
pub struct LeadDelivery {
    sinks: Vec<LeadSink>,
}

impl LeadDelivery {
    pub fn new(sinks: Vec<LeadSink>) -> Self {
        Self { sinks }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, DeliveryError> {
        let mut sinks = vec![LeadSink::Log];
        if let Some(smtp) = &settings.smtp {
            sinks.push(LeadSink::Smtp(SmtpMailer::new(smtp)?));
        }
        if let Some(url) = &settings.webhook_url {
            sinks.push(LeadSink::Webhook(CrmWebhook::new(url.clone())));
        }
        Ok(Self::new(sinks))
    }

    pub fn sink_names(&self) -> Vec<&'static str> {
        self.sinks.iter().map(LeadSink::name).collect()
    }

    /// Succeeds when at least one external sink took the lead, or when only
    /// the log sink is configured.
    pub async fn deliver(&self, envelope: &LeadEnvelope) -> Result<(), DeliveryError> {
        let mut external = 0;
        let mut delivered = 0;

        for sink in &self.sinks {
            let outcome = sink.deliver(envelope).await;
            if let Err(e) = &outcome {
                tracing::error!("Failed to deliver lead {} via {}: {}", envelope.id, sink.name(), e);
            }
            // the log line is a record, not a delivery
            if sink.is_external() {
                external += 1;
                if outcome.is_ok() {
                    delivered += 1;
                }
            }
        }

        if external > 0 && delivered == 0 {
            return Err(DeliveryError::Undelivered(envelope.id));
        }
        Ok(())
    }
}
