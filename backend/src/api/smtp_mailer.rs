use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::api::lead_delivery::{DeliveryError, LeadEnvelope};
use crate::config::settings::SmtpSettings;

/// Emails each lead to the sales inbox.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self, DeliveryError> {
        let from = settings
            .notify_from
            .parse::<Mailbox>()
            .map_err(|e| DeliveryError::SmtpSetup(format!("LEAD_NOTIFY_FROM: {}", e)))?;
        let to = settings
            .notify_to
            .parse::<Mailbox>()
            .map_err(|e| DeliveryError::SmtpSetup(format!("LEAD_NOTIFY_TO: {}", e)))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            .map_err(|e| DeliveryError::SmtpSetup(e.to_string()))?
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        Ok(Self { transport, from, to })
    }

    fn compose(&self, envelope: &LeadEnvelope) -> Result<Message, DeliveryError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject(envelope))
            .header(ContentType::TEXT_PLAIN);

        // answering the notification should reach the prospect directly
        if let Ok(reply_to) = format!("{} <{}>", envelope.lead.name, envelope.lead.email).parse::<Mailbox>() {
            builder = builder.reply_to(reply_to);
        }

        builder
            .body(render_body(envelope))
            .map_err(|e| DeliveryError::Smtp(e.to_string()))
    }

    pub async fn send(&self, envelope: &LeadEnvelope) -> Result<(), DeliveryError> {
        let message = self.compose(envelope)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| DeliveryError::Smtp(e.to_string()))?;
        Ok(())
    }
}

pub fn subject(envelope: &LeadEnvelope) -> String {
    format!("New lead: {} ({})", envelope.lead.name, envelope.lead.selected_service)
}

pub fn render_body(envelope: &LeadEnvelope) -> String {
    let lead = &envelope.lead;
    format!(
        "Service: {}\n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Business type: {}\n\
         Received: {}\n\
         Lead ID: {}\n\
         \n\
         {}\n",
        lead.selected_service,
        lead.name,
        lead.email,
        lead.phone,
        lead.business_type,
        envelope.received_at.to_rfc3339(),
        envelope.id,
        lead.message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::lead_delivery::tests::sample_lead;

    fn smtp_settings() -> SmtpSettings {
        SmtpSettings {
            host: "smtp.example.com".to_string(),
            username: "leads@example.com".to_string(),
            password: "secret".to_string(),
            notify_to: "Sales <sales@example.com>".to_string(),
            notify_from: "Website <leads@example.com>".to_string(),
        }
    }

    #[test]
    fn body_lists_every_field() {
        let envelope = LeadEnvelope::new(sample_lead());
        let body = render_body(&envelope);
        assert!(body.contains("Service: Roof Pro - $1,997/mo"));
        assert!(body.contains("Email: hector@alvarezroofing.com"));
        assert!(body.contains("Phone: 210-555-0147"));
        assert!(body.contains("Business type: roofing"));
        assert!(body.contains(&envelope.id.to_string()));
        assert!(body.trim_end().ends_with("Storm season leads dried up fast."));
        assert_eq!(subject(&envelope), "New lead: Hector Alvarez (Roof Pro - $1,997/mo)");
    }

    #[tokio::test]
    async fn composes_message_with_reply_to() {
        let mailer = SmtpMailer::new(&smtp_settings()).expect("valid smtp settings");
        let message = mailer.compose(&LeadEnvelope::new(sample_lead())).expect("message");
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("To: Sales <sales@example.com>"));
        assert!(raw.contains("Reply-To: \"Hector Alvarez\" <hector@alvarezroofing.com>")
            || raw.contains("Reply-To: Hector Alvarez <hector@alvarezroofing.com>"));
    }

    #[test]
    fn bad_sender_address_is_a_setup_error() {
        let mut settings = smtp_settings();
        settings.notify_from = "not an address".to_string();
        assert!(matches!(SmtpMailer::new(&settings), Err(DeliveryError::SmtpSetup(_))));
    }
}
