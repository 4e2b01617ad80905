use crate::domain::{EmailAddress, Enquiry};
use crate::email::EmailClient;
use crate::notification::TemplateRenderer;
use anyhow::Context;
use std::sync::Arc;

/// Renders an enquiry and sends it to the business inbox.
///
/// Holds no per-request state; one instance serves every request.
pub struct EnquiryNotifier {
    renderer: TemplateRenderer,
    email_client: Arc<dyn EmailClient>,
    recipient: EmailAddress,
}

impl EnquiryNotifier {
    pub fn new(
        renderer: TemplateRenderer,
        email_client: Arc<dyn EmailClient>,
        recipient: EmailAddress,
    ) -> Self {
        Self {
            renderer,
            email_client,
            recipient,
        }
    }

    /// Exactly one send per call; nothing is retried.
    #[tracing::instrument(name = "Notify the business of an enquiry", skip(self, enquiry))]
    pub async fn notify(&self, enquiry: &Enquiry) -> Result<serde_json::Value, anyhow::Error> {
        let email = self.renderer.render(enquiry)?;
        let provider_response = self
            .email_client
            .send_email(&self.recipient, &email.subject, &email.html, &email.text)
            .await
            .context("Failed to send the enquiry notification email")?;
        tracing::info!(provider_response = %provider_response, "Enquiry notification sent");
        Ok(provider_response)
    }
}
