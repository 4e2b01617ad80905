mod resend_email_client;
mod ses_email_client;

use crate::domain::EmailAddress;
use async_trait::async_trait;
pub use resend_email_client::ResendEmailClient;
pub use ses_email_client::SesEmailClient;

/// A transactional email provider. The sender identity is fixed per client.
///
/// On success the provider's response payload is returned as JSON so that it
/// can be handed back to the caller untouched.
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(
        &self,
        recipient: &EmailAddress,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<serde_json::Value, anyhow::Error>;
}
