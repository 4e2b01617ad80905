use crate::domain::{EmailAddress, Mailbox};
use crate::email::EmailClient;
use anyhow::Context;
use async_trait::async_trait;
use aws_sdk_sesv2 as ses;
use aws_sdk_sesv2::model::{Body, Content, Destination, EmailContent, Message};

/// Sends email through AWS SES v2. Credentials and region come from the
/// usual AWS environment.
pub struct SesEmailClient {
    ses_client: ses::Client,
    sender: Mailbox,
}

impl SesEmailClient {
    pub fn new(ses_client: ses::Client, sender: Mailbox) -> Self {
        Self { ses_client, sender }
    }
}

fn utf8_content(data: &str) -> Content {
    Content::builder().data(data).charset("UTF-8").build()
}

#[async_trait]
impl EmailClient for SesEmailClient {
    #[tracing::instrument(
        name = "Send email through SES",
        skip(self, recipient, html_content, text_content),
        fields(recipient = %recipient)
    )]
    async fn send_email(
        &self,
        recipient: &EmailAddress,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<serde_json::Value, anyhow::Error> {
        let body = Body::builder()
            .html(utf8_content(html_content))
            .text(utf8_content(text_content))
            .build();
        let message = Message::builder()
            .subject(utf8_content(subject))
            .body(body)
            .build();
        let content = EmailContent::builder().simple(message).build();
        let destination = Destination::builder()
            .to_addresses(recipient.as_ref())
            .build();

        let output = self
            .ses_client
            .send_email()
            .from_email_address(self.sender.to_string())
            .destination(destination)
            .content(content)
            .send()
            .await
            .context("SES rejected the email.")?;

        Ok(serde_json::json!({ "id": output.message_id }))
    }
}
