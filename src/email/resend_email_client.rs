use crate::domain::{EmailAddress, Mailbox};
use crate::email::EmailClient;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

/// Sends email through the Resend HTTP API (`POST {base_url}/emails`).
pub struct ResendEmailClient {
    http_client: Client,
    base_url: String,
    sender: Mailbox,
    api_key: Secret<String>,
}

impl ResendEmailClient {
    pub fn new(
        base_url: String,
        sender: Mailbox,
        api_key: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the HTTP client for Resend.")?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            sender,
            api_key,
        })
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[async_trait]
impl EmailClient for ResendEmailClient {
    #[tracing::instrument(
        name = "Send email through Resend",
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
        let url = format!("{}/emails", self.base_url);
        let request_body = SendEmailRequest {
            from: self.sender.to_string(),
            to: [recipient.as_ref()],
            subject,
            html: html_content,
            text: text_content,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await
            .context("Failed to reach the Resend API.")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read the Resend API response.")?;

        if !status.is_success() {
            return Err(anyhow!(rejection_message(status, &body)));
        }

        serde_json::from_str(&body).context("The Resend API returned a malformed response.")
    }
}

/// Resend reports failures as `{"statusCode": .., "message": .., "name": ..}`.
fn rejection_message(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_else(|| body.trim().to_string());
    if detail.is_empty() {
        format!("Resend rejected the email ({}).", status)
    } else {
        format!("Resend rejected the email ({}): {}", status, detail)
    }
}
