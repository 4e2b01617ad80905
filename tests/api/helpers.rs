use anyhow::anyhow;
use async_trait::async_trait;
use enquiry_notifier::configuration::{get_configuration, Settings};
use enquiry_notifier::domain::EmailAddress;
use enquiry_notifier::email::EmailClient;
use enquiry_notifier::startup::Application;
use enquiry_notifier::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".into();
    let subscriber_name = "test".into();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub recipient: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Records every email instead of delivering it. `fail_next_with` makes the
/// next send fail with the given message.
#[derive(Default)]
pub struct MockEmailClient {
    pub sent_emails: Mutex<Vec<SentEmail>>,
    next_failure: Mutex<Option<String>>,
}

impl MockEmailClient {
    pub fn fail_next_with(&self, message: &str) {
        *self.next_failure.lock().unwrap() = Some(message.to_string());
    }
}

#[async_trait]
impl EmailClient for MockEmailClient {
    async fn send_email(
        &self,
        recipient: &EmailAddress,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<serde_json::Value, anyhow::Error> {
        if let Some(message) = self.next_failure.lock().unwrap().take() {
            return Err(anyhow!(message));
        }
        let mut sent_emails = self.sent_emails.lock().unwrap();
        sent_emails.push(SentEmail {
            recipient: recipient.as_ref().to_string(),
            subject: subject.to_string(),
            html: html_content.to_string(),
            text: text_content.to_string(),
        });
        Ok(serde_json::json!({ "id": format!("mock-{}", sent_emails.len()) }))
    }
}

pub struct TestApp {
    pub address: String,
    pub configuration: Settings,
    pub email_client: Arc<MockEmailClient>,
}

impl TestApp {
    pub async fn post_enquiry(&self, body: &serde_json::Value) -> reqwest::Response {
        self.post_raw_enquiry(body.to_string()).await
    }

    pub async fn post_raw_enquiry(&self, body: String) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/send-enquiry", &self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.email_client.sent_emails.lock().unwrap().clone()
    }
}

pub fn test_configuration() -> Settings {
    let mut c = get_configuration().expect("Failed to read configuration.");
    c.application.port = None;
    c
}

pub async fn spawn_app() -> TestApp {
    let email_client = Arc::new(MockEmailClient::default());
    let configuration = test_configuration();
    let address = spawn_app_with(&configuration, email_client.clone()).await;
    TestApp {
        address,
        configuration,
        email_client,
    }
}

/// Launches the application on a random port and returns its base address.
pub async fn spawn_app_with(
    configuration: &Settings,
    email_client: Arc<dyn EmailClient>,
) -> String {
    Lazy::force(&TRACING);

    let Application { server, port } = Application::build(configuration, email_client)
        .await
        .expect("Failed to build application.");
    let _ = tokio::spawn(server.launch());
    let port = port.get().await.expect("The server never reported its port.");
    format!("http://127.0.0.1:{}", port)
}
