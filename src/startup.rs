use crate::catchers::*;
use crate::configuration::{EmailClientSettings, EmailProvider, Settings};
use crate::cors::Cors;
use crate::email::{EmailClient, ResendEmailClient, SesEmailClient};
use crate::notification::{EnquiryNotifier, TemplateRenderer};
use crate::port_saver;
use crate::port_saver::Port;
use crate::routes::*;
use anyhow::anyhow;
use aws_config::TimeoutConfig;
use aws_sdk_sesv2 as ses;
use rocket::{Config, Ignite, Rocket};
use secrecy::{ExposeSecret, Secret};
use std::sync::Arc;

pub struct Application {
    pub server: Rocket<Ignite>,
    pub port: Port,
}

impl Application {
    /// Wires the routes around an already-built email client. Port `None`
    /// binds an ephemeral port; `port.get()` reports it after liftoff.
    pub async fn build(
        configuration: &Settings,
        email_client: Arc<dyn EmailClient>,
    ) -> Result<Application, anyhow::Error> {
        let recipient = configuration
            .email_client
            .recipient()
            .map_err(|e| anyhow!("Invalid recipient email address: {}", e))?;
        let renderer = TemplateRenderer::new(configuration.business.name.clone())?;
        let notifier = EnquiryNotifier::new(renderer, email_client, recipient);

        let (port_saver, port) = port_saver::create_pair();
        let server = rocket::custom(Config {
            address: configuration.application.host,
            port: configuration.application.port.unwrap_or(0),
            ..Config::default()
        })
        .manage(notifier)
        .attach(Cors)
        .attach(port_saver)
        .mount("/", routes![health_check, preflight, send_enquiry])
        .register("/", catchers![json_error])
        .ignite()
        .await
        .map_err(|e| anyhow!("Failed to ignite the server: {}", e))?;

        Ok(Application { server, port })
    }
}

/// Builds the client for the configured provider. Called once at start-up.
pub async fn build_email_client(
    settings: &EmailClientSettings,
) -> Result<Arc<dyn EmailClient>, anyhow::Error> {
    let sender = settings
        .sender()
        .map_err(|e| anyhow!("Invalid sender email address: {}", e))?;

    let client: Arc<dyn EmailClient> = match settings.provider {
        EmailProvider::Resend => Arc::new(ResendEmailClient::new(
            settings.base_url.clone(),
            sender,
            Secret::new(settings.api_key.expose_secret().clone()),
            settings.timeout(),
        )?),
        EmailProvider::Ses => {
            let timeout_config =
                TimeoutConfig::new().with_api_call_timeout(Some(settings.timeout()));
            let shared_config = aws_config::from_env()
                .timeout_config(timeout_config)
                .load()
                .await;
            Arc::new(SesEmailClient::new(ses::Client::new(&shared_config), sender))
        }
    };
    Ok(client)
}
