use anyhow::Context;
use enquiry_notifier::configuration::get_configuration;
use enquiry_notifier::startup::{build_email_client, Application};
use enquiry_notifier::telemetry::{get_subscriber, init_subscriber};

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("enquiry-notifier".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    let email_client = build_email_client(&configuration.email_client).await?;
    let application = Application::build(&configuration, email_client).await?;
    application
        .server
        .launch()
        .await
        .context("Server stopped with an error")?;
    Ok(())
}
