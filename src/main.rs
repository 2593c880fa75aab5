use anyhow::Context;

use fishbowl_subscriber::telemetry::{get_subscriber, init_subscriber};
use fishbowl_subscriber::{configuration::get_config, startup::Application};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("fishbowl_subscriber".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;
    let config = get_config().context("Failed to read configuration")?;
    let app = Application::build(config).await?;
    tracing::info!("Listening on {}:{}", app.addr(), app.port());
    app.run_forever().await?;
    Ok(())
}
