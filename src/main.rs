use anyhow::Context;
use hello_greeter::{
    configuration::get_configuration, startup::Application,
    telemetry::setup_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing("hello_greeter", "info", std::io::stdout);
    let configuration =
        get_configuration().context("Could not read configuration.")?;
    let variant = configuration.greeting.variant;
    let address = configuration.application.address();

    let app = Application::build(configuration)
        .await
        .with_context(|| format!("Could not bind to {}.", address))?;
    tracing::info!(port = app.port(), ?variant, "Serving greetings on /hello.");
    app.run_until_stopped().await.context("Server stopped unexpectedly.")
}
