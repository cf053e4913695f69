use hello_world_plugin::{serve, Config, HelloWorldHandler};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let config = Config::from_env();
    match &config.fixed_fragment {
        Some(fragment) => tracing::info!("Using fixed prompt fragment: {}", fragment),
        None => tracing::info!("Picking prompt fragments at random"),
    }

    serve(HelloWorldHandler::new(config), None).await?;

    Ok(())
}
