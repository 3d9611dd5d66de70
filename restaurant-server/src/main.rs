use anyhow::Context;
use restaurant_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment: .env, configuration, logging
    let config = setup_environment().context("Failed to load configuration")?;

    print_banner();
    tracing::info!("Restaurant server starting...");

    // 2. Open the store once; every request shares it
    let state = ServerState::initialize(&config)
        .await
        .context("Failed to connect to the store")?;

    // 3. Serve until Ctrl-C / SIGTERM
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
