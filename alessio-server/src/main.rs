use alessio_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // 1. Environment (.env, config, logging)
    let config = setup_environment()?;

    print_banner();
    tracing::info!("Alessio API starting...");

    // 2. Connect to the database, or run degraded without one
    let state = ServerState::initialize(&config).await;

    // 3. Serve until shutdown
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
