use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::info;

use profix_core::{ApiServer, AppConfig};

/// Run the booking endpoint until Ctrl+C
pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    println!("Starting booking endpoint on {}...", config.server.bind_addr);

    // Create shutdown channel
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received shutdown signal");
        let _ = shutdown_tx.send(true);
    });

    ApiServer::new(config).run(shutdown_rx).await?;

    println!("Booking endpoint stopped.");
    Ok(())
}
