use property_desk::api::RestPropertyApi;
use property_desk::config::ClientConfig;
use property_desk::console::{self, StdinPrompt, TerminalTable};
use property_desk::sync::PropertyListSynchronizer;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = ClientConfig::from_env()?;
    info!("🏠 Property Desk - {}", config.base_url);

    let api = RestPropertyApi::new(config.base_url.as_str())?;
    let sync = PropertyListSynchronizer::new(Box::new(api), TerminalTable, StdinPrompt);

    console::run(sync).await
}
