use anyhow::Context;
use kanban_lib::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env().context("Invalid configuration")?;
    kanban_lib::run(config).await
}
