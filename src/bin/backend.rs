//! Backend Server Binary
//!
//! Serves team-strategy and agent-specification decisions over HTTP,
//! plus the game-state websocket relay. Configured by flags or env
//! (BIND_ADDR, USE_MOCK_RESPONSES, ALLOWED_ORIGINS, WORKERS).

use clap::Parser;
use territory::config::Config;
use territory::service::Server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = Config::parse();
    territory::log()?;
    territory::kys();
    Server::run(config).await
}
