//! Strategy and agent-design backend for a two-team territory game.
//!
//! The core is two pure decision functions over plain data:
//!
//! - [`strategy::decide_strategy`] maps a [`state::GameState`] to a [`strategy::TeamStrategy`]
//! - [`agent::decide_agent`] maps an [`agent::AgentRequest`] to an [`agent::AgentSpecification`]
//!
//! The [`oracle`] module wraps both behind pluggable backends with a
//! guaranteed fallback. With the `server` feature, [`service`] and [`relay`]
//! expose them over HTTP and WebSocket.
pub mod agent;
pub mod oracle;
pub mod state;
pub mod strategy;
pub mod team;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod relay;
#[cfg(feature = "server")]
pub mod service;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Territory-control measure per team, conceptually a percentage.
pub type Control = f64;
/// A single agent attribute, bounded in [0, 1].
pub type Attribute = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// A wire token that names none of the variants of a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {vocabulary} token: {token:?}")]
pub struct TokenError {
    pub vocabulary: &'static str,
    pub token: String,
}

impl TokenError {
    pub fn new(vocabulary: &'static str, token: &str) -> Self {
        Self {
            vocabulary,
            token: token.to_string(),
        }
    }
}

// ============================================================================
// DECISION PARAMETERS
// ============================================================================
/// Territory lead (or deficit) beyond which a team stops playing balanced.
/// Comparisons against it are strict.
pub const TERRITORY_MARGIN: Control = 10.0;
/// Upper bound on the sum of all five agent attributes.
pub const ATTRIBUTE_BUDGET: Attribute = 3.0;
/// Float slack when comparing an attribute sum against the budget.
/// Only large enough to absorb summation error over five hundredths.
pub const BUDGET_EPSILON: Attribute = 1e-9;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Route log output to the terminal (INFO) and to `logs/backend-<unix>.log`
/// (DEBUG), so request traces survive a restart of the backend.
#[cfg(feature = "server")]
pub fn log() -> std::io::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/backend-{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).map_err(std::io::Error::other)
}

/// Register Ctrl+C handler for immediate termination.
/// Open websocket sessions are dropped without a close frame.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, shutting down backend");
            std::process::exit(0);
        }
    });
}
