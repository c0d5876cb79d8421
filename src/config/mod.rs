//! Startup configuration, read once from flags and environment.
use crate::oracle::Oracle;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Territory game strategy backend", long_about = None)]
pub struct Config {
    /// Answer every request from the fixed decision tables.
    #[arg(
        long,
        env = "USE_MOCK_RESPONSES",
        default_value_t = true,
        action = clap::ArgAction::Set,
        value_parser = truthy,
    )]
    pub fallback_only: bool,
    /// Address the HTTP server listens on.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
    pub bind: String,
    /// Origins allowed by CORS. `*` allows any.
    #[arg(
        long = "origin",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values_t = [
            String::from("http://localhost:3000"),
            String::from("http://frontend:3000"),
        ],
    )]
    pub origins: Vec<String>,
    /// HTTP worker threads.
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_only: true,
            bind: String::from("0.0.0.0:8000"),
            origins: vec![
                String::from("http://localhost:3000"),
                String::from("http://frontend:3000"),
            ],
            workers: 4,
        }
    }
}

/// Only `true` (any case) switches the flag on; every other value is off.
fn truthy(raw: &str) -> Result<bool, std::convert::Infallible> {
    Ok(raw.eq_ignore_ascii_case("true"))
}

impl Config {
    /// Decision façade matching this configuration.
    pub fn oracle(&self) -> Oracle {
        Oracle::new(self.fallback_only)
    }
}
