//! WebSocket relay: a registry of connected clients and the per-client
//! loop that acknowledges the game state they stream in.
//!
//! The relay never consults the decision functions.
mod lobby;

pub use lobby::*;
