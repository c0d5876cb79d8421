//! Game telemetry sent by the client with each strategy request.
mod game;
mod resources;
mod unit;

pub use game::*;
pub use resources::*;
pub use unit::*;
