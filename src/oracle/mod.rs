//! Pluggable decision backends behind an always-answering façade.
//!
//! - [`Advisor`] / [`Designer`] — async seams for strategy and agent backends
//! - [`Fallback`] — the fixed-table backend, the only one shipped
//! - [`Oracle`] — runs the installed backend and substitutes the fixed
//!   table whenever it errs, panics, or returns something out of bounds
mod backend;
mod facade;
mod fallback;

pub use backend::*;
pub use facade::*;
pub use fallback::*;
