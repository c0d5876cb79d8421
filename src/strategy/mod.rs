//! Team-level strategic posture and the rule that picks it.
//!
//! ## Vocabulary
//!
//! - [`Posture`] — overall stance (aggressive, defensive, balanced, economic)
//! - [`Focus`] — thematic objective attached to a stance
//! - [`Directive`] — ordered action tokens guiding downstream behavior
//!
//! ## Decision
//!
//! - [`TeamStrategy`] — the assembled plan returned to the client
//! - [`decide_strategy`] — fixed territory-margin rule
mod advisor;
mod directive;
mod focus;
mod plan;
mod posture;

pub use advisor::*;
pub use directive::*;
pub use focus::*;
pub use plan::*;
pub use posture::*;
