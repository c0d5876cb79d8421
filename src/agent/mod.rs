//! Specification of new agents from a team's current strategy.
//!
//! - [`Role`] / [`Priority`] — closed vocabularies of the output
//! - [`AgentAttributes`] — bounded five-dimensional attribute vector
//! - [`AgentRequest`] — what a team asks for
//! - [`AgentSpecification`] — what it gets back
//! - [`decide_agent`] — fixed strategy → archetype table
mod attributes;
mod designer;
mod priority;
mod request;
mod role;
mod specification;

pub use attributes::*;
pub use designer::*;
pub use priority::*;
pub use request::*;
pub use role::*;
pub use specification::*;
