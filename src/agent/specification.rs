use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Blueprint for the next agent a team should produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpecification {
    pub role: Role,
    pub attributes: AgentAttributes,
    pub priority: Priority,
    pub description: String,
}

impl AgentSpecification {
    pub fn new(
        role: Role,
        attributes: AgentAttributes,
        priority: Priority,
        description: impl Into<String>,
    ) -> Self {
        Self {
            role,
            attributes,
            priority,
            description: description.into(),
        }
    }
}

impl std::fmt::Display for AgentSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} -> {} [{}]", self.role, self.priority, self.attributes)
    }
}
