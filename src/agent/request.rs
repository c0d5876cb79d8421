use crate::state::Resources;
use crate::state::Unit;
use crate::strategy::TeamStrategy;
use crate::team::TeamId;
use serde::Deserialize;
use serde::Serialize;

/// Label assumed when a request carries no strategy label.
pub const DEFAULT_STRATEGY: &str = "balanced";
/// Focus assumed when a request carries no focus.
pub const DEFAULT_FOCUS: &str = "resources";

/// The strategy a team is currently following, as echoed back by the client.
///
/// Kept as raw labels rather than [`TeamStrategy`] so that unknown or missing
/// values default instead of failing the request. Any further fields
/// (priorities, description) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyDescriptor {
    pub strategy: Option<String>,
    pub focus: Option<String>,
}

impl StrategyDescriptor {
    pub fn new(strategy: &str, focus: &str) -> Self {
        Self {
            strategy: Some(strategy.to_string()),
            focus: Some(focus.to_string()),
        }
    }
    pub fn strategy(&self) -> &str {
        self.strategy.as_deref().unwrap_or(DEFAULT_STRATEGY)
    }
    pub fn focus(&self) -> &str {
        self.focus.as_deref().unwrap_or(DEFAULT_FOCUS)
    }
}

impl From<&TeamStrategy> for StrategyDescriptor {
    fn from(plan: &TeamStrategy) -> Self {
        Self::new(plan.strategy.label(), plan.focus.label())
    }
}

/// A team asking for the design of its next agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub team_id: TeamId,
    pub strategy: StrategyDescriptor,
    /// Accepted for backends that weigh the stockpile; the fixed table does not.
    pub resources: Resources,
    #[serde(default)]
    pub current_agents: Vec<Unit>,
}

impl AgentRequest {
    pub fn new(team_id: TeamId, strategy: StrategyDescriptor, resources: Resources) -> Self {
        Self {
            team_id,
            strategy,
            resources,
            current_agents: Vec::new(),
        }
    }
}
