use super::*;
use crate::agent::AgentRequest;
use crate::agent::AgentSpecification;
use crate::agent::decide_agent;
use crate::state::GameState;
use crate::strategy::TeamStrategy;
use crate::strategy::decide_strategy;

/// Fixed-table backend. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fallback;

#[async_trait::async_trait]
impl Advisor for Fallback {
    async fn advise(&self, game: &GameState) -> anyhow::Result<TeamStrategy> {
        Ok(decide_strategy(game))
    }
}

#[async_trait::async_trait]
impl Designer for Fallback {
    async fn design(&self, request: &AgentRequest) -> anyhow::Result<AgentSpecification> {
        Ok(decide_agent(request))
    }
}
