use crate::agent::AgentRequest;
use crate::agent::AgentSpecification;
use crate::state::GameState;
use crate::strategy::TeamStrategy;

/// Source of team strategies.
///
/// Implementations may be slow or unreliable (a remote generative workflow,
/// say). Errors are never surfaced to clients; see [`crate::oracle::Oracle`].
#[async_trait::async_trait]
pub trait Advisor: Send + Sync {
    async fn advise(&self, game: &GameState) -> anyhow::Result<TeamStrategy>;
}

/// Source of agent specifications.
///
/// Attributes returned here are validated and capped before use.
#[async_trait::async_trait]
pub trait Designer: Send + Sync {
    async fn design(&self, request: &AgentRequest) -> anyhow::Result<AgentSpecification>;
}
