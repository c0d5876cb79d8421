use super::*;
use crate::agent::AgentRequest;
use crate::agent::AgentSpecification;
use crate::agent::decide_agent;
use crate::state::GameState;
use crate::strategy::TeamStrategy;
use crate::strategy::decide_strategy;
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// Decision façade used by the service layer.
///
/// Both entry points are infallible. The installed backends are consulted
/// unless `fallback_only` is set; any error, panic, or out-of-bounds answer
/// from them is logged and replaced by the fixed-table decision.
#[derive(Clone)]
pub struct Oracle {
    fallback_only: bool,
    advisor: Arc<dyn Advisor>,
    designer: Arc<dyn Designer>,
}

impl Default for Oracle {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Oracle {
    pub fn new(fallback_only: bool) -> Self {
        Self {
            fallback_only,
            advisor: Arc::new(Fallback),
            designer: Arc::new(Fallback),
        }
    }
    pub fn with_advisor(mut self, advisor: impl Advisor + 'static) -> Self {
        self.advisor = Arc::new(advisor);
        self
    }
    pub fn with_designer(mut self, designer: impl Designer + 'static) -> Self {
        self.designer = Arc::new(designer);
        self
    }
    pub fn fallback_only(&self) -> bool {
        self.fallback_only
    }

    pub async fn strategy(&self, game: &GameState) -> TeamStrategy {
        if self.fallback_only {
            log::info!("using fallback strategy for team {}", game.team_id);
            return decide_strategy(game);
        }
        log::debug!("consulting advisor for team {}", game.team_id);
        let attempt = guard(self.advisor.advise(game)).await.and_then(|plan| {
            anyhow::ensure!(!plan.priorities.is_empty(), "advisor returned no priorities");
            Ok(plan)
        });
        match attempt {
            Ok(plan) => plan,
            Err(e) => {
                log::warn!("advisor failed for team {}: {:#}", game.team_id, e);
                decide_strategy(game)
            }
        }
    }

    pub async fn agent(&self, request: &AgentRequest) -> AgentSpecification {
        if self.fallback_only {
            log::info!("using fallback agent for team {}", request.team_id);
            return decide_agent(request);
        }
        log::debug!("consulting designer for team {}", request.team_id);
        let attempt = guard(self.designer.design(request))
            .await
            .and_then(|mut spec| {
                spec.attributes.validate()?;
                spec.attributes = spec.attributes.capped();
                Ok(spec)
            });
        match attempt {
            Ok(spec) => spec,
            Err(e) => {
                log::warn!("designer failed for team {}: {:#}", request.team_id, e);
                decide_agent(request)
            }
        }
    }
}

/// Turns a panicking backend into an ordinary error.
async fn guard<T>(future: impl Future<Output = anyhow::Result<T>>) -> anyhow::Result<T> {
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .unwrap_or_else(|_| Err(anyhow::anyhow!("backend panicked")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::agent::AgentAttributes;
    use crate::agent::Priority;
    use crate::agent::Role;
    use crate::agent::StrategyDescriptor;
    use crate::state::Resources;
    use crate::strategy::Directive;
    use crate::strategy::Focus;
    use crate::strategy::Posture;
    use crate::team::TeamId;

    struct Broken;

    #[async_trait::async_trait]
    impl Advisor for Broken {
        async fn advise(&self, _: &GameState) -> anyhow::Result<TeamStrategy> {
            Err(anyhow::anyhow!("workflow unreachable"))
        }
    }

    #[async_trait::async_trait]
    impl Designer for Broken {
        async fn design(&self, _: &AgentRequest) -> anyhow::Result<AgentSpecification> {
            Err(anyhow::anyhow!("workflow unreachable"))
        }
    }

    struct Panicky;

    #[async_trait::async_trait]
    impl Advisor for Panicky {
        async fn advise(&self, _: &GameState) -> anyhow::Result<TeamStrategy> {
            panic!("model exploded")
        }
    }

    #[async_trait::async_trait]
    impl Designer for Panicky {
        async fn design(&self, _: &AgentRequest) -> anyhow::Result<AgentSpecification> {
            panic!("model exploded")
        }
    }

    /// Always answers with a fixed, possibly invalid, payload.
    struct Canned(AgentAttributes);

    #[async_trait::async_trait]
    impl Designer for Canned {
        async fn design(&self, _: &AgentRequest) -> anyhow::Result<AgentSpecification> {
            Ok(AgentSpecification::new(
                Role::Defender,
                self.0,
                Priority::Materials,
                "Generated.",
            ))
        }
    }

    struct Economist;

    #[async_trait::async_trait]
    impl Advisor for Economist {
        async fn advise(&self, _: &GameState) -> anyhow::Result<TeamStrategy> {
            Ok(TeamStrategy::new(
                Posture::Economic,
                Focus::Resources,
                vec![Directive::CollectData],
                "Generated.",
            ))
        }
    }

    struct Empty;

    #[async_trait::async_trait]
    impl Advisor for Empty {
        async fn advise(&self, _: &GameState) -> anyhow::Result<TeamStrategy> {
            Ok(TeamStrategy {
                strategy: Posture::Balanced,
                focus: Focus::Combat,
                priorities: vec![],
                description: String::new(),
            })
        }
    }

    fn request() -> AgentRequest {
        AgentRequest::new(
            TeamId::red(),
            StrategyDescriptor::new("unknown_value", "combat"),
            Resources::random(),
        )
    }

    #[tokio::test]
    async fn default_backends_match_fixed_tables() {
        let oracle = Oracle::new(false);
        for _ in 0..32 {
            let game = GameState::random();
            assert_eq!(oracle.strategy(&game).await, decide_strategy(&game));
        }
        assert_eq!(oracle.agent(&request()).await, decide_agent(&request()));
    }

    #[tokio::test]
    async fn failing_backends_fall_back() {
        let oracle = Oracle::new(false).with_advisor(Broken).with_designer(Broken);
        let game = GameState::random();
        assert_eq!(oracle.strategy(&game).await, decide_strategy(&game));
        assert_eq!(oracle.agent(&request()).await.role, Role::Explorer);
    }

    #[tokio::test]
    async fn panicking_backends_fall_back() {
        let oracle = Oracle::new(false).with_advisor(Panicky).with_designer(Panicky);
        let game = GameState::random();
        assert_eq!(oracle.strategy(&game).await, decide_strategy(&game));
        assert_eq!(oracle.agent(&request()).await.role, Role::Explorer);
    }

    #[tokio::test]
    async fn fallback_only_skips_backends() {
        let oracle = Oracle::new(true).with_advisor(Economist);
        let game = GameState::random();
        assert!(oracle.fallback_only());
        assert!(oracle.strategy(&game).await.strategy != Posture::Economic);
    }

    #[tokio::test]
    async fn healthy_advisor_is_trusted() {
        let oracle = Oracle::new(false).with_advisor(Economist);
        let plan = oracle.strategy(&GameState::random()).await;
        assert_eq!(plan.strategy, Posture::Economic);
    }

    #[tokio::test]
    async fn empty_priorities_fall_back() {
        let oracle = Oracle::new(false).with_advisor(Empty);
        let plan = oracle.strategy(&GameState::random()).await;
        assert!(!plan.priorities.is_empty());
    }

    #[tokio::test]
    async fn over_budget_attributes_are_capped() {
        let oracle =
            Oracle::new(false).with_designer(Canned(AgentAttributes::new(1.0, 1.0, 1.0, 1.0, 1.0)));
        let spec = oracle.agent(&request()).await;
        assert_eq!(spec.role, Role::Defender);
        assert_eq!(spec.attributes, AgentAttributes::new(0.6, 0.6, 0.6, 0.6, 0.6));
    }

    #[tokio::test]
    async fn out_of_range_attributes_fall_back() {
        let oracle =
            Oracle::new(false).with_designer(Canned(AgentAttributes::new(1.5, 0.1, 0.1, 0.1, 0.1)));
        let spec = oracle.agent(&request()).await;
        assert_eq!(spec.role, Role::Explorer);
    }

    #[tokio::test]
    async fn random_designs_stay_in_bounds() {
        for _ in 0..256 {
            let oracle = Oracle::new(false).with_designer(Canned(AgentAttributes::random()));
            let spec = oracle.agent(&request()).await;
            assert!(spec.attributes.validate().is_ok());
            assert!(spec.attributes.within_budget());
        }
    }
}
