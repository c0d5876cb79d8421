use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Strategic plan handed back to a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStrategy {
    pub strategy: Posture,
    pub focus: Focus,
    pub priorities: Vec<Directive>,
    pub description: String,
}

impl TeamStrategy {
    /// Panics on an empty priority list.
    pub fn new(
        strategy: Posture,
        focus: Focus,
        priorities: Vec<Directive>,
        description: impl Into<String>,
    ) -> Self {
        assert!(!priorities.is_empty(), "strategy without priorities");
        Self {
            strategy,
            focus,
            priorities,
            description: description.into(),
        }
    }
    /// Most important directive.
    pub fn lead(&self) -> Option<Directive> {
        self.priorities.first().copied()
    }
}

impl std::fmt::Display for TeamStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.strategy, self.focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic]
    fn empty_priorities_panic() {
        TeamStrategy::new(Posture::Balanced, Focus::Resources, vec![], "nothing to do");
    }

    #[test]
    fn wire_shape() {
        let plan = TeamStrategy::new(
            Posture::Economic,
            Focus::Resources,
            vec![Directive::CollectData, Directive::CollectEnergy],
            "Hoard.",
        );
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "strategy": "economic",
                "focus": "resources",
                "priorities": ["collect_data", "collect_energy"],
                "description": "Hoard.",
            })
        );
        assert_eq!(plan.lead(), Some(Directive::CollectData));
        assert_eq!(plan.to_string(), "economic (resources)");
    }
}
