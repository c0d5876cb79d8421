use super::*;
use crate::Arbitrary;
use crate::Control;
use crate::team::TeamId;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Snapshot of the match from the requesting team's point of view.
///
/// Only `team_id` and `territory_control` feed the strategy decision. The
/// remaining maps are accepted (and may be empty) so richer advisors can
/// see the full picture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub team_id: TeamId,
    pub territory_control: BTreeMap<String, Control>,
    #[serde(default)]
    pub resources: BTreeMap<String, Resources>,
    #[serde(default)]
    pub agents: BTreeMap<String, Vec<Unit>>,
    #[serde(default)]
    pub resource_distribution: BTreeMap<String, i64>,
}

impl GameState {
    /// Territory held by `team`, zero when the snapshot has no entry under
    /// its canonical id. Aliased keys such as `team1` are not consulted.
    pub fn territory(&self, team: &TeamId) -> Control {
        self.territory_control
            .get(team.as_str())
            .copied()
            .unwrap_or(0.0)
    }
    /// (own territory, opponent territory) for the requesting team.
    pub fn standing(&self) -> (Control, Control) {
        (
            self.territory(&self.team_id),
            self.territory(&self.team_id.opponent()),
        )
    }
}

impl Arbitrary for GameState {
    fn random() -> Self {
        let team_id = TeamId::random();
        let territory_control = [TeamId::red(), TeamId::blue()]
            .into_iter()
            .map(|team| (String::from(team), rand::random_range(0..=100) as Control))
            .collect();
        let resources = [TeamId::red(), TeamId::blue()]
            .into_iter()
            .map(|team| (String::from(team), Resources::random()))
            .collect();
        Self {
            team_id,
            territory_control,
            resources,
            ..Self::default()
        }
    }
}
