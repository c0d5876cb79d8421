use crate::TokenError;
use serde::Deserialize;
use serde::Serialize;

/// Priority-action token. A strategy carries an ordered list of these,
/// most important first.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directive {
    ExpandTerritory,
    DefendTerritory,
    AttackEnemies,
    CollectEnergy,
    CollectMaterials,
    CollectData,
}

impl Directive {
    pub const fn all() -> [Self; 6] {
        [
            Self::ExpandTerritory,
            Self::DefendTerritory,
            Self::AttackEnemies,
            Self::CollectEnergy,
            Self::CollectMaterials,
            Self::CollectData,
        ]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ExpandTerritory => "expand_territory",
            Self::DefendTerritory => "defend_territory",
            Self::AttackEnemies => "attack_enemies",
            Self::CollectEnergy => "collect_energy",
            Self::CollectMaterials => "collect_materials",
            Self::CollectData => "collect_data",
        }
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<&str> for Directive {
    type Error = TokenError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| TokenError::new("priority", s))
    }
}
