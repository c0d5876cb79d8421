use crate::TokenError;
use serde::Deserialize;
use serde::Serialize;

/// Archetype of a newly produced agent.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Collector,
    Explorer,
    Defender,
    Attacker,
}

impl Role {
    pub const fn all() -> [Self; 4] {
        [Self::Collector, Self::Explorer, Self::Defender, Self::Attacker]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Collector => "collector",
            Self::Explorer => "explorer",
            Self::Defender => "defender",
            Self::Attacker => "attacker",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<&str> for Role {
    type Error = TokenError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| TokenError::new("role", s))
    }
}
