use crate::TokenError;
use serde::Deserialize;
use serde::Serialize;

/// What a new agent should favor collecting or holding.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Energy,
    Materials,
    Data,
    Territory,
}

impl Priority {
    pub const fn all() -> [Self; 4] {
        [Self::Energy, Self::Materials, Self::Data, Self::Territory]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Energy => "energy",
            Self::Materials => "materials",
            Self::Data => "data",
            Self::Territory => "territory",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<&str> for Priority {
    type Error = TokenError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| TokenError::new("priority", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Role;

    #[test]
    fn vocabularies_round_trip() {
        for priority in Priority::all() {
            assert_eq!(Priority::try_from(priority.label()), Ok(priority));
        }
        for role in Role::all() {
            assert_eq!(Role::try_from(role.label()), Ok(role));
        }
        assert!(Priority::try_from("gold").is_err());
        assert!(Role::try_from("healer").is_err());
    }
}
