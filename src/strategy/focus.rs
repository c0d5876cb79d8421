use crate::TokenError;
use serde::Deserialize;
use serde::Serialize;

/// Thematic objective category attached to a strategy.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    Territory,
    Resources,
    Combat,
}

impl Focus {
    pub const fn all() -> [Self; 3] {
        [Self::Territory, Self::Resources, Self::Combat]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Territory => "territory",
            Self::Resources => "resources",
            Self::Combat => "combat",
        }
    }
}

impl std::fmt::Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<&str> for Focus {
    type Error = TokenError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|x| x.label() == s)
            .ok_or_else(|| TokenError::new("focus", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for focus in Focus::all() {
            assert_eq!(Focus::try_from(focus.label()), Ok(focus));
        }
        assert!(Focus::try_from("economy").is_err());
    }
}
