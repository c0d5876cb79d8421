use crate::TokenError;
use serde::Deserialize;
use serde::Serialize;

/// Overall strategic stance of a team.
///
/// `Economic` is a valid output and input value but the fixed territory
/// rule never emits it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Posture {
    Aggressive,
    Defensive,
    Balanced,
    Economic,
}

impl Posture {
    pub const fn all() -> [Self; 4] {
        [
            Self::Aggressive,
            Self::Defensive,
            Self::Balanced,
            Self::Economic,
        ]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Aggressive => "aggressive",
            Self::Defensive => "defensive",
            Self::Balanced => "balanced",
            Self::Economic => "economic",
        }
    }
}

impl std::fmt::Display for Posture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<&str> for Posture {
    type Error = TokenError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| TokenError::new("strategy", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for posture in Posture::all() {
            assert_eq!(Posture::try_from(posture.label()), Ok(posture));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(Posture::try_from("unknown_value").is_err());
        assert!(Posture::try_from("Aggressive").is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Posture::Economic).unwrap(),
            "\"economic\""
        );
    }
}
