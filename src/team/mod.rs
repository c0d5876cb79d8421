use crate::Arbitrary;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Canonical identifier of the first team.
pub const RED: &str = "red";
/// Canonical identifier of the second team.
pub const BLUE: &str = "blue";

/// Team identifier, normalized onto the canonical `red` / `blue` pair.
///
/// Clients address teams by several aliases (`team1`, `"1"`, ...). Every
/// construction path runs the alias table, so two `TeamId`s compare equal
/// iff they name the same team. Unrecognized names pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    pub fn red() -> Self {
        Self(RED.to_string())
    }
    pub fn blue() -> Self {
        Self(BLUE.to_string())
    }
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
    /// Whether this id landed on one of the two canonical teams.
    pub fn is_canonical(&self) -> bool {
        self.0 == RED || self.0 == BLUE
    }
    /// The other side of the red/blue pair. Anything that is not red
    /// (including unrecognized ids) is opposed by red.
    pub fn opponent(&self) -> Self {
        match self.0.as_str() {
            RED => Self::blue(),
            _ => Self::red(),
        }
    }
    /// Alias table applied before any team comparison.
    fn normalize(s: &str) -> &str {
        match s {
            "team1" | "1" => RED,
            "team2" | "2" => BLUE,
            other => other,
        }
    }
}

impl Default for TeamId {
    fn default() -> Self {
        Self::red()
    }
}

impl From<&str> for TeamId {
    fn from(s: &str) -> Self {
        Self(Self::normalize(s).to_string())
    }
}

impl From<String> for TeamId {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<TeamId> for String {
    fn from(id: TeamId) -> Self {
        id.0
    }
}

impl AsRef<str> for TeamId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<'de> Deserialize<'de> for TeamId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Arbitrary for TeamId {
    fn random() -> Self {
        match rand::random_range(0..6) {
            0 => Self::from(RED),
            1 => Self::from(BLUE),
            2 => Self::from("team1"),
            3 => Self::from("team2"),
            4 => Self::from("1"),
            _ => Self::from("2"),
        }
    }
}
