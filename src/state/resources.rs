use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

/// Stockpile of the three collectible resource kinds held by a team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    pub energy: i64,
    pub materials: i64,
    pub data: i64,
}

impl Resources {
    pub fn new(energy: i64, materials: i64, data: i64) -> Self {
        Self {
            energy,
            materials,
            data,
        }
    }
    /// Combined stockpile, clamped at the `i64` bounds.
    pub fn total(&self) -> i64 {
        self.energy
            .saturating_add(self.materials)
            .saturating_add(self.data)
    }
}

impl Arbitrary for Resources {
    fn random() -> Self {
        Self::new(
            rand::random_range(0..500),
            rand::random_range(0..500),
            rand::random_range(0..500),
        )
    }
}
