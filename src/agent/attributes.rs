use crate::ATTRIBUTE_BUDGET;
use crate::Arbitrary;
use crate::Attribute;
use crate::BUDGET_EPSILON;
use serde::Deserialize;
use serde::Serialize;

/// An attribute value outside its admissible range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("attribute {name} = {value} outside [0, 1]")]
pub struct AttributeError {
    pub name: &'static str,
    pub value: Attribute,
}

/// Five-dimensional capability vector of an agent.
///
/// Each field lives in `[0, 1]` and the five together may not exceed
/// [`ATTRIBUTE_BUDGET`]. The fixed archetypes satisfy this by construction.
/// Vectors from any other source go through [`AgentAttributes::validate`]
/// and [`AgentAttributes::capped`] before they are handed out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentAttributes {
    pub speed: Attribute,
    pub health: Attribute,
    pub attack: Attribute,
    pub defense: Attribute,
    #[serde(rename = "carryCapacity")]
    pub carry_capacity: Attribute,
}

impl AgentAttributes {
    pub const NAMES: [&'static str; 5] = ["speed", "health", "attack", "defense", "carryCapacity"];

    pub const fn new(
        speed: Attribute,
        health: Attribute,
        attack: Attribute,
        defense: Attribute,
        carry_capacity: Attribute,
    ) -> Self {
        Self {
            speed,
            health,
            attack,
            defense,
            carry_capacity,
        }
    }
    pub fn values(&self) -> [Attribute; 5] {
        [
            self.speed,
            self.health,
            self.attack,
            self.defense,
            self.carry_capacity,
        ]
    }
    pub fn sum(&self) -> Attribute {
        self.values().iter().sum()
    }
    pub fn within_budget(&self) -> bool {
        self.sum() <= ATTRIBUTE_BUDGET + BUDGET_EPSILON
    }
    /// Rejects NaN and anything outside `[0, 1]`, naming the first offender.
    pub fn validate(&self) -> Result<(), AttributeError> {
        Self::NAMES
            .into_iter()
            .zip(self.values())
            .find(|(_, value)| !(0.0..=1.0).contains(value))
            .map_or(Ok(()), |(name, value)| Err(AttributeError { name, value }))
    }
    /// Scale an over-budget vector down to the budget.
    ///
    /// Every field is multiplied by `budget / sum` and rounded to hundredths.
    /// Rounding can overshoot by a few hundredths, which are taken back one
    /// at a time from the largest field. Vectors already within budget are
    /// returned untouched.
    pub fn capped(self) -> Self {
        if self.within_budget() {
            return self;
        }
        let scale = ATTRIBUTE_BUDGET / self.sum();
        let budget = (ATTRIBUTE_BUDGET * 100.0).round() as i32;
        let mut cents = self.values().map(|v| (v * scale * 100.0).round() as i32);
        while cents.iter().sum::<i32>() > budget {
            let Some(i) = (0..cents.len()).max_by_key(|&i| cents[i]) else {
                break;
            };
            cents[i] -= 1;
        }
        Self::from(cents.map(|c| c as Attribute / 100.0))
    }
}

impl From<[Attribute; 5]> for AgentAttributes {
    fn from([speed, health, attack, defense, carry_capacity]: [Attribute; 5]) -> Self {
        Self::new(speed, health, attack, defense, carry_capacity)
    }
}

impl Arbitrary for AgentAttributes {
    fn random() -> Self {
        Self::from(std::array::from_fn::<Attribute, 5, _>(|_| {
            rand::random_range(0.0..=1.0)
        }))
    }
}

impl std::fmt::Display for AgentAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "spd {:.2} hp {:.2} atk {:.2} def {:.2} cap {:.2}",
            self.speed, self.health, self.attack, self.defense, self.carry_capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_budget_is_untouched() {
        let attrs = AgentAttributes::new(0.8, 0.6, 0.5, 0.5, 0.6);
        assert!(attrs.within_budget());
        assert_eq!(attrs.capped(), attrs);
    }

    #[test]
    fn maxed_out_scales_evenly() {
        let attrs = AgentAttributes::new(1.0, 1.0, 1.0, 1.0, 1.0).capped();
        assert_eq!(attrs, AgentAttributes::new(0.6, 0.6, 0.6, 0.6, 0.6));
    }

    #[test]
    fn rounding_overshoot_is_trimmed() {
        // 0.375 rounds up twice, which would land on 3.01 without trimming
        let attrs = AgentAttributes::new(1.0, 1.0, 1.0, 0.5, 0.5).capped();
        assert!(attrs.within_budget());
        assert!((attrs.sum() - ATTRIBUTE_BUDGET).abs() < BUDGET_EPSILON);
    }

    #[test]
    fn slight_overshoot_is_still_capped() {
        let attrs = AgentAttributes::new(1.0, 1.0, 1.0, 0.00009, 0.0);
        assert!(!attrs.within_budget());
        let capped = attrs.capped();
        assert!(capped.sum() <= ATTRIBUTE_BUDGET + BUDGET_EPSILON);
        assert_eq!(capped, AgentAttributes::new(1.0, 1.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn capped_preserves_order() {
        let attrs = AgentAttributes::new(0.9, 0.9, 0.9, 0.9, 0.1).capped();
        assert!(attrs.speed >= attrs.carry_capacity);
        assert!(attrs.within_budget());
    }

    #[test]
    fn capped_is_hundredths() {
        let attrs = AgentAttributes::new(0.97, 0.83, 0.71, 0.66, 0.52).capped();
        for value in attrs.values() {
            assert!(((value * 100.0).round() - value * 100.0).abs() < 1e-3);
        }
    }

    #[test]
    fn random_vectors_land_within_bounds() {
        for _ in 0..1024 {
            let attrs = AgentAttributes::random();
            assert!(attrs.validate().is_ok());
            let capped = attrs.capped();
            assert!(capped.validate().is_ok());
            assert!(capped.sum() <= ATTRIBUTE_BUDGET + BUDGET_EPSILON);
        }
    }

    #[test]
    fn validate_names_offender() {
        let err = AgentAttributes::new(0.5, 1.2, 0.5, 0.5, 0.5)
            .validate()
            .unwrap_err();
        assert_eq!(err.name, "health");
        let err = AgentAttributes::new(0.5, 0.5, 0.5, 0.5, -0.1)
            .validate()
            .unwrap_err();
        assert_eq!(err.name, "carryCapacity");
        assert!(
            AgentAttributes::new(Attribute::NAN, 0.5, 0.5, 0.5, 0.5)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn carry_capacity_is_camel_case() {
        let json = serde_json::to_value(AgentAttributes::new(0.1, 0.2, 0.3, 0.4, 0.5)).unwrap();
        assert!(json.get("carryCapacity").is_some());
        assert!(json.get("carry_capacity").is_none());
    }
}
