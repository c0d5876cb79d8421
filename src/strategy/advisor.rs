use super::*;
use crate::TERRITORY_MARGIN;
use crate::state::GameState;

/// Fixed territory-margin rule. Total over any snapshot.
///
/// Falling more than [`TERRITORY_MARGIN`] behind turns aggressive, leading
/// by more than the margin turns defensive, and anything within the margin
/// (inclusive) stays balanced.
pub fn decide_strategy(game: &GameState) -> TeamStrategy {
    let (ours, theirs) = game.standing();
    if ours < theirs - TERRITORY_MARGIN {
        TeamStrategy::new(
            Posture::Aggressive,
            Focus::Territory,
            vec![
                Directive::ExpandTerritory,
                Directive::AttackEnemies,
                Directive::CollectEnergy,
            ],
            "Aggressive expansion to catch up in territory control.",
        )
    } else if ours > theirs + TERRITORY_MARGIN {
        TeamStrategy::new(
            Posture::Defensive,
            Focus::Resources,
            vec![
                Directive::DefendTerritory,
                Directive::CollectMaterials,
                Directive::CollectEnergy,
            ],
            "Defend current territory while building resource advantage.",
        )
    } else {
        TeamStrategy::new(
            Posture::Balanced,
            Focus::Resources,
            vec![
                Directive::CollectEnergy,
                Directive::ExpandTerritory,
                Directive::CollectMaterials,
            ],
            "Balanced approach focusing on resource collection and gradual expansion.",
        )
    }
}
