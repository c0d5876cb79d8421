use super::*;
use crate::strategy::Focus;
use crate::strategy::Posture;

pub const ATTACKER: AgentAttributes = AgentAttributes::new(0.7, 0.6, 0.8, 0.4, 0.3);
pub const DEFENDER: AgentAttributes = AgentAttributes::new(0.4, 0.9, 0.5, 0.9, 0.2);
pub const COLLECTOR: AgentAttributes = AgentAttributes::new(0.6, 0.5, 0.3, 0.5, 0.9);
pub const EXPLORER: AgentAttributes = AgentAttributes::new(0.8, 0.6, 0.5, 0.5, 0.6);

/// Fixed strategy → archetype table. First match wins:
///
/// | strategy / focus          | role      | priority  |
/// |---------------------------|-----------|-----------|
/// | aggressive                | attacker  | territory |
/// | defensive                 | defender  | territory |
/// | economic, or focus on resources | collector | energy |
/// | anything else             | explorer  | data      |
///
/// Resources and existing agents do not influence the outcome.
pub fn decide_agent(request: &AgentRequest) -> AgentSpecification {
    let posture = Posture::try_from(request.strategy.strategy()).ok();
    let focus = Focus::try_from(request.strategy.focus()).ok();
    match (posture, focus) {
        (Some(Posture::Aggressive), _) => AgentSpecification::new(
            Role::Attacker,
            ATTACKER,
            Priority::Territory,
            "Fast attacker focused on territory control.",
        ),
        (Some(Posture::Defensive), _) => AgentSpecification::new(
            Role::Defender,
            DEFENDER,
            Priority::Territory,
            "Sturdy defender with high health and defense.",
        ),
        (Some(Posture::Economic), _) | (_, Some(Focus::Resources)) => AgentSpecification::new(
            Role::Collector,
            COLLECTOR,
            Priority::Energy,
            "Efficient collector with high carry capacity.",
        ),
        _ => AgentSpecification::new(
            Role::Explorer,
            EXPLORER,
            Priority::Data,
            "Fast explorer balancing combat and collection abilities.",
        ),
    }
}
