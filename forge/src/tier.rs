use models::{Archetype, CardDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostTier {
    Cheap,
    Standard,
    Premium,
}

impl CostTier {
    pub fn from_cost(cost: u32) -> Self {
        match cost {
            0..=2 => CostTier::Cheap,
            3..=4 => CostTier::Standard,
            _ => CostTier::Premium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatTier {
    Offensive,
    Defensive,
    Balanced,
}

/// Selects the narrative bucket of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateKey {
    pub archetype: Archetype,
    pub cost_tier: CostTier,
    pub stat_tier: StatTier,
}

impl From<&CardDescriptor> for TemplateKey {
    fn from(card: &CardDescriptor) -> Self {
        let cost_tier = CostTier::from_cost(card.cost());
        let (damage, health) = (card.damage(), card.health());
        let stat_tier = match (card.archetype(), cost_tier) {
            (Archetype::Troop, CostTier::Cheap) if damage > 100 => StatTier::Offensive,
            (Archetype::Troop, CostTier::Cheap) => StatTier::Defensive,
            (Archetype::Troop, CostTier::Standard) if damage > 300 => StatTier::Offensive,
            (Archetype::Troop, CostTier::Standard) if health > 1500 => StatTier::Defensive,
            (Archetype::Troop, CostTier::Premium) if damage > 500 => StatTier::Offensive,
            (Archetype::Troop, CostTier::Premium) if health > 3000 => StatTier::Defensive,
            _ => StatTier::Balanced,
        };
        Self {
            archetype: card.archetype(),
            cost_tier,
            stat_tier,
        }
    }
}
