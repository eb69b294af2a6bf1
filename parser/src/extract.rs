use models::{ExtractedNumbers, Stat};

use crate::{
    first_match, normalize,
    re::{BARE_NUMBER, COST_RULES, DAMAGE_RULES, DURATION_RULES, HEALTH_RULES},
    NumberRule, ParserOptions,
};

pub fn rules_for(stat: Stat) -> &'static [NumberRule] {
    match stat {
        Stat::Cost => &COST_RULES,
        Stat::Damage => &DAMAGE_RULES,
        Stat::Health => &HEALTH_RULES,
        Stat::Duration => &DURATION_RULES,
    }
}

/// Numbers the user tied to a role, using the precise parser options.
pub fn extract(text: &str) -> ExtractedNumbers {
    let options = ParserOptions::default();
    extract_normalized(&normalize(text, &options), &options)
}

pub(crate) fn extract_normalized(text: &str, options: &ParserOptions) -> ExtractedNumbers {
    let mut numbers = ExtractedNumbers::default();
    for stat in Stat::ALL {
        if stat == Stat::Duration && !options.track_duration {
            continue;
        }
        let found = first_match(rules_for(stat), text);
        #[cfg(feature = "trace")]
        if let Some((rule, value)) = found {
            tracing::trace!(%stat, rule, value, "number rule matched");
        }
        numbers.set(stat, found.map(|(_, value)| value));
    }

    if options.positional_fallback
        && numbers.cost.is_none()
        && numbers.damage.is_none()
        && numbers.health.is_none()
    {
        let bare: Vec<u32> = BARE_NUMBER
            .find_iter(text)
            .filter_map(|m| m.as_str().parse::<u32>().ok())
            .take(3)
            .collect();
        if let [cost, damage, health] = bare[..] {
            #[cfg(feature = "trace")]
            tracing::trace!(cost, damage, health, "positional numbers used");
            numbers.cost = Some(cost);
            numbers.damage = Some(damage);
            numbers.health = Some(health);
        }
    }

    numbers
}
