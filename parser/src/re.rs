use regex::Regex;

use crate::NumberRule;

// Patterns run against normalized (lower-cased, accent-folded) text. Order is precedence.
lazy_static::lazy_static! {
    pub static ref BARE_NUMBER: Regex = Regex::new(r"[0-9]+").unwrap();

    pub static ref COST_RULES: Vec<NumberRule> = vec![
        NumberRule::Leading(Regex::new(r"(?:cueste?|coste?|cost[eo]?|elixir)\s*(?:de)?\s*([0-9]+)").unwrap()),
        NumberRule::Trailing(Regex::new(r"([0-9]+)\s*(?:de\s*)?(?:elixir|coste?|cost[eo]?)").unwrap()),
        NumberRule::Phrase(Regex::new(r"(?:que\s*)?(?:cueste?|valga)\s*([0-9]+)").unwrap()),
        NumberRule::Phrase(Regex::new(r"de\s*([0-9]+)\s*elixir").unwrap()),
    ];

    pub static ref DAMAGE_RULES: Vec<NumberRule> = vec![
        NumberRule::Trailing(Regex::new(r"([0-9]+)\s*(?:de\s*)?(?:daño|damage|ataque|attack)").unwrap()),
        NumberRule::Leading(Regex::new(r"(?:daño|damage|ataque|attack)\s*(?:de)?\s*([0-9]+)").unwrap()),
        NumberRule::Phrase(Regex::new(r"(?:que\s*)?(?:haga|cause|tenga)\s*([0-9]+)\s*(?:de\s*)?(?:daño|damage|ataque)").unwrap()),
        NumberRule::Phrase(Regex::new(r"con\s*([0-9]+)\s*(?:de\s*)?(?:daño|ataque)").unwrap()),
    ];

    pub static ref HEALTH_RULES: Vec<NumberRule> = vec![
        NumberRule::Trailing(Regex::new(r"([0-9]+)\s*(?:de\s*)?(?:vida|health|hp|salud|resistencia)").unwrap()),
        NumberRule::Leading(Regex::new(r"(?:vida|health|hp|salud|resistencia)\s*(?:de)?\s*([0-9]+)").unwrap()),
        NumberRule::Phrase(Regex::new(r"(?:que\s*)?(?:tenga|posea)\s*([0-9]+)\s*(?:de\s*)?(?:vida|health|hp)").unwrap()),
        NumberRule::Phrase(Regex::new(r"y\s*([0-9]+)\s*(?:de\s*)?(?:vida|health)").unwrap()),
    ];

    pub static ref DURATION_RULES: Vec<NumberRule> = vec![
        NumberRule::Leading(Regex::new(r"duracion\s*(?:de)?\s*([0-9]+)\s*(?:segundos?|segs?|s)").unwrap()),
        NumberRule::Phrase(Regex::new(r"dure\s*([0-9]+)\s*(?:segundos?|segs?|s)").unwrap()),
        NumberRule::Trailing(Regex::new(r"([0-9]+)\s*segundos?\s*(?:de\s*)?(?:duracion|efecto|tiempo)").unwrap()),
        NumberRule::Phrase(Regex::new(r"(?:por|durante)\s*([0-9]+)\s*(?:segundos?|segs?|s)").unwrap()),
        NumberRule::Leading(Regex::new(r"efecto\s*(?:de)?\s*([0-9]+)\s*(?:segundos?|segs?|s)").unwrap()),
        NumberRule::Leading(Regex::new(r"con\s*duracion\s*(?:de)?\s*([0-9]+)\s*(?:segundos?|segs?|s)").unwrap()),
        NumberRule::Phrase(Regex::new(r"que\s*dure\s*([0-9]+)\s*(?:segundos?|segs?|s)").unwrap()),
        NumberRule::Phrase(Regex::new(r"(?:lasts?|during|for)\s*([0-9]+)\s*(?:seconds?|secs?)").unwrap()),
    ];
}
