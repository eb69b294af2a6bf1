use lazy_static::lazy_static;
use regex::Regex;

use super::templates::{fill, FALLBACK_TEMPLATE};
use crate::MIN_NARRATIVE_WORDS;

lazy_static! {
    static ref DENYLIST: Regex = Regex::new(
        r"(?i)\b(?:vernal|recommended|spawner|locations|troops|defenses|damage|health|attack|defense|spell|building|unit)\b"
    )
    .unwrap();
    static ref DISALLOWED: Regex = Regex::new(r"[^\w\s.!?,:;áéíóúÁÉÍÓÚñÑüÜ]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Strips English game jargon and stray symbols. Question marks go too.
pub fn sanitize(text: &str) -> String {
    let text = DENYLIST.replace_all(text, "");
    let text = DISALLOWED.replace_all(&text, "");
    let text = text.replace('?', "");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Sanitizes `candidate`, swapping in the generic sentence when too little survives.
pub fn finalize(candidate: &str, cost: u32) -> String {
    let cleaned = sanitize(candidate);
    if cleaned.split_whitespace().count() >= MIN_NARRATIVE_WORDS {
        return cleaned;
    }
    #[cfg(feature = "trace")]
    tracing::debug!(candidate, "narrative too short, using fallback");
    sanitize(&fill(FALLBACK_TEMPLATE, cost, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denylisted_words_are_whole_word_only() {
        assert_eq!(sanitize("Spell of DAMAGE"), "of");
        assert_eq!(sanitize("spellbound damaged"), "spellbound damaged");
    }

    #[test]
    fn inverted_marks_are_dropped() {
        assert_eq!(sanitize("¡Hola! ¿Qué tal?"), "Hola! Qué tal");
    }

    #[test]
    fn accented_letters_survive() {
        assert_eq!(sanitize("Daño épico ñandú"), "Daño épico ñandú");
    }

    #[test]
    fn short_text_falls_back() {
        assert_eq!(
            finalize("spell damage", 5),
            "Carta poderosa de 5 elixir! Perfecta para dominar la arena. Los enemigos temerán su increíble poder destructivo."
        );
    }
}
