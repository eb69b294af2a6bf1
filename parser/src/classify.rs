use models::{ArchetypeProfile, ElementSet};

use crate::{
    normalize, ParserOptions, BUILDING_FALLBACK, BUILDING_KEYWORDS, CHARACTER_TABLE,
    ELEMENT_KEYWORDS, SPELL_FALLBACK, SPELL_KEYWORDS, TROOP_FALLBACK,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub profile: ArchetypeProfile,
    pub elements: ElementSet,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Classification<{}, elements={}>", self.profile, self.elements)
    }
}

/// Never fails: text without any known keyword becomes a generic troop.
pub fn classify(text: &str) -> Classification {
    classify_normalized(&normalize(text, &ParserOptions::default()))
}

pub(crate) fn classify_normalized(text: &str) -> Classification {
    Classification {
        profile: detect_profile(text),
        elements: detect_elements(text),
    }
}

pub fn detect_profile(text: &str) -> ArchetypeProfile {
    if let Some(found) = CHARACTER_TABLE.iter().find(|e| text.contains(e.keyword)) {
        #[cfg(feature = "trace")]
        tracing::trace!(keyword = found.keyword, "character keyword matched");
        return found.profile;
    }
    if contains_any(text, SPELL_KEYWORDS) {
        SPELL_FALLBACK
    } else if contains_any(text, BUILDING_KEYWORDS) {
        BUILDING_FALLBACK
    } else {
        TROOP_FALLBACK
    }
}

/// Unlike the character scan every matching element is kept.
pub fn detect_elements(text: &str) -> ElementSet {
    ELEMENT_KEYWORDS
        .iter()
        .filter(|(_, keywords)| contains_any(text, keywords))
        .map(|(element, _)| *element)
        .collect()
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}
