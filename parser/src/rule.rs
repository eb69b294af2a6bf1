use regex::Regex;

/// One way of spotting a number next to a role keyword. The variant records
/// the shape of the phrase; every pattern carries exactly one numeric capture.
#[derive(Debug, Clone)]
pub enum NumberRule {
    /// keyword before the number: "cueste 4", "daño de 300"
    Leading(Regex),
    /// number before the keyword: "300 de daño"
    Trailing(Regex),
    /// number inside a verb phrase or clause: "que dure 5 segundos"
    Phrase(Regex),
}

impl NumberRule {
    pub fn pattern(&self) -> &Regex {
        match self {
            NumberRule::Leading(r) | NumberRule::Trailing(r) | NumberRule::Phrase(r) => r,
        }
    }

    /// Digits that do not fit a `u32` count as no match.
    pub fn apply(&self, text: &str) -> Option<u32> {
        self.pattern()
            .captures(text)?
            .get(1)?
            .as_str()
            .parse::<u32>()
            .ok()
    }
}

impl std::fmt::Display for NumberRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberRule::Leading(r) => write!(f, "NumberRule::Leading({})", r.as_str()),
            NumberRule::Trailing(r) => write!(f, "NumberRule::Trailing({})", r.as_str()),
            NumberRule::Phrase(r) => write!(f, "NumberRule::Phrase({})", r.as_str()),
        }
    }
}

/// Evaluates `rules` in order and stops at the first one that yields a number.
pub fn first_match(rules: &[NumberRule], text: &str) -> Option<(usize, u32)> {
    rules
        .iter()
        .enumerate()
        .find_map(|(index, rule)| rule.apply(text).map(|value| (index, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflowing_digits_do_not_match() {
        let rule = NumberRule::Trailing(Regex::new(r"([0-9]+)\s*de daño").unwrap());
        assert_eq!(rule.apply("99999999999 de daño"), None);
        assert_eq!(rule.apply("300 de daño"), Some(300));
    }

    #[test]
    fn first_match_skips_failed_rules() {
        let rules = vec![
            NumberRule::Leading(Regex::new(r"vida\s*([0-9]+)").unwrap()),
            NumberRule::Trailing(Regex::new(r"([0-9]+)\s*de vida").unwrap()),
            NumberRule::Trailing(Regex::new(r"([0-9]+)").unwrap()),
        ];
        assert_eq!(first_match(&rules, "con 200 de vida"), Some((1, 200)));
        assert_eq!(first_match(&rules, "nada"), None);
    }
}
