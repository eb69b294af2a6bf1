use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Ice,
    Fire,
    Electric,
    Poison,
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Ice => write!(f, "ice"),
            Element::Fire => write!(f, "fire"),
            Element::Electric => write!(f, "electric"),
            Element::Poison => write!(f, "poison"),
        }
    }
}

/// Iterates in canonical order (ice, fire, electric, poison) regardless of insertion order.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ElementSet(BTreeSet<Element>);

impl ElementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: Element) -> bool {
        self.0.insert(element)
    }

    pub fn contains(&self, element: Element) -> bool {
        self.0.contains(&element)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Element> + '_ {
        self.0.iter().copied()
    }

    /// First element present in `priority` order.
    pub fn first_of(&self, priority: &[Element]) -> Option<Element> {
        priority.iter().copied().find(|e| self.contains(*e))
    }
}

impl FromIterator<Element> for ElementSet {
    fn from_iter<T: IntoIterator<Item = Element>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for ElementSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let elements = self
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{{{elements}}}")
    }
}
