mod aux;

use models::{Archetype, Element};
use parser::{classify, CHARACTER_TABLE};
use rstest::rstest;

#[rstest]
#[case("un golem gigante", "Golem")]
#[case("caballero arquero", "Caballero")]
#[case("arquero caballero", "Caballero")]
#[case("un mago lanza un rayo", "Mago")]
#[case("hechizo de rayo", "Hechizo")]
#[case("torre con cañón", "Torre")]
#[case("mortero", "Mortero")]
#[case("a lightning tower", "Rayo")]
#[case("Bola de Fuego", "Bola de Fuego")]
fn test_table_order_wins(#[case] text: &str, #[case] character: &str) {
    for _ in 0..3 {
        assert_eq!(classify(text).profile.character, character, "input {text:?}");
    }
}

#[rstest]
#[case("una magia prohibida", Archetype::Spell, "Hechizo", 3)]
#[case("a simple spell", Archetype::Spell, "Hechizo", 3)]
#[case("una defensa sólida", Archetype::Spawner, "Torre", 0)]
#[case("spawner de esqueletos", Archetype::Spawner, "Torre", 0)]
#[case("un guerrero cualquiera", Archetype::Troop, "Guerrero", 0)]
#[case("", Archetype::Troop, "Guerrero", 0)]
fn test_fallback_groups(
    #[case] text: &str,
    #[case] archetype: Archetype,
    #[case] character: &str,
    #[case] base_duration: u32,
) {
    let profile = classify(text).profile;
    assert_eq!(profile.archetype, archetype);
    assert_eq!(profile.character, character);
    assert_eq!(profile.base_duration, base_duration);
    assert_eq!(profile.base_cost, 4);
}

#[test]
fn test_only_spells_have_base_duration() {
    for entry in CHARACTER_TABLE {
        match entry.profile.archetype {
            Archetype::Spell => assert!(entry.profile.base_duration > 0, "{}", entry.keyword),
            _ => assert_eq!(entry.profile.base_duration, 0, "{}", entry.keyword),
        }
    }
}

#[rstest]
#[case("fuego y hielo")]
#[case("hielo y fuego")]
#[case("llamas sobre la nieve")]
#[case("FROST and FIRE")]
fn test_fire_and_ice_are_both_kept(#[case] text: &str) {
    let elements = classify(text).elements;
    assert_eq!(elements.len(), 2, "input {text:?}");
    assert!(elements.contains(Element::Fire));
    assert!(elements.contains(Element::Ice));
}

#[test]
fn test_element_order_does_not_depend_on_text() {
    let a = classify("veneno, trueno, fuego y frío").elements;
    let b = classify("frío, fuego, trueno y veneno").elements;
    assert_eq!(a, b);
    assert_eq!(a.len(), 4);
}

#[test]
fn test_no_elements() {
    assert!(classify("un caballero").elements.is_empty());
}
