use models::{ArchetypeProfile, Element};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterEntry {
    pub keyword: &'static str,
    pub profile: ArchetypeProfile,
}

const fn entry(keyword: &'static str, profile: ArchetypeProfile) -> CharacterEntry {
    CharacterEntry { keyword, profile }
}

const GOLEM: ArchetypeProfile = ArchetypeProfile::troop("Golem", 8);
const GIANT: ArchetypeProfile = ArchetypeProfile::troop("Gigante", 5);
const KNIGHT: ArchetypeProfile = ArchetypeProfile::troop("Caballero", 3);
const ARCHER: ArchetypeProfile = ArchetypeProfile::troop("Arquero", 3);
const DRAGON: ArchetypeProfile = ArchetypeProfile::troop("Dragón", 4);
const WIZARD: ArchetypeProfile = ArchetypeProfile::troop("Mago", 5);
const SPELL: ArchetypeProfile = ArchetypeProfile::spell("Hechizo", 4, 3);
const LIGHTNING: ArchetypeProfile = ArchetypeProfile::spell("Rayo", 6, 1);
const FIREBALL: ArchetypeProfile = ArchetypeProfile::spell("Bola de Fuego", 4, 2);
const ARROWS: ArchetypeProfile = ArchetypeProfile::spell("Flechas", 3, 1);
const POISON: ArchetypeProfile = ArchetypeProfile::spell("Veneno", 4, 8);
const SLOW: ArchetypeProfile = ArchetypeProfile::spell("Ralentizar", 2, 5);
const FREEZE: ArchetypeProfile = ArchetypeProfile::spell("Congelar", 4, 4);
const TOWER: ArchetypeProfile = ArchetypeProfile::spawner("Torre", 4);
const CANNON: ArchetypeProfile = ArchetypeProfile::spawner("Cañón", 3);
const MORTAR: ArchetypeProfile = ArchetypeProfile::spawner("Mortero", 4);

/// Searched top to bottom; the first keyword found anywhere in the text wins.
pub const CHARACTER_TABLE: &[CharacterEntry] = &[
    entry("golem", GOLEM),
    entry("gigante", GIANT),
    entry("giant", GIANT),
    entry("caballero", KNIGHT),
    entry("knight", KNIGHT),
    entry("arquero", ARCHER),
    entry("archer", ARCHER),
    entry("dragon", DRAGON),
    entry("mago", WIZARD),
    entry("wizard", WIZARD),
    entry("hechizo", SPELL),
    entry("rayo", LIGHTNING),
    entry("lightning", LIGHTNING),
    entry("bola de fuego", FIREBALL),
    entry("fireball", FIREBALL),
    entry("flecha", ARROWS),
    entry("arrow", ARROWS),
    entry("veneno", POISON),
    entry("ralentizar", SLOW),
    entry("congelar", FREEZE),
    entry("torre", TOWER),
    entry("tower", TOWER),
    entry("cañon", CANNON),
    entry("cannon", CANNON),
    entry("mortero", MORTAR),
    entry("mortar", MORTAR),
];

pub const SPELL_KEYWORDS: &[&str] = &["hechizo", "spell", "magia", "conjuro"];
pub const BUILDING_KEYWORDS: &[&str] = &["edificio", "torre", "defensa", "spawner"];

pub const SPELL_FALLBACK: ArchetypeProfile = SPELL;
pub const BUILDING_FALLBACK: ArchetypeProfile = TOWER;
pub const TROOP_FALLBACK: ArchetypeProfile = ArchetypeProfile::troop("Guerrero", 4);

pub const ELEMENT_KEYWORDS: &[(Element, &[&str])] = &[
    (
        Element::Ice,
        &["hielo", "nieve", "congelar", "frio", "frost", "snow", "frozen"],
    ),
    (
        Element::Fire,
        &["fuego", "llama", "quemar", "ardiente", "fire", "flame", "burn"],
    ),
    (
        Element::Electric,
        &["rayo", "electrico", "trueno", "lightning", "electric", "thunder"],
    ),
    (Element::Poison, &["veneno", "toxico", "poison", "toxic"]),
];
