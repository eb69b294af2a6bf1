mod aux;

use aux::assert_invariants;
use models::Archetype;
use parser::{build, classify, extract, parse, Parser, ParserOptions};
use rstest::rstest;

const INPUTS: &[&str] = &[
    "",
    "   ",
    "???",
    "0",
    "cueste 0",
    "torre que haga 500 de daño",
    "golem que dure 12 segundos",
    "hechizo con 75 de vida",
    "rayo rayo rayo 1 2 3 4 5",
    "cost 99999999999999999999",
    "Ñandú ÁÉÍÓÚ 🎮 texto raro",
    "un spawner de 10 elixir",
    "veneno que dure 30 segundos y cueste 1",
];

#[rstest]
fn test_build_is_total(
    #[values(ParserOptions::precise(), ParserOptions::legacy())] options: ParserOptions,
) {
    let parser = Parser::new(options);
    for input in INPUTS {
        let card = parser.parse(input);
        assert_invariants(&card);
        assert_eq!(card.source_text(), *input);
    }
}

#[test]
fn test_free_functions_compose() {
    for input in INPUTS {
        let card = build(&extract(input), &classify(input), input);
        assert_eq!(card, parse(input));
    }
}

#[test]
fn test_user_cost_wins_over_profile() {
    for text in ["golem cost 5", "hechizo cost 5", "torre cost 5", "cost 5"] {
        assert_eq!(parse(text).cost(), 5, "input {text:?}");
    }
}

#[test]
fn test_zero_cost_is_raised() {
    assert_eq!(parse("cueste 0").cost(), 1);
}

#[test]
fn test_spawner_damage_is_gated() {
    let card = parse("torre que haga 500 de daño");
    assert_eq!(card.archetype(), Archetype::Spawner);
    assert_eq!(card.damage(), 0);
}

#[test]
fn test_spell_health_defaults_to_zero_but_keeps_user_value() {
    assert_eq!(parse("hechizo de fuego").health(), 0);
    assert_eq!(parse("hechizo con 75 de vida").health(), 75);
}

#[test]
fn test_troop_duration_is_dropped() {
    let card = parse("golem que dure 12 segundos");
    assert_eq!(card.duration(), 0);
}
