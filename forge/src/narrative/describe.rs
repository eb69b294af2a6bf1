use models::{Archetype, CardDescriptor, Element};

const INTRO_PRIORITY: [Element; 3] = [Element::Ice, Element::Fire, Element::Electric];

/// Deterministic narrative built from the card's own numbers.
pub fn describe(card: &CardDescriptor) -> String {
    let character = card.character();
    let cost = card.cost();
    let mut parts = Vec::with_capacity(6);

    let element = card.elements().first_of(&INTRO_PRIORITY);
    parts.push(match element {
        Some(Element::Ice) => format!("¡{character} de hielo de {cost} elixir!"),
        Some(Element::Fire) => format!("¡{character} de fuego de {cost} elixir!"),
        Some(Element::Electric) => format!("¡{character} eléctrico de {cost} elixir!"),
        _ => format!("¡{character} de {cost} elixir!"),
    });
    match element {
        Some(Element::Ice) => parts.push("Congela a sus enemigos con poder glacial.".to_string()),
        Some(Element::Fire) => {
            parts.push("Arde con llamas devastadoras que consumen todo.".to_string())
        }
        Some(Element::Electric) => {
            parts.push("Electriza el campo con descargas letales.".to_string())
        }
        _ => {}
    }

    let (damage, health, duration) = (card.damage(), card.health(), card.duration());
    match card.archetype() {
        Archetype::Spell => {
            parts.push(format!("Causa {damage} puntos de daño"));
            parts.push(match duration {
                0 => "devastador y preciso.".to_string(),
                1 => "con efecto instantáneo.".to_string(),
                2..=3 => format!("con efecto que dura {duration} segundos."),
                _ => format!("manteniendo su efecto por {duration} segundos."),
            });
        }
        Archetype::Spawner => {
            parts.push(format!("Con {health} puntos de resistencia"));
            parts.push(if health >= 1000 {
                "es prácticamente indestructible.".to_string()
            } else {
                "defiende eficazmente.".to_string()
            });
        }
        Archetype::Troop => {
            parts.push(format!("Ataque de {damage} y resistencia de {health}"));
            let flavor = match (damage > 300, health) {
                (true, h) if h > 600 => "- ¡Una bestia imparable!",
                (true, _) => "con golpes devastadores.",
                (false, h) if h > 800 => "como un tanque blindado.",
                _ => "perfectamente balanceado.",
            };
            parts.push(flavor.to_string());
        }
    }

    parts.push(
        match cost {
            7.. => "¡Dominará completamente la arena!",
            4..=6 => "¡Perfecto para estrategias épicas!",
            _ => "¡Ideal para ciclos rápidos!",
        }
        .to_string(),
    );
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{CardStats, ElementSet};

    fn card(archetype: Archetype, stats: CardStats, elements: &[Element]) -> CardDescriptor {
        CardDescriptor::new(
            archetype,
            "Golem",
            stats,
            elements.iter().copied().collect::<ElementSet>(),
            "",
        )
    }

    #[test]
    fn ice_wins_the_intro_over_fire() {
        let stats = CardStats {
            cost: 8,
            damage: 400,
            health: 200,
            duration: 0,
        };
        let text = describe(&card(Archetype::Troop, stats, &[Element::Fire, Element::Ice]));
        assert_eq!(
            text,
            "¡Golem de hielo de 8 elixir! Congela a sus enemigos con poder glacial. \
             Ataque de 400 y resistencia de 200 con golpes devastadores. \
             ¡Dominará completamente la arena!"
        );
    }

    #[test]
    fn spell_duration_wording() {
        let stats = |duration| CardStats {
            cost: 3,
            damage: 210,
            health: 0,
            duration,
        };
        let instant = describe(&card(Archetype::Spell, stats(1), &[]));
        assert!(instant.contains("con efecto instantáneo."));
        assert!(describe(&card(Archetype::Spell, stats(3), &[])).contains("dura 3 segundos."));
        assert!(describe(&card(Archetype::Spell, stats(8), &[])).contains("por 8 segundos."));
        assert!(describe(&card(Archetype::Spell, stats(0), &[])).contains("devastador y preciso."));
    }

    #[test]
    fn poison_has_no_intro_flavor() {
        let stats = CardStats {
            cost: 2,
            damage: 0,
            health: 1200,
            duration: 0,
        };
        let text = describe(&card(Archetype::Spawner, stats, &[Element::Poison]));
        assert_eq!(
            text,
            "¡Golem de 2 elixir! Con 1200 puntos de resistencia es prácticamente indestructible. \
             ¡Ideal para ciclos rápidos!"
        );
    }
}
