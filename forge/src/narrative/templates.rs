use models::Archetype;

use crate::{CostTier, StatTier, TemplateKey};

// Placeholders: {cost}, {damage}, {health}.

const SPELL_CHEAP: &[&str] = &[
    "¡Hechizo rápido de {cost} elixir! Causa {damage} de daño instantáneo. Perfecto para eliminar tropas pequeñas y sorprender al enemigo.",
    "¡Magia económica de {cost} elixir! Inflige {damage} puntos de daño en área. Los rivales no verán venir este devastador conjuro.",
    "¡Conjuro veloz de {cost} elixir! Destruye con {damage} de daño. Ideal para ciclos rápidos y ataques sorpresa definitivos.",
];

const SPELL_STANDARD: &[&str] = &[
    "¡Hechizo poderoso de {cost} elixir! Arrasa enemigos con {damage} de daño brutal en zona amplia. Cambiará el destino de la batalla.",
    "¡Conjuro versátil de {cost} elixir! Aniquila rivales con {damage} puntos de daño devastador. Úsalo sabiamente para la victoria.",
    "¡Magia destructiva de {cost} elixir! Causa {damage} de daño letal en área. Los enemigos huirán aterrorizados del campo.",
];

const SPELL_PREMIUM: &[&str] = &[
    "¡Hechizo legendario de {cost} elixir! Aniquila todo con {damage} de daño masivo apocalíptico. Devastación total garantizada en la arena.",
    "¡Conjuro supremo de {cost} elixir! Destrucción absoluta de {damage} puntos letales. Dominará completamente toda la arena de batalla.",
    "¡Magia definitiva de {cost} elixir! Poder destructivo de {damage}. La victoria está completamente asegurada para siempre.",
];

const SPAWNER_STANDARD: &[&str] = &[
    "¡Torre productora de {cost} elixir! Genera tropas continuamente sin parar. Resistencia sólida para defender tu corona victoriosamente.",
    "¡Edificio spawner de {cost} elixir! Invoca unidades automáticamente en oleadas. Presión constante que abrumará a los enemigos.",
    "¡Estructura generadora de {cost} elixir! Produce ejércitos sin descanso. Los rivales no podrán avanzar ni un solo paso.",
];

const SPAWNER_PREMIUM: &[&str] = &[
    "¡Mega fortaleza de {cost} elixir! Genera oleadas masivas de tropas imparables. Dominará completamente el campo de batalla enemigo.",
    "¡Super edificio de {cost} elixir! Invoca ejércitos legendarios continuamente. La presión será absolutamente abrumadora para los rivales.",
    "¡Torre suprema de {cost} elixir! Producción masiva garantizada eternamente. Los enemigos se rendirán antes de la primera oleada.",
];

const TROOP_CHEAP_OFFENSIVE: &[&str] = &[
    "¡Guerrero feroz de {cost} elixir! Ataque brutal de {damage} por golpe mortal. Perfecto para ataques sorpresa devastadores.",
    "¡Luchador veloz de {cost} elixir! Golpea con {damage} de daño letal. Los enemigos caerán antes de reaccionar.",
    "¡Asesino rápido de {cost} elixir! Causa {damage} puntos por impacto. Ideal para ciclos de muerte imparables.",
];

const TROOP_CHEAP_DEFENSIVE: &[&str] = &[
    "¡Tropa económica de {cost} elixir! Resistencia sólida de {health} puntos. Perfecta para distraer y confundir enemigos.",
    "¡Unidad barata de {cost} elixir! Aguanta {health} de daño heroicamente. Excelente para defensa y contraataques.",
    "¡Soldado accesible de {cost} elixir! Vida resistente de {health}. Los rivales gastarán elixir extra innecesariamente.",
];

const TROOP_STANDARD_OFFENSIVE: &[&str] = &[
    "¡Guerrero implacable de {cost} elixir! Daño devastador de {damage} por golpe brutal. Arrasará con cualquier enemigo del camino.",
    "¡Luchador legendario de {cost} elixir! Ataque mortal de {damage} puntos. Los rivales huirán aterrorizados de su poder.",
    "¡Soldado feroz de {cost} elixir! Golpe letal de {damage}. Devastación pura que aniquilará toda resistencia enemiga.",
];

const TROOP_STANDARD_DEFENSIVE: &[&str] = &[
    "¡Tanque invencible de {cost} elixir! Vida masiva de {health} puntos épicos. Absorbe todo el daño enemigo sin inmutarse.",
    "¡Muro viviente de {cost} elixir! Resistencia titánica de {health}. Ningún ataque enemigo podrá detener su avance.",
    "¡Fortaleza móvil de {cost} elixir! Aguanta {health} de daño heroicamente. Los enemigos se cansarán de atacar inútilmente.",
];

const TROOP_STANDARD_BALANCED: &[&str] = &[
    "¡Tropa equilibrada de {cost} elixir! Combina {damage} de ataque y {health} de vida perfectamente. Versatilidad total asegurada.",
    "¡Unidad completa de {cost} elixir! Estadísticas balanceadas ideales para toda situación. Funcionará en cualquier estrategia.",
    "¡Soldado versátil de {cost} elixir! Poder y resistencia combinados magistralmente. Perfecto para cualquier táctica de batalla.",
];

const TROOP_PREMIUM_OFFENSIVE: &[&str] = &[
    "¡Bestia legendaria de {cost} elixir! Poder destructivo de {damage} apocalíptico. Aniquilará completamente cualquier ejército enemigo existente.",
    "¡Titán imparable de {cost} elixir! Fuerza brutal de {damage} devastadora. Los rivales abandonarán la partida al verlo aparecer.",
    "¡Monstruo definitivo de {cost} elixir! Daño letal de {damage}. Dominación total asegurada para toda la eternidad.",
];

const TROOP_PREMIUM_DEFENSIVE: &[&str] = &[
    "¡Coloso invencible de {cost} elixir! Resistencia épica de {health} puntos legendarios. Será completamente imposible de destruir.",
    "¡Gigante supremo de {cost} elixir! Vida masiva de {health}. Absorbe cualquier ataque sin sufrir daño significativo.",
    "¡Titán defensivo de {cost} elixir! Aguanta {health} de daño épico. Los enemigos se agotarán antes de derrotarlo.",
];

const TROOP_PREMIUM_BALANCED: &[&str] = &[
    "¡Campeón premium de {cost} elixir! Estadísticas superiores balanceadas perfectamente. Dominará toda la arena con superioridad.",
    "¡Unidad élite de {cost} elixir! Poder y resistencia combinados magistralmente. La victoria está completamente garantizada.",
    "¡Guerrero supremo de {cost} elixir! Perfección absoluta en combate. Los rivales no tienen ni la menor oportunidad.",
];

pub const FALLBACK_TEMPLATE: &str = "¡Carta poderosa de {cost} elixir! Perfecta para dominar la arena. Los enemigos temerán su increíble poder destructivo.";

pub fn templates_for(key: &TemplateKey) -> &'static [&'static str] {
    match (key.archetype, key.cost_tier, key.stat_tier) {
        (Archetype::Spell, CostTier::Cheap, _) => SPELL_CHEAP,
        (Archetype::Spell, CostTier::Standard, _) => SPELL_STANDARD,
        (Archetype::Spell, CostTier::Premium, _) => SPELL_PREMIUM,
        (Archetype::Spawner, CostTier::Cheap | CostTier::Standard, _) => SPAWNER_STANDARD,
        (Archetype::Spawner, CostTier::Premium, _) => SPAWNER_PREMIUM,
        (Archetype::Troop, CostTier::Cheap, StatTier::Offensive) => TROOP_CHEAP_OFFENSIVE,
        (Archetype::Troop, CostTier::Cheap, _) => TROOP_CHEAP_DEFENSIVE,
        (Archetype::Troop, CostTier::Standard, StatTier::Offensive) => TROOP_STANDARD_OFFENSIVE,
        (Archetype::Troop, CostTier::Standard, StatTier::Defensive) => TROOP_STANDARD_DEFENSIVE,
        (Archetype::Troop, CostTier::Standard, StatTier::Balanced) => TROOP_STANDARD_BALANCED,
        (Archetype::Troop, CostTier::Premium, StatTier::Offensive) => TROOP_PREMIUM_OFFENSIVE,
        (Archetype::Troop, CostTier::Premium, StatTier::Defensive) => TROOP_PREMIUM_DEFENSIVE,
        (Archetype::Troop, CostTier::Premium, StatTier::Balanced) => TROOP_PREMIUM_BALANCED,
    }
}

pub fn fill(template: &str, cost: u32, damage: u32, health: u32) -> String {
    template
        .replace("{cost}", &cost.to_string())
        .replace("{damage}", &damage.to_string())
        .replace("{health}", &health.to_string())
}
