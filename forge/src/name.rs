use models::{CardDescriptor, Element};

pub fn card_name(card: &CardDescriptor) -> String {
    let mut parts = vec![card.character().to_uppercase()];
    let element_suffix = card
        .elements()
        .first_of(&[Element::Ice, Element::Fire, Element::Electric])
        .map(|element| match element {
            Element::Ice => "DE HIELO",
            Element::Fire => "DE FUEGO",
            _ => "ELÉCTRICO",
        });
    parts.extend(element_suffix.map(str::to_string));
    let cost_suffix = match card.cost() {
        7.. => "SUPREMO",
        5..=6 => "ÉPICO",
        3..=4 => "ELITE",
        _ => "RÁPIDO",
    };
    parts.push(cost_suffix.to_string());
    parts.join(" ")
}
