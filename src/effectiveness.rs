// Static type chart: for an attack type, the defending types that take
// double damage from it.

/// Defending types that are weak to `attack`. `None` for a type the
/// chart does not know, which callers treat as "no opinion" rather than
/// an error.
pub fn super_effective_against(attack: &str) -> Option<&'static [&'static str]> {
    let targets: &'static [&'static str] = match attack.to_ascii_lowercase().as_str() {
        "normal" => &[],
        "fire" => &["grass", "ice", "bug", "steel"],
        "water" => &["fire", "ground", "rock"],
        "electric" => &["water", "flying"],
        "grass" => &["water", "ground", "rock"],
        "ice" => &["grass", "ground", "flying", "dragon"],
        "fighting" => &["normal", "ice", "rock", "dark", "steel"],
        "poison" => &["grass", "fairy"],
        "ground" => &["fire", "electric", "poison", "rock", "steel"],
        "flying" => &["grass", "fighting", "bug"],
        "psychic" => &["fighting", "poison"],
        "bug" => &["grass", "psychic", "dark"],
        "rock" => &["fire", "ice", "flying", "bug"],
        "ghost" => &["psychic", "ghost"],
        "dragon" => &["dragon"],
        "dark" => &["psychic", "ghost"],
        "steel" => &["ice", "rock", "fairy"],
        "fairy" => &["fighting", "dragon", "dark"],
        _ => return None,
    };
    Some(targets)
}

/// Whether a Pokémon with `types` is weak to `attack`
/// (case-insensitive). Unknown attack types are never a weakness.
pub fn is_weak_to(types: &[String], attack: &str) -> bool {
    match super_effective_against(attack) {
        Some(targets) => types
            .iter()
            .any(|t| targets.iter().any(|w| t.eq_ignore_ascii_case(w))),
        None => false,
    }
}

/// Every attack type the given type set is weak to, in chart order.
/// Drives the weakness strip on the detail view.
pub fn weaknesses_of(types: &[String]) -> Vec<&'static str> {
    const ALL_TYPES: [&str; 18] = [
        "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
        "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
    ];
    ALL_TYPES
        .into_iter()
        .filter(|attack| is_weak_to(types, attack))
        .collect()
}
