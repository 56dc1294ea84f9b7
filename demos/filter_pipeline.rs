// Example demonstrating the offline half of the browse pipeline:
// criteria parsing, filter strategies, sorting and the type chart.

use pokedex_browse::{
    CriteriaUpdate, Pokemon, SearchCriteria, SortKey, Sprites, effectiveness, filters, sort,
};

fn main() {
    println!("🔍 Filter Pipeline Examples");

    let roster = sample_roster();
    println!("\n📋 Roster: {} Pokémon", roster.len());
    for pokemon in &roster {
        println!(
            "   #{:<3} {:<10} {:?}",
            pokemon.id, pokemon.name, pokemon.types
        );
    }

    criteria_example(&roster);
    weakness_example(&roster);
    sort_example(&roster);
    type_chart_example();
}

fn sample_roster() -> Vec<Pokemon> {
    vec![
        mon(1, "bulbasaur", &["grass", "poison"], 0.7, 6.9),
        mon(4, "charmander", &["fire"], 0.6, 8.5),
        mon(7, "squirtle", &["water"], 0.5, 9.0),
        mon(25, "pikachu", &["electric"], 0.4, 6.0),
        mon(95, "onix", &["rock", "ground"], 8.8, 210.0),
        mon(130, "gyarados", &["water", "flying"], 6.5, 235.0),
    ]
}

fn mon(id: u32, name: &str, types: &[&str], height: f64, weight: f64) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        types: types.iter().map(|s| s.to_string()).collect(),
        abilities: Vec::new(),
        stats: Vec::new(),
        height: Some(height),
        weight: Some(weight),
        sprites: Sprites::default(),
        species: None,
        species_url: None,
        generation: None,
        habitat: "unknown".to_string(),
        description: String::new(),
        evolution_chain: Vec::new(),
    }
}

fn criteria_example(roster: &[Pokemon]) {
    println!("\n📝 Criteria Merge Example:");

    let update = CriteriaUpdate {
        r#type: Some("water".to_string()),
        weight: Some("heavy".to_string()),
        ..CriteriaUpdate::default()
    };
    let criteria = SearchCriteria::default().apply(&update);
    println!("   type={:?} weight={:?}", criteria.r#type, criteria.weight);

    let kept = filters::apply_filters(roster.to_vec(), &criteria, None);
    for pokemon in &kept {
        println!("✅ {} ({:?} kg)", pokemon.name, pokemon.weight);
    }
}

fn weakness_example(roster: &[Pokemon]) {
    println!("\n⚡ Weakness Filter Example:");

    let soaked = filters::by_weakness(roster.to_vec(), "electric");
    for pokemon in &soaked {
        println!("✅ {} is weak to electric", pokemon.name);
    }
}

fn sort_example(roster: &[Pokemon]) {
    println!("\n📊 Sort Example (height, tallest first):");

    let mut list = roster.to_vec();
    sort::sort_pokemon(&mut list, SortKey::parse("-height"));
    for pokemon in &list {
        println!("   {:<10} {:?} m", pokemon.name, pokemon.height);
    }
}

fn type_chart_example() {
    println!("\n🔥 Type Chart Example:");

    if let Some(targets) = effectiveness::super_effective_against("fire") {
        println!("   fire is super effective against {:?}", targets);
    }

    let bulbasaur_types = vec!["grass".to_string(), "poison".to_string()];
    println!(
        "   bulbasaur takes double damage from {:?}",
        effectiveness::weaknesses_of(&bulbasaur_types)
    );
}
