//! Reference data: combatant records loaded once from `pokemon_data.json`.

use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;
use std::collections::HashMap;
use std::path::Path;

use crate::battle::ElementType;

mod endpoints;

pub use endpoints::{get_pokemon, okapi_add_operation_for_get_pokemon_};

/// A combatant's fixed numeric attributes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct StatBlock {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    #[serde(rename = "special-attack")]
    pub special_attack: u32,
    #[serde(rename = "special-defense")]
    pub special_defense: u32,
    pub speed: u32,
}

/// Static reference record for one Pokémon. Read-only once loaded; battles
/// only ever copy its HP into their own state.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct PokemonRef {
    pub name: String,
    pub stats: StatBlock,
    pub types: Vec<ElementType>,
    pub moves: Vec<String>,
}

/// Normalize a user-supplied name into the pokedex key form: lowercase with
/// spaces replaced by hyphens.
pub fn normalize_name(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "-")
}

/// Load and validate the pokedex from a JSON file.
///
/// Every record must carry 1–2 types and at least one move; a record that
/// violates this is a startup error, never something the battle core has to
/// cope with.
pub fn load_from_file(path: &Path) -> Result<HashMap<String, PokemonRef>, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read {}: {}", path.display(), e))?;
    let pokedex: HashMap<String, PokemonRef> = serde_json::from_str(&raw)
        .map_err(|e| format!("could not parse {}: {}", path.display(), e))?;
    validate(&pokedex)?;
    Ok(pokedex)
}

fn validate(pokedex: &HashMap<String, PokemonRef>) -> Result<(), String> {
    for (key, reference) in pokedex {
        if reference.types.is_empty() || reference.types.len() > 2 {
            return Err(format!(
                "pokedex entry '{}' has {} types, expected 1 or 2",
                key,
                reference.types.len()
            ));
        }
        if reference.moves.is_empty() {
            return Err(format!("pokedex entry '{}' has an empty move list", key));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(types: Vec<ElementType>, moves: Vec<&str>) -> PokemonRef {
        PokemonRef {
            name: "test".to_string(),
            stats: StatBlock {
                hp: 10,
                attack: 10,
                defense: 10,
                special_attack: 10,
                special_defense: 10,
                speed: 10,
            },
            types,
            moves: moves.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Pikachu"), "pikachu");
        assert_eq!(normalize_name("Mr Mime"), "mr-mime");
        assert_eq!(normalize_name("mr-mime"), "mr-mime");
    }

    #[test]
    fn test_stat_block_json_keys() {
        let json = r#"{
            "hp": 45, "attack": 49, "defense": 49,
            "special-attack": 65, "special-defense": 65, "speed": 45
        }"#;
        let stats: StatBlock = serde_json::from_str(json).expect("valid stat block");
        assert_eq!(stats.special_attack, 65);
        assert_eq!(stats.special_defense, 65);
    }

    #[test]
    fn test_validate_rejects_bad_type_counts() {
        let mut pokedex = HashMap::new();
        pokedex.insert("no-types".to_string(), entry(vec![], vec!["tackle"]));
        assert!(validate(&pokedex).unwrap_err().contains("no-types"));

        let mut pokedex = HashMap::new();
        pokedex.insert(
            "too-many".to_string(),
            entry(
                vec![ElementType::Fire, ElementType::Water, ElementType::Grass],
                vec!["tackle"],
            ),
        );
        assert!(validate(&pokedex).unwrap_err().contains("too-many"));
    }

    #[test]
    fn test_validate_rejects_empty_moves() {
        let mut pokedex = HashMap::new();
        pokedex.insert(
            "moveless".to_string(),
            entry(vec![ElementType::Normal], vec![]),
        );
        assert!(validate(&pokedex)
            .unwrap_err()
            .contains("empty move list"));
    }

    #[test]
    fn test_bundled_data_file_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("pokemon_data.json");
        let pokedex = load_from_file(&path).expect("bundled pokedex should load");
        let pikachu = pokedex.get("pikachu").expect("pikachu should exist");
        assert_eq!(pikachu.stats.speed, 90);
        assert_eq!(pikachu.types, vec![ElementType::Electric]);
        assert!(!pikachu.moves.is_empty());
    }
}
