//! Elemental types and the attacking-type → defending-type multiplier table.

use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;
use std::collections::HashMap;
use std::fmt;

/// The closed set of elemental types. Lowercase on the wire and in
/// `pokemon_data.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ElementType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl ElementType {
    /// Types whose moves use attack/defense; everything else is special.
    pub fn is_physical(self) -> bool {
        matches!(
            self,
            ElementType::Normal
                | ElementType::Fighting
                | ElementType::Flying
                | ElementType::Poison
                | ElementType::Ground
                | ElementType::Rock
                | ElementType::Bug
                | ElementType::Ghost
                | ElementType::Steel
                | ElementType::Dragon
        )
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::Normal => "normal",
            ElementType::Fire => "fire",
            ElementType::Water => "water",
            ElementType::Electric => "electric",
            ElementType::Grass => "grass",
            ElementType::Ice => "ice",
            ElementType::Fighting => "fighting",
            ElementType::Poison => "poison",
            ElementType::Ground => "ground",
            ElementType::Flying => "flying",
            ElementType::Psychic => "psychic",
            ElementType::Bug => "bug",
            ElementType::Rock => "rock",
            ElementType::Ghost => "ghost",
            ElementType::Dragon => "dragon",
            ElementType::Dark => "dark",
            ElementType::Steel => "steel",
            ElementType::Fairy => "fairy",
        };
        write!(f, "{}", name)
    }
}

/// Immutable type-matchup table. Pairs absent from the table count as 1.0,
/// including whole missing attacking rows (there is no dark row in the source
/// data, so dark attacks are neutral against everything).
#[derive(Debug, Clone)]
pub struct TypeChart {
    multipliers: HashMap<ElementType, HashMap<ElementType, f64>>,
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeChart {
    /// Build the standard chart.
    pub fn new() -> Self {
        use ElementType::*;

        let mut multipliers = HashMap::new();
        let mut add_row = |attacking: ElementType, entries: &[(ElementType, f64)]| {
            multipliers.insert(attacking, entries.iter().copied().collect());
        };

        add_row(Normal, &[(Rock, 0.5), (Ghost, 0.0), (Steel, 0.5)]);
        add_row(
            Fire,
            &[
                (Fire, 0.5),
                (Water, 0.5),
                (Grass, 2.0),
                (Ice, 2.0),
                (Bug, 2.0),
                (Rock, 0.5),
                (Dragon, 0.5),
                (Steel, 2.0),
            ],
        );
        add_row(
            Water,
            &[
                (Fire, 2.0),
                (Water, 0.5),
                (Grass, 0.5),
                (Ground, 2.0),
                (Rock, 2.0),
                (Dragon, 0.5),
            ],
        );
        add_row(
            Electric,
            &[
                (Water, 2.0),
                (Electric, 0.5),
                (Grass, 0.5),
                (Ground, 0.0),
                (Flying, 2.0),
                (Dragon, 0.5),
            ],
        );
        add_row(
            Grass,
            &[
                (Fire, 0.5),
                (Water, 2.0),
                (Grass, 0.5),
                (Poison, 0.5),
                (Ground, 2.0),
                (Flying, 0.5),
                (Bug, 0.5),
                (Rock, 2.0),
                (Dragon, 0.5),
                (Steel, 0.5),
            ],
        );
        add_row(
            Ice,
            &[
                (Fire, 0.5),
                (Water, 0.5),
                (Grass, 2.0),
                (Ice, 0.5),
                (Ground, 2.0),
                (Flying, 2.0),
                (Dragon, 2.0),
                (Steel, 0.5),
            ],
        );
        add_row(
            Fighting,
            &[
                (Normal, 2.0),
                (Ice, 2.0),
                (Poison, 0.5),
                (Flying, 0.5),
                (Psychic, 0.5),
                (Bug, 0.5),
                (Rock, 2.0),
                (Ghost, 0.0),
                (Dark, 2.0),
                (Steel, 2.0),
                (Fairy, 0.5),
            ],
        );
        add_row(
            Poison,
            &[
                (Grass, 2.0),
                (Poison, 0.5),
                (Ground, 0.5),
                (Rock, 0.5),
                (Ghost, 0.5),
                (Steel, 0.0),
                (Fairy, 2.0),
            ],
        );
        add_row(
            Ground,
            &[
                (Fire, 2.0),
                (Electric, 2.0),
                (Grass, 0.5),
                (Poison, 2.0),
                (Flying, 0.0),
                (Bug, 0.5),
                (Rock, 2.0),
                (Steel, 2.0),
            ],
        );
        add_row(
            Flying,
            &[
                (Electric, 0.5),
                (Grass, 2.0),
                (Fighting, 2.0),
                (Bug, 2.0),
                (Rock, 0.5),
                (Steel, 0.5),
            ],
        );
        add_row(
            Psychic,
            &[
                (Fighting, 2.0),
                (Poison, 2.0),
                (Psychic, 0.5),
                (Dark, 0.0),
                (Steel, 0.5),
            ],
        );
        add_row(
            Bug,
            &[
                (Fire, 0.5),
                (Grass, 2.0),
                (Fighting, 0.5),
                (Poison, 0.5),
                (Flying, 0.5),
                (Psychic, 2.0),
                (Ghost, 0.5),
                (Steel, 0.5),
                (Fairy, 0.5),
            ],
        );
        add_row(
            Rock,
            &[
                (Fire, 2.0),
                (Ice, 2.0),
                (Fighting, 0.5),
                (Ground, 0.5),
                (Flying, 2.0),
                (Bug, 2.0),
                (Steel, 0.5),
            ],
        );
        add_row(
            Ghost,
            &[
                (Normal, 0.0),
                (Fighting, 0.0),
                (Poison, 2.0),
                (Bug, 2.0),
                (Ghost, 2.0),
                (Dark, 0.5),
            ],
        );
        add_row(Dragon, &[(Dragon, 2.0), (Steel, 0.5), (Fairy, 0.0)]);
        add_row(
            Steel,
            &[
                (Fire, 0.5),
                (Water, 0.5),
                (Electric, 0.5),
                (Ice, 2.0),
                (Rock, 2.0),
                (Steel, 0.5),
                (Fairy, 2.0),
            ],
        );
        add_row(
            Fairy,
            &[
                (Fire, 0.5),
                (Fighting, 2.0),
                (Poison, 0.5),
                (Dragon, 2.0),
                (Dark, 2.0),
                (Steel, 0.5),
            ],
        );

        TypeChart { multipliers }
    }

    /// Total multiplier for an attacking type against a defender's type set:
    /// the product of the pairwise lookups, each defaulting to 1.0. An empty
    /// defender set therefore yields the neutral 1.0.
    pub fn effectiveness(&self, attacking: ElementType, defending: &[ElementType]) -> f64 {
        let mut modifier = 1.0;
        for defending_type in defending {
            let factor = self
                .multipliers
                .get(&attacking)
                .and_then(|row| row.get(defending_type))
                .copied()
                .unwrap_or(1.0);
            modifier *= factor;
        }
        modifier
    }
}
