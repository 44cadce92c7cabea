//! Move definitions and the static move catalog.

use std::collections::HashMap;
use std::fmt;

use super::type_chart::ElementType;

/// A persistent condition a move can inflict. A combatant carries at most one;
/// a new infliction overwrites the old.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCondition {
    Poison,
    Burn,
    Paralysis,
}

impl fmt::Display for StatusCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusCondition::Poison => "poison",
            StatusCondition::Burn => "burn",
            StatusCondition::Paralysis => "paralysis",
        };
        write!(f, "{}", name)
    }
}

/// Static data for one move. Power 0 marks a pure status move.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveDefinition {
    pub element: ElementType,
    pub power: u32,
    pub status: Option<StatusCondition>,
}

impl MoveDefinition {
    fn new(element: ElementType, power: u32) -> Self {
        MoveDefinition {
            element,
            power,
            status: None,
        }
    }

    fn with_status(element: ElementType, power: u32, status: StatusCondition) -> Self {
        MoveDefinition {
            element,
            power,
            status: Some(status),
        }
    }

    /// The substitute for unknown move identifiers: a plain normal-type hit.
    pub fn generic() -> Self {
        MoveDefinition::new(ElementType::Normal, 40)
    }
}

/// Immutable move-identifier → definition table, built once at startup and
/// shared read-only by every battle.
#[derive(Debug, Clone)]
pub struct MoveCatalog {
    moves: HashMap<String, MoveDefinition>,
}

impl Default for MoveCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveCatalog {
    /// Build the standard catalog.
    pub fn new() -> Self {
        use ElementType::*;

        let mut moves = HashMap::new();
        let mut add = |name: &str, definition: MoveDefinition| {
            moves.insert(name.to_string(), definition);
        };

        add("tackle", MoveDefinition::new(Normal, 40));
        add("vine-whip", MoveDefinition::new(Grass, 45));
        add("flamethrower", MoveDefinition::new(Fire, 90));
        add("water-gun", MoveDefinition::new(Water, 40));
        add("thunderbolt", MoveDefinition::new(Electric, 90));
        add("scratch", MoveDefinition::new(Normal, 40));
        add("ember", MoveDefinition::new(Fire, 40));
        add("ice-beam", MoveDefinition::new(Ice, 90));
        add("body-slam", MoveDefinition::new(Normal, 85));
        add("hydro-pump", MoveDefinition::new(Water, 110));
        add("razor-leaf", MoveDefinition::new(Grass, 55));
        add("double-edge", MoveDefinition::new(Normal, 120));
        add("peck", MoveDefinition::new(Flying, 35));
        add("poison-sting", MoveDefinition::new(Poison, 15));
        add("thunder-shock", MoveDefinition::new(Electric, 40));
        add("earthquake", MoveDefinition::new(Ground, 100));
        add("confusion", MoveDefinition::new(Psychic, 50));
        add("wing-attack", MoveDefinition::new(Flying, 60));
        add("hyper-beam", MoveDefinition::new(Normal, 150));
        add(
            "poison-powder",
            MoveDefinition::with_status(Poison, 0, StatusCondition::Poison),
        );
        add(
            "thunder-wave",
            MoveDefinition::with_status(Electric, 0, StatusCondition::Paralysis),
        );
        add(
            "flame-wheel",
            MoveDefinition::with_status(Fire, 60, StatusCondition::Burn),
        );

        MoveCatalog { moves }
    }

    pub fn get(&self, name: &str) -> Option<&MoveDefinition> {
        self.moves.get(name)
    }

    /// Look up a move, substituting the generic fallback for unknown
    /// identifiers. The fallback is a permanent policy, not an error path.
    pub fn resolve(&self, name: &str) -> MoveDefinition {
        self.moves
            .get(name)
            .cloned()
            .unwrap_or_else(MoveDefinition::generic)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
