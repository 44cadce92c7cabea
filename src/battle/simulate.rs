//! The battle orchestrator: turn order, the turn loop, and winner selection.

use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

use super::damage::{damage, BATTLE_LEVEL};
use super::moves::{MoveCatalog, StatusCondition};
use super::rng::BattleRng;
use super::type_chart::TypeChart;
use crate::pokedex::{PokemonRef, StatBlock};

/// Battles that have not ended by knockout stop after this many turns.
pub const TURN_CAP: u32 = 100;

/// Mutable per-battle state for one combatant. Created at battle start from
/// the reference record and dropped when the battle ends. HP is signed because
/// it may transiently go negative; display clamps it to zero.
#[derive(Debug, Clone)]
struct CombatantState {
    name: String,
    hp: i64,
    status: Option<StatusCondition>,
}

impl CombatantState {
    fn new(reference: &PokemonRef) -> Self {
        CombatantState {
            name: reference.name.clone(),
            hp: i64::from(reference.stats.hp),
            status: None,
        }
    }
}

/// Which combatant acts first each turn, decided once before the loop and
/// never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOrder {
    FirstActsFirst,
    SecondActsFirst,
}

impl TurnOrder {
    /// Combatant indices (0 = first argument, 1 = second) in acting order.
    fn indices(self) -> [usize; 2] {
        match self {
            TurnOrder::FirstActsFirst => [0, 1],
            TurnOrder::SecondActsFirst => [1, 0],
        }
    }
}

/// Strictly greater speed acts first; a tie puts the second argument first.
/// The tie-break is a documented rule carried over from the reference
/// behavior, not an accident.
pub fn decide_turn_order(first: &StatBlock, second: &StatBlock) -> TurnOrder {
    if first.speed > second.speed {
        TurnOrder::FirstActsFirst
    } else {
        TurnOrder::SecondActsFirst
    }
}

/// The terminal value of one battle: the full event log and the winner's
/// name, absent when the turn cap forced a stalemate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct BattleResult {
    pub battle_log: Vec<String>,
    pub winner: Option<String>,
}

/// Simulate one battle between two combatant references.
///
/// Runs synchronously to completion; the only nondeterminism comes from the
/// injected [`BattleRng`]. Returns an error only for defensive faults such as
/// an empty move list, which the data loader is supposed to have rejected.
pub fn simulate_battle(
    first: &PokemonRef,
    second: &PokemonRef,
    catalog: &MoveCatalog,
    chart: &TypeChart,
    rng: &mut dyn BattleRng,
) -> Result<BattleResult, String> {
    for reference in [first, second] {
        if reference.moves.is_empty() {
            return Err(format!("{} has an empty move list", reference.name));
        }
    }

    let references = [first, second];
    let mut states = [CombatantState::new(first), CombatantState::new(second)];
    let mut log: Vec<String> = Vec::new();

    log.push(format!(
        "A wild {} and {} are ready to battle!",
        capitalize(&states[0].name),
        capitalize(&states[1].name)
    ));
    log.push(format!(
        "{} has {} HP.",
        capitalize(&states[0].name),
        states[0].hp
    ));
    log.push(format!(
        "{} has {} HP.",
        capitalize(&states[1].name),
        states[1].hp
    ));
    log.push("---".to_string());

    let order = decide_turn_order(&first.stats, &second.stats);
    let [leader, follower] = order.indices();
    log.push(format!(
        "{} is faster and will go first!",
        capitalize(&states[leader].name)
    ));

    let mut turn = 0;
    while states[0].hp > 0 && states[1].hp > 0 && turn < TURN_CAP {
        turn += 1;
        log.push(format!("\n--- Turn {} ---", turn));

        // Status tick, in acting order. 10% of current HP, so a tick alone
        // never reduces a positive HP value below 1.
        for index in [leader, follower] {
            let state = &mut states[index];
            if state.hp <= 0 {
                continue;
            }
            match state.status {
                Some(StatusCondition::Poison) => {
                    let tick = state.hp / 10;
                    state.hp -= tick;
                    log.push(format!(
                        "{} is hurt by poison! It lost {} HP.",
                        capitalize(&state.name),
                        tick
                    ));
                }
                Some(StatusCondition::Burn) => {
                    let tick = state.hp / 10;
                    state.hp -= tick;
                    log.push(format!(
                        "{} is hurt by its burn! It lost {} HP.",
                        capitalize(&state.name),
                        tick
                    ));
                }
                _ => {}
            }
        }

        // A knockout during the status tick ends the battle before anyone
        // acts; the HP summary for this turn is skipped as well.
        if states[0].hp <= 0 || states[1].hp <= 0 {
            break;
        }

        for (attacker, defender) in [(leader, follower), (follower, leader)] {
            if states[attacker].status == Some(StatusCondition::Paralysis) && rng.unit() < 0.25 {
                log.push(format!(
                    "{} is paralyzed and can't move!",
                    capitalize(&states[attacker].name)
                ));
                continue;
            }

            let move_list = &references[attacker].moves;
            let move_name = &move_list[rng.pick_index(move_list.len())];
            let chosen = catalog.resolve(move_name);

            if let Some(inflicted) = chosen.status {
                states[defender].status = Some(inflicted);
                log.push(format!(
                    "{} used {}, inflicting {} on {}!",
                    capitalize(&states[attacker].name),
                    move_name,
                    inflicted,
                    capitalize(&states[defender].name)
                ));
            }

            let effectiveness = chart.effectiveness(chosen.element, &references[defender].types);
            let dealt = damage(
                &references[attacker].stats,
                &references[defender].stats,
                &chosen,
                effectiveness,
                BATTLE_LEVEL,
                rng,
            );
            states[defender].hp -= dealt;
            log.push(format!(
                "{} used {}, dealing {} damage.",
                capitalize(&states[attacker].name),
                move_name,
                dealt
            ));

            // The second actor of this turn never moves against a fainted
            // defender.
            if states[defender].hp <= 0 {
                break;
            }
        }

        log.push(format!(
            "HP: {} {} | {} {}",
            capitalize(&states[0].name),
            states[0].hp.max(0),
            capitalize(&states[1].name),
            states[1].hp.max(0)
        ));
    }

    let winner = decide_winner(&states);
    log.push("---".to_string());
    match &winner {
        Some(name) => log.push(format!("Battle over! The winner is {}!", name)),
        None => log.push("The battle ended in a stalemate!".to_string()),
    }

    Ok(BattleResult {
        battle_log: log,
        winner,
    })
}

/// Winner selection, evaluated once after the loop exits. The first
/// combatant's HP is checked first, so when both are down the second
/// combatant is named winner. That evaluation order is preserved behavior.
fn decide_winner(states: &[CombatantState; 2]) -> Option<String> {
    if states[0].hp <= 0 {
        Some(capitalize(&states[1].name))
    } else if states[1].hp <= 0 {
        Some(capitalize(&states[0].name))
    } else {
        None
    }
}

/// First letter uppercased, the rest lowercased, matching the display names
/// the reference data produces.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(head) => head.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
