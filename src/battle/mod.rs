//! Battle simulation: the deterministic core plus its HTTP endpoint.

use either::{Either, Left, Right};
use rocket::response::status::{BadRequest, NotFound};
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::State;
use rocket_okapi::{openapi, JsonSchema};

use crate::pokedex::normalize_name;
use crate::server_state::ServerState;
use crate::session_seed::derive_subseed;
use crate::status_messages::{new_status, Status};

pub mod damage;
pub mod moves;
pub mod rng;
pub mod simulate;
pub mod type_chart;

pub use moves::{MoveCatalog, MoveDefinition, StatusCondition};
pub use rng::{BattleRng, FixedRng, PcgBattleRng};
pub use simulate::{simulate_battle, BattleResult};
pub use type_chart::{ElementType, TypeChart};

/// Request body for the battle simulation tool.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct BattleRequest {
    pub pokemon1: String,
    pub pokemon2: String,
}

/// Run one battle between two Pokémon from the loaded reference data.
///
/// Both names must resolve in the pokedex; an unknown name is reported as 404
/// before any simulation state exists. The battle itself consumes a subseed
/// derived from the session RNG, so replays after `POST /battle/seed` are
/// deterministic.
#[openapi]
#[post("/v1/tools/battle_simulation_tool/run", format = "json", data = "<request>")]
pub async fn run_battle(
    request: Json<BattleRequest>,
    server_state: &State<ServerState>,
) -> Result<Json<BattleResult>, Either<NotFound<Json<Status>>, BadRequest<Json<Status>>>> {
    let request = request.0;

    let first = match server_state.pokedex.get(&normalize_name(&request.pokemon1)) {
        Some(reference) => reference,
        None => {
            return Err(Left(NotFound(new_status(format!(
                "Pokémon '{}' not found.",
                request.pokemon1
            )))));
        }
    };
    let second = match server_state.pokedex.get(&normalize_name(&request.pokemon2)) {
        Some(reference) => reference,
        None => {
            return Err(Left(NotFound(new_status(format!(
                "Pokémon '{}' not found.",
                request.pokemon2
            )))));
        }
    };

    let subseed = derive_subseed(server_state).await;
    let mut battle_rng = PcgBattleRng::from_seed_u64(subseed);
    log::debug!(
        "running battle {} vs {} with subseed {}",
        first.name, second.name, subseed
    );

    match simulate_battle(
        first,
        second,
        &server_state.move_catalog,
        &server_state.type_chart,
        &mut battle_rng,
    ) {
        Ok(result) => Ok(Json(result)),
        Err(e) => Err(Right(BadRequest(new_status(e)))),
    }
}
