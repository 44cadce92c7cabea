use rocket::response::status::NotFound;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use super::{normalize_name, PokemonRef};
use crate::server_state::ServerState;
use crate::status_messages::{new_status, Status};

/// Pokémon data resource: returns the full reference record for one name.
/// Name matching is case-insensitive and tolerates spaces ("Mr Mime").
#[openapi]
#[get("/v1/resources/pokemon_data_resource/get?<pokemon_name>")]
pub async fn get_pokemon(
    pokemon_name: String,
    server_state: &State<ServerState>,
) -> Result<Json<PokemonRef>, NotFound<Json<Status>>> {
    let key = normalize_name(&pokemon_name);
    match server_state.pokedex.get(&key) {
        Some(reference) => Ok(Json(reference.clone())),
        None => Err(NotFound(new_status("Pokémon not found".to_string()))),
    }
}
