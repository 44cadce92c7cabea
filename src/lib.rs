//! # Pokémon Battle Simulator
//!
//! A web API around a deterministic, turn-based battle resolver.
//!
//! ## Overview
//!
//! The service loads a static pokedex (`pokemon_data.json`) at startup and
//! exposes two things: a lookup resource for individual Pokémon records and a
//! battle simulation tool that pits two of them against each other. A battle
//! applies type effectiveness and status effects over a capped turn loop and
//! returns an ordered event log plus the winner (or none on stalemate).
//!
//! ## Architecture
//!
//! The API is built using the Rocket web framework with OpenAPI documentation
//! support. All reference tables are immutable after startup and shared
//! read-only across requests; each battle owns its mutable state, so
//! concurrent simulations need no coordination. Randomness flows through a
//! seedable session generator for reproducible replays.

// Rocket makes this a bit tricky to support
#![allow(clippy::module_name_repetitions)]
#[macro_use]
extern crate rocket;

use std::path::Path;

use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};

pub mod battle;
pub mod cors;
pub mod meta;
pub mod pokedex;
pub mod server_state;
pub mod session_seed;
pub mod status_messages;

/// Initializes and configures the Rocket web server with all routes and OpenAPI documentation.
///
/// Loads the bundled `pokemon_data.json` and fails fast when it is missing or
/// malformed; the service is useless without its reference data.
///
/// # Example
///
/// ```no_run
/// use pokemon_battle_sim::rocket_initialize;
///
/// #[rocket::main]
/// async fn main() {
///     rocket_initialize().launch().await.expect("Failed to launch rocket");
/// }
/// ```
pub fn rocket_initialize() -> rocket::Rocket<rocket::Build> {
    use crate::battle::okapi_add_operation_for_run_battle_;
    use crate::battle::run_battle;
    use crate::pokedex::get_pokemon;
    use crate::pokedex::okapi_add_operation_for_get_pokemon_;
    use crate::session_seed::okapi_add_operation_for_set_seed_;
    use crate::session_seed::set_seed;

    #[allow(clippy::no_effect_underscore_binding)]
    let _ = env_logger::try_init();

    let data_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("pokemon_data.json");
    let pokedex = match pokedex::load_from_file(&data_path) {
        Ok(pokedex) => pokedex,
        Err(e) => panic!("Required data file could not be loaded: {}", e),
    };
    let state = server_state::new(pokedex);
    log::info!(
        "loaded {} pokedex entries and {} moves",
        state.pokedex.len(),
        state.move_catalog.len()
    );

    rocket::build()
        .mount(
            "/",
            openapi_get_routes![run_battle, get_pokemon, set_seed],
        )
        .mount("/swagger", make_swagger_ui(&get_docs()))
        .mount(
            "/",
            rocket::routes![meta::index, meta::mcp_manifest, cors::cors_preflight],
        )
        .manage(state)
        .attach(cors::Cors)
}

fn get_docs() -> SwaggerUIConfig {
    SwaggerUIConfig {
        url: "/openapi.json".to_string(),
        ..Default::default()
    }
}
