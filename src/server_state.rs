//! Shared, Rocket-managed service state.
//!
//! The pokedex, type chart, and move catalog are built once at startup and
//! only read afterwards, so concurrent battle requests share them without
//! locking. The session RNG is the single mutable value and lives behind a
//! mutex.

use std::collections::HashMap;
use std::sync::Arc;

use rand::SeedableRng;
use rand_pcg::Lcg64Xsh32;
use rocket::futures::lock::Mutex;

use crate::battle::{MoveCatalog, TypeChart};
use crate::pokedex::PokemonRef;

pub struct ServerState {
    pub pokedex: HashMap<String, PokemonRef>,
    pub type_chart: TypeChart,
    pub move_catalog: MoveCatalog,
    pub(crate) session_rng: Arc<Mutex<Lcg64Xsh32>>,
}

pub fn new(pokedex: HashMap<String, PokemonRef>) -> ServerState {
    let rng = Lcg64Xsh32::from_entropy();
    ServerState {
        pokedex,
        type_chart: TypeChart::new(),
        move_catalog: MoveCatalog::new(),
        session_rng: Arc::new(Mutex::new(rng)),
    }
}
