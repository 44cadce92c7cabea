//! Session RNG seeding for deterministic battle replays.

use rand::{RngCore, SeedableRng};
use rand_pcg::Lcg64Xsh32;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::State;
use rocket_okapi::{openapi, JsonSchema};

use crate::server_state::ServerState;

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct SeedRequest {
    pub seed: u64,
}

/// Re-seed the session RNG. Battles run after this draw their subseeds from a
/// known sequence, so the same seed replays the same battles.
#[openapi]
#[post("/battle/seed", format = "json", data = "<seed_req>")]
pub async fn set_seed(
    seed_req: Json<SeedRequest>,
    server_state: &State<ServerState>,
) -> Json<String> {
    let s = seed_req.seed;
    let mut seed_bytes: [u8; 16] = [0u8; 16];
    // fill with two copies of the u64
    seed_bytes[0..8].copy_from_slice(&s.to_le_bytes());
    seed_bytes[8..16].copy_from_slice(&s.to_le_bytes());
    let new_rng = Lcg64Xsh32::from_seed(seed_bytes);
    *server_state.session_rng.lock().await = new_rng;

    log::info!("session rng re-seeded");
    Json(format!("seed set to {}", s))
}

/// Derive a u64 subseed for one battle by consuming the session RNG.
pub async fn derive_subseed(server_state: &State<ServerState>) -> u64 {
    let mut rng = server_state.session_rng.lock().await;
    rng.next_u64()
}
