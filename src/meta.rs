//! Root greeting and the MCP manifest endpoint.

use std::path::Path;

use rocket::fs::NamedFile;
use rocket::serde::json::{json, Value};

#[get("/")]
pub async fn index() -> Value {
    json!({ "Hello": "Trainer!" })
}

/// Serve the static MCP manifest describing the data resource and the battle
/// tool.
#[get("/.well-known/mcp/manifest.json")]
pub async fn mcp_manifest() -> Option<NamedFile> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("manifest.json");
    NamedFile::open(path).await.ok()
}
