//! CORS support for browser clients (the original UI is opened from a local
//! file, which sends `Origin: null`).

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Request, Response};

const ALLOWED_ORIGINS: &[&str] = &["null", "http://127.0.0.1:8000"];

pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS response headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let origin = match request.headers().get_one("Origin") {
            Some(origin) if ALLOWED_ORIGINS.contains(&origin) => origin,
            _ => return,
        };
        response.set_header(Header::new(
            "Access-Control-Allow-Origin",
            origin.to_string(),
        ));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

/// Catch-all preflight route; the fairing attaches the actual headers.
#[options("/<_..>")]
pub async fn cors_preflight() {}
