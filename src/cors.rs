use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Request, Response};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
pub const ALLOW_METHODS: &str = "POST, OPTIONS";

/// Adds the permissive CORS headers the site's browser client needs to every
/// response, including preflights and catcher responses.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", ALLOW_ORIGIN));
        response.set_header(Header::new("Access-Control-Allow-Headers", ALLOW_HEADERS));
        response.set_header(Header::new("Access-Control-Allow-Methods", ALLOW_METHODS));
    }
}
