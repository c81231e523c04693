//! Landing page and its script, embedded at compile time.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

const INDEX_HTML: &str = include_str!("../../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../../static/script.js");

/// Serve the generator form.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

/// Serve the form's client script.
#[get("/static/script.js")]
pub async fn script() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/javascript; charset=utf-8")
        .body(SCRIPT_JS)
}
