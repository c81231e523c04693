//! Address generation handler.
//!
//! ```text
//! POST /generate {"name":"John Doe","quantity":25}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_name, parse_quantity, request_fields};

/// Successful generation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GenerateResponse {
    /// Unique candidate addresses; seeded patterns first, then suffixed ones.
    #[schema(example = json!(["johndoe@gmail.com", "john.doe@gmail.com"]))]
    pub emails: Vec<String>,
}

/// Generate unique address variations for a name.
///
/// The body is read as raw bytes so that every malformed payload maps onto
/// the same `{"error": ...}` envelope rather than Actix's extractor errors.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use gmail_variants::inbound::http::generate::generate;
///
/// let app = App::new().service(generate);
/// ```
#[utoipa::path(
    post,
    path = "/generate",
    request_body = crate::inbound::http::schemas::GenerateRequestSchema,
    responses(
        (status = 200, description = "Generated addresses", body = GenerateResponse),
        (status = 400, description = "Missing fields or invalid quantity", body = crate::inbound::http::error::ErrorBody),
        (status = 422, description = "Variation space exhausted", body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["generate"],
    operation_id = "generateAddresses"
)]
#[post("/generate")]
pub async fn generate(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<web::Json<GenerateResponse>> {
    let fields = request_fields(&body).inspect_err(|err| debug!(error = %err, "rejected body"))?;
    let quantity = parse_quantity(&fields.quantity)
        .inspect_err(|err| debug!(error = %err, "rejected quantity"))?;
    let name = parse_name(&fields.name)?;

    let emails = state.generator.generate(name, quantity).map_err(|err| {
        warn!(error = %err, %quantity, "address generation exhausted");
        Error::from(err)
    })?;
    debug!(%quantity, produced = emails.len(), "generated address variations");
    Ok(web::Json(GenerateResponse { emails }))
}
