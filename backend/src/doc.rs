//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the generation endpoint, the health probes and the
//! request, response and error schemas. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::generate::GenerateResponse;
use crate::inbound::http::schemas::GenerateRequestSchema;

/// OpenAPI document for the HTTP interface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gmail variation generator API",
        description = "Generate plausible email username variations from a person's name."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::generate::generate,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(GenerateRequestSchema, GenerateResponse, ErrorBody)),
    tags(
        (name = "generate", description = "Address variation generation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
