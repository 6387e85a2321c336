use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{services::documentation::ApiDoc, state::SharedState};

/// Route where the interactive API explorer is mounted.
const SWAGGER_PATH: &str = "/docs";
/// Route serving the raw OpenAPI document the explorer renders.
const OPENAPI_PATH: &str = "/api-doc/openapi.json";

/// Mount the Swagger UI together with the generated OpenAPI document.
pub fn router(state: SharedState) -> Router<SharedState> {
    let swagger = SwaggerUi::new(SWAGGER_PATH).url(OPENAPI_PATH, ApiDoc::openapi());
    Router::from(swagger).with_state(state)
}
