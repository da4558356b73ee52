use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Documentation routes, mounted at the root.
///
/// ```text
/// GET /apispec.json    -> OpenAPI document
/// GET /apidocs         -> 303 to /apidocs/
/// GET /apidocs/        -> Swagger UI (bundled assets)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().merge(
        SwaggerUi::new(ApiDoc::docs_path()).url(ApiDoc::openapi_json_path(), ApiDoc::openapi()),
    )
}
