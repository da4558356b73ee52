//! OpenAPI documentation for the HomeVideo catalog.

use homevideo_db::models::home_video::{CreateHomeVideo, HomeVideo, UpdateHomeVideo};
use utoipa::OpenApi;

use crate::handlers::home_video;
use crate::response::{CreatedResponse, ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HomeVideo API",
        description = "Каталог домашней видеотеки: добавление, просмотр, обновление и удаление видео."
    ),
    paths(
        home_video::create,
        home_video::list,
        home_video::get_by_id,
        home_video::update,
        home_video::delete
    ),
    components(schemas(
        HomeVideo,
        CreateHomeVideo,
        UpdateHomeVideo,
        CreatedResponse,
        MessageResponse,
        ErrorResponse
    )),
    tags(
        (name = "HomeVideo", description = "Операции с видеотекой")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/apispec.json"
    }

    pub fn docs_path() -> &'static str {
        "/apidocs"
    }
}
