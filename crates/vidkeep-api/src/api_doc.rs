//! OpenAPI documentation, served at `/api/openapi.json` and browsable at `/docs`.

use utoipa::OpenApi;

use crate::handlers;
use vidkeep_core::{models, validation};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "vidkeep API",
        version = "0.1.0",
        description = "In-memory video catalogue: create, list, read, update and delete videos."
    ),
    paths(
        handlers::videos::list_videos,
        handlers::videos::create_video,
        handlers::videos::get_video,
        handlers::videos::update_video,
        handlers::videos::delete_video,
        handlers::testing::delete_all_data,
    ),
    components(schemas(
        models::VideoResponse,
        models::CreateVideoInput,
        models::UpdateVideoInput,
        models::Resolution,
        validation::FieldError,
        validation::ValidationErrors,
    )),
    tags(
        (name = "videos", description = "Video catalogue"),
        (name = "testing", description = "Test-support endpoints")
    )
)]
pub struct ApiDoc;
