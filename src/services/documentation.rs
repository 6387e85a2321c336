use utoipa::OpenApi;

/// Aggregated OpenAPI specification for the Mesa & Dados backend.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mesa & Dados API",
        description = "Board-game catalog: public browsing plus admin CRUD and file uploads"
    ),
    paths(
        crate::routes::health::healthcheck,
        crate::routes::auth::login,
        crate::routes::games::list_games,
        crate::routes::games::get_game,
        crate::routes::games::create_game,
        crate::routes::games::update_game,
        crate::routes::games::delete_game,
        crate::routes::games::upload_image,
        crate::routes::games::upload_rules,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::auth::LoginRequest,
            crate::dto::auth::LoginResponse,
            crate::dto::game::GamePayload,
            crate::dto::game::GameResponse,
            crate::dto::upload::UploadResponse,
        )
    ),
    tags(
        (name = "games", description = "Public catalog and admin CRUD endpoints"),
        (name = "auth", description = "Admin login"),
        (name = "health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
