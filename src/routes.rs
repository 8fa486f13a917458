use crate::{
    auth::{
        auth_dto::{LoginRequest, RegisterRequest},
        auth_handlers,
    },
    message::{message_dto::SendMessageRequest, message_handlers, message_models::Message},
    response::ApiMessage,
    state::{AppState, Config},
    system::system_handlers::{self, TimeResponse},
    user::{user_dto::UpdateProfileRequest, user_handlers, user_models::ProfileResponse},
};
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::system::system_handlers::get_time,
        crate::auth::auth_handlers::register,
        crate::auth::auth_handlers::login,
        crate::user::user_handlers::get_profile,
        crate::user::user_handlers::update_profile,
        crate::message::message_handlers::get_messages,
        crate::message::message_handlers::send_message,
    ),
    components(
        schemas(
            ApiMessage,
            TimeResponse,
            RegisterRequest,
            LoginRequest,
            UpdateProfileRequest,
            ProfileResponse,
            SendMessageRequest,
            Message,
        )
    ),
    tags(
        (name = "system", description = "Server utility endpoints"),
        (name = "auth", description = "Registration and login"),
        (name = "profile", description = "User profile endpoints"),
        (name = "messages", description = "Message store endpoints")
    )
)]
struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    let origins = if config.cors_allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(config.cors_allowed_origins.clone())
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    // Unmatched GETs fall through to the bundled frontend.
    let frontend_dir = &state.config.frontend_dir;
    let frontend = ServeDir::new(frontend_dir).fallback(ServeFile::new(frontend_dir.join("index.html")));

    let api_routes = Router::new()
        .route("/time", get(system_handlers::get_time))
        .route("/register", post(auth_handlers::register))
        .route("/login", post(auth_handlers::login))
        .route(
            "/profile/:username",
            get(user_handlers::get_profile).post(user_handlers::update_profile),
        )
        .route(
            "/messages",
            get(message_handlers::get_messages).post(message_handlers::send_message),
        );

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
