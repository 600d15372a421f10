use axum::http::{HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use room_api_server::routes::create_router;
use room_api_server::shared::config::AppConfig;
use room_api_server::shared::database::Database;
use room_api_server::shared::services::AppState;

// Import models for OpenAPI schema
use room_api_server::domains::auth::models::*;
use room_api_server::domains::room::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        room_api_server::domains::auth::handlers::auth_handler::signup,
        room_api_server::domains::auth::handlers::auth_handler::signin,
        room_api_server::domains::auth::handlers::auth_handler::refresh,
        room_api_server::domains::room::handlers::room_handler::register_room,
        room_api_server::domains::room::handlers::room_handler::delete_room,
        room_api_server::domains::room::handlers::room_handler::update_room,
        room_api_server::domains::room::handlers::room_handler::find_my_room,
        room_api_server::domains::room::handlers::room_handler::find_my_rooms,
        room_api_server::domains::room::handlers::room_handler::search_rooms
    ),
    components(schemas(
        SignupRequest,
        SignupResponse,
        SigninRequest,
        TokenResponse,
        RefreshTokenRequest,
        RoomRegistrationRequest,
        RoomUpdateRequest,
        RoomResponse,
        DealRegistrationRequest,
        DealUpdateRequest,
        DealResponse,
        RoomType,
        DealType
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Auth", description = "Authentication API endpoints"),
        (name = "Rooms", description = "Room listing API endpoints")
    ),
    info(
        title = "Room API Server",
        description = "API server for room rental listings",
        version = "1.0.0"
    )
)]
struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() {
    // .env 로드 및 로깅 초기화
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "room_api_server=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env();

    // DB 연결
    let db = Database::new(&config.database_url)
        .await
        .expect("Failed to connect to database");

    db.initialize()
        .await
        .expect("Failed to initialize database");

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(db, &config.security);

    // CORS 설정
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:3003".parse::<HeaderValue>().unwrap())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true);

    // Router 생성
    let app = Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/api").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(app_state);

    // 서버 시작
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server port");

    tracing::info!("Server running on http://localhost:{}", config.server_port);
    tracing::info!(
        "Swagger UI available at http://localhost:{}/api",
        config.server_port
    );

    // 서버 실행
    axum::serve(listener, app).await.expect("Server error");
}
