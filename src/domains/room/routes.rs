// Room domain routes
// 방 도메인 라우터
use crate::domains::room::handlers::room_handler;
use crate::shared::services::AppState;
use axum::{
    routing::{delete, get},
    Router,
};

/// Create room router
/// 방 라우터 생성
pub fn create_room_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(room_handler::search_rooms).post(room_handler::register_room),
        )
        .route("/my", get(room_handler::find_my_rooms))
        .route(
            "/:id",
            delete(room_handler::delete_room)
                .patch(room_handler::update_room)
                .get(room_handler::find_my_room),
        )
}
