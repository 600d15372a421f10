use crate::domains::room::models::{
    RoomRegistrationRequest, RoomResponse, RoomSearchParams, RoomUpdateRequest,
};
use crate::shared::errors::ApiError;
use crate::shared::middleware::auth::AuthenticatedMember;
use crate::shared::services::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

// 방 등록 핸들러
#[utoipa::path(
    post,
    path = "/api/rooms",
    request_body = RoomRegistrationRequest,
    responses(
        (status = 200, description = "Room registered successfully", body = RoomResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "Rooms"
)]
pub async fn register_room(
    State(app_state): State<AppState>,
    member: AuthenticatedMember,
    Json(request): Json<RoomRegistrationRequest>,
) -> Result<Json<RoomResponse>, (StatusCode, Json<serde_json::Value>)> {
    // Service 호출 (비즈니스 로직)
    let room = app_state
        .room_state
        .room_service
        .register(member.member_id, request)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(room))
}

/// 방 삭제 핸들러
/// Delete room handler
#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    params(("id" = i64, Path, description = "Room id")),
    responses(
        (status = 204, description = "Room deleted successfully"),
        (status = 403, description = "Not the owner of the room"),
        (status = 404, description = "Room not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Rooms"
)]
pub async fn delete_room(
    State(app_state): State<AppState>,
    member: AuthenticatedMember,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .room_state
        .room_service
        .delete_my_room(member.member_id, id)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(StatusCode::NO_CONTENT)
}

/// 방 수정 핸들러 (부분 수정)
/// Partial room update handler
#[utoipa::path(
    patch,
    path = "/api/rooms/{id}",
    params(("id" = i64, Path, description = "Room id")),
    request_body = RoomUpdateRequest,
    responses(
        (status = 200, description = "Room updated successfully", body = RoomResponse),
        (status = 400, description = "Empty update payload"),
        (status = 403, description = "Not the owner of the room"),
        (status = 404, description = "Room not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Rooms"
)]
pub async fn update_room(
    State(app_state): State<AppState>,
    member: AuthenticatedMember,
    Path(id): Path<i64>,
    Json(request): Json<RoomUpdateRequest>,
) -> Result<Json<RoomResponse>, (StatusCode, Json<serde_json::Value>)> {
    let room = app_state
        .room_state
        .room_service
        .update_my_room(member.member_id, id, request)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(room))
}

/// 내 방 단건 조회 핸들러
/// Find one of my rooms
#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    params(("id" = i64, Path, description = "Room id")),
    responses(
        (status = 200, description = "Room retrieved successfully", body = RoomResponse),
        (status = 404, description = "Room not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Rooms"
)]
pub async fn find_my_room(
    State(app_state): State<AppState>,
    member: AuthenticatedMember,
    Path(id): Path<i64>,
) -> Result<Json<RoomResponse>, (StatusCode, Json<serde_json::Value>)> {
    let room = app_state
        .room_state
        .room_service
        .find_my_room(member.member_id, id)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(room))
}

/// 내 방 목록 조회 핸들러
/// List my rooms
#[utoipa::path(
    get,
    path = "/api/rooms/my",
    responses(
        (status = 200, description = "My rooms retrieved successfully", body = [RoomResponse]),
        (status = 401, description = "Unauthorized")
    ),
    security(("BearerAuth" = [])),
    tag = "Rooms"
)]
pub async fn find_my_rooms(
    State(app_state): State<AppState>,
    member: AuthenticatedMember,
) -> Result<Json<Vec<RoomResponse>>, (StatusCode, Json<serde_json::Value>)> {
    let rooms = app_state
        .room_state
        .room_service
        .find_my_rooms(member.member_id)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(rooms))
}

// 전체 방 검색 핸들러 (인증 불필요)
#[utoipa::path(
    get,
    path = "/api/rooms",
    params(RoomSearchParams),
    responses(
        (status = 200, description = "Rooms retrieved successfully", body = [RoomResponse]),
        (status = 400, description = "Invalid search criteria")
    ),
    tag = "Rooms"
)]
pub async fn search_rooms(
    State(app_state): State<AppState>,
    Query(params): Query<RoomSearchParams>,
) -> Result<Json<Vec<RoomResponse>>, (StatusCode, Json<serde_json::Value>)> {
    // 1. 파라미터 검증 및 정규화
    let criteria = params
        .into_criteria()
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    // 2. 검색 실행
    let rooms = app_state
        .room_state
        .room_service
        .search(&criteria)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(rooms))
}
