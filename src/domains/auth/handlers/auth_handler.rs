use crate::domains::auth::models::{
    RefreshTokenRequest, SigninRequest, SignupRequest, SignupResponse, TokenResponse,
};
use crate::shared::errors::ApiError;
use crate::shared::services::AppState;
use axum::{extract::State, http::StatusCode, Json};

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Member created successfully", body = SignupResponse),
        (status = 400, description = "Bad request (email already exists)"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn signup(
    State(app_state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), (StatusCode, Json<serde_json::Value>)> {
    // Service 호출 (비즈니스 로직)
    let member = app_state
        .auth_state
        .auth_service
        .signup(request)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            id: member.id,
            email: member.email,
            name: member.name,
        }),
    ))
}

// 로그인 핸들러
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Signin successful", body = TokenResponse),
        (status = 401, description = "Invalid email or password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn signin(
    State(app_state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<TokenResponse>, (StatusCode, Json<serde_json::Value>)> {
    let tokens = app_state
        .auth_state
        .auth_service
        .signin(request)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(tokens))
}

/// 토큰 갱신 핸들러
/// Refresh token handler
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Token refreshed successfully", body = TokenResponse),
        (status = 401, description = "Invalid refresh token"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn refresh(
    State(app_state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> Result<Json<TokenResponse>, (StatusCode, Json<serde_json::Value>)> {
    let tokens = app_state
        .auth_state
        .auth_service
        .refresh(request)
        .await
        .map_err(|e: ApiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(tokens))
}
