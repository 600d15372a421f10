use crate::shared::database::MemberRepository;
use crate::shared::errors::ApiError;
use crate::shared::services::AppState;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

/// 인증된 회원 정보 (JWT 토큰에서 추출)
/// Authenticated member identity (extracted from the bearer token)
///
/// 사용법:
/// ```rust,ignore
/// pub async fn register_room(
///     State(app_state): State<AppState>,
///     member: AuthenticatedMember,  // <- 이렇게 사용!
/// ) -> Result<...> {
///     let owner_id = member.member_id;
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedMember {
    pub member_id: i64,
    pub email: String,
}

impl AuthenticatedMember {
    async fn resolve(parts: &Parts, state: &AppState) -> Result<Self, ApiError> {
        // 1. Authorization 헤더에서 "Bearer <token>" 추출
        // 헤더가 없거나 형식이 다르면 익명 요청이고, 이 extractor를
        // 쓰는 핸들러에서는 익명이 곧 거부다
        let token = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(ApiError::Unauthenticated)?;

        // 2. 서명/만료 검증 후 subject(이메일) 획득
        let email = state
            .auth_state
            .jwt_service
            .verify(token)
            .ok_or(ApiError::Unauthenticated)?;

        // 3. 이메일을 회원 레코드로 해석
        // 유효한 토큰이 사라진 회원을 가리키면 익명과 구분해 기록한다
        let member_repo = MemberRepository::new(state.db.pool().clone());
        let member = member_repo
            .get_member_by_email(&email)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to resolve member: {}", e)))?
            .ok_or_else(|| {
                tracing::warn!(email = %email, "Valid token for a member that no longer exists");
                ApiError::Unauthenticated
            })?;

        Ok(AuthenticatedMember {
            member_id: member.id,
            email: member.email,
        })
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedMember {
    type Rejection = (StatusCode, axum::Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::resolve(parts, state).await.map_err(Into::into)
    }
}
