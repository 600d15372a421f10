use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// 서비스 공통 에러
/// Error taxonomy shared by every domain. Each variant maps to exactly one
/// stable error code so clients can branch on `code` rather than `message`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// 이메일이 이미 존재함
    /// Email already registered
    #[error("Email already registered: {email}")]
    DuplicateIdentity { email: String },

    /// 인증 실패 (잘못된 자격 증명 또는 토큰)
    /// Bad credentials, bad/expired/stale token
    #[error("Authentication failed")]
    Unauthenticated,

    /// 권한 없음 (인증은 되었으나 소유자가 아님)
    /// Authenticated but not the owner
    #[error("Access denied")]
    Forbidden,

    /// 대상을 찾을 수 없음
    /// Missing entity, or entity hidden via ownership
    #[error("{0}")]
    NotFound(String),

    /// 잘못된 요청
    /// Empty or malformed payload
    #[error("{0}")]
    InvalidRequest(String),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// 안정적인 에러 코드 (클라이언트 분기용)
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::DuplicateIdentity { .. } => "DUPLICATE_IDENTITY",
            ApiError::Unauthenticated => "UNAUTHENTICATED",
            ApiError::Forbidden => "FORBIDDEN",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InvalidRequest(_) => "INVALID_REQUEST",
            ApiError::DatabaseError(_) | ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::DuplicateIdentity { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::DatabaseError(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// ApiError를 HTTP 응답으로 변환
impl From<ApiError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: ApiError) -> Self {
        let status = err.status_code();
        let body = json!({
            "code": err.code(),
            "message": err.to_string(),
        });
        (status, Json(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_one_stable_code() {
        assert_eq!(
            ApiError::DuplicateIdentity { email: "a@b.c".into() }.code(),
            "DUPLICATE_IDENTITY"
        );
        assert_eq!(ApiError::Unauthenticated.code(), "UNAUTHENTICATED");
        assert_eq!(ApiError::Forbidden.code(), "FORBIDDEN");
        assert_eq!(ApiError::NotFound("room".into()).code(), "NOT_FOUND");
        assert_eq!(ApiError::InvalidRequest("empty".into()).code(), "INVALID_REQUEST");
        // 내부 오류는 근본 원인과 무관하게 하나의 코드로 수렴
        assert_eq!(ApiError::DatabaseError("x".into()).code(), "INTERNAL_ERROR");
        assert_eq!(ApiError::Internal("y".into()).code(), "INTERNAL_ERROR");
    }

    #[test]
    fn http_status_follows_the_code() {
        assert_eq!(
            ApiError::DuplicateIdentity { email: "a@b.c".into() }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthenticated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InvalidRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_body_carries_code_and_message() {
        let (status, Json(body)) =
            ApiError::NotFound("Room not found: id=3".into()).into();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["message"], "Room not found: id=3");
    }
}
