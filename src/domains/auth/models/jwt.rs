use serde::{Deserialize, Serialize};

/// JWT Claims (토큰에 포함될 데이터)
/// JWT Claims (data to be included in token)
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// 토큰 주체 (회원 이메일)
    /// Subject (member email)
    pub sub: String,

    /// 발급 시간 (Unix timestamp)
    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// 만료 시간 (Unix timestamp)
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// 새 Claims 생성 (만료 시간 자동 계산)
    /// Create new Claims. TTL is configured in milliseconds; the standard
    /// `exp`/`iat` claims are whole seconds.
    pub fn new(subject: String, ttl_ms: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        let exp = now + ttl_ms / 1000;

        Self {
            sub: subject,
            iat: now,
            exp,
        }
    }
}
