use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// 회원 모델 (DB 저장용)
/// Member model. `refresh_token` holds the single currently-valid refresh
/// token, overwritten on every signin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
