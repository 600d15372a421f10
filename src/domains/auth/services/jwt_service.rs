// src/domains/auth/services/jwt_service.rs
use crate::domains::auth::models::jwt::Claims;
use crate::shared::config::SecurityConfig;
use crate::shared::errors::ApiError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

/// JWT 서비스
/// JWT Service for token generation and verification
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiration_ms: i64,
    refresh_token_expiration_ms: i64,
}

impl JwtService {
    /// JWT Service 생성
    /// Create JWT Service
    pub fn new(config: &SecurityConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

        Self {
            encoding_key,
            decoding_key,
            access_token_expiration_ms: config.access_token_expiration_ms,
            refresh_token_expiration_ms: config.refresh_token_expiration_ms,
        }
    }

    /// Access Token 발급 (짧은 수명)
    /// Generate Access Token (short lifetime)
    pub fn issue_access_token(&self, email: &str) -> Result<String, ApiError> {
        self.issue(email, self.access_token_expiration_ms)
    }

    /// Refresh Token 발급 (긴 수명, 회원 레코드에 저장됨)
    /// Generate Refresh Token (long lifetime, stored on the member record)
    pub fn issue_refresh_token(&self, email: &str) -> Result<String, ApiError> {
        self.issue(email, self.refresh_token_expiration_ms)
    }

    fn issue(&self, email: &str, ttl_ms: i64) -> Result<String, ApiError> {
        let claims = Claims::new(email.to_string(), ttl_ms);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(format!("Failed to generate token: {}", e)))
    }

    /// 토큰 검증. 서명과 만료를 모두 확인하고, 유효하면 subject(이메일)를 반환
    /// Verify signature and expiry. A token whose `exp` equals the current
    /// second is already invalid.
    pub fn verify(&self, token: &str) -> Option<String> {
        // jsonwebtoken의 기본 만료 검사는 60초 leeway를 두므로
        // 만료는 직접 비교한다
        let mut validation = Validation::default();
        validation.validate_exp = false;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).ok()?;

        let now = chrono::Utc::now().timestamp();
        if now >= token_data.claims.exp {
            return None;
        }

        Some(token_data.claims.sub)
    }

    /// 서명만 검증하고 subject(이메일)를 추출. 만료 여부는 무시한다
    /// Extract the subject after checking the signature only, ignoring expiry
    pub fn extract_subject(&self, token: &str) -> Result<String, ApiError> {
        let mut validation = Validation::default();
        validation.validate_exp = false;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| ApiError::Unauthenticated)?;

        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(access_ms: i64, refresh_ms: i64) -> JwtService {
        JwtService::new(&SecurityConfig {
            jwt_secret: "test-secret".to_string(),
            access_token_expiration_ms: access_ms,
            refresh_token_expiration_ms: refresh_ms,
        })
    }

    #[test]
    fn issued_token_verifies_to_its_subject() {
        let jwt = service(60_000, 120_000);

        let token = jwt.issue_access_token("user@example.com").unwrap();

        assert_eq!(jwt.verify(&token), Some("user@example.com".to_string()));
    }

    #[test]
    fn tampered_token_fails_verification() {
        let jwt = service(60_000, 120_000);

        let mut token = jwt.issue_access_token("user@example.com").unwrap();
        token.push('x');

        assert_eq!(jwt.verify(&token), None);
        assert!(jwt.extract_subject(&token).is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let jwt = service(60_000, 120_000);
        let other = JwtService::new(&SecurityConfig {
            jwt_secret: "another-secret".to_string(),
            access_token_expiration_ms: 60_000,
            refresh_token_expiration_ms: 120_000,
        });

        let token = other.issue_access_token("user@example.com").unwrap();

        assert_eq!(jwt.verify(&token), None);
    }

    #[test]
    fn expired_token_fails_verify_but_still_yields_subject() {
        // TTL 0ms: exp == iat, 이므로 now >= exp
        let jwt = service(0, 0);

        let token = jwt.issue_refresh_token("user@example.com").unwrap();

        assert_eq!(jwt.verify(&token), None);
        assert_eq!(
            jwt.extract_subject(&token).unwrap(),
            "user@example.com".to_string()
        );
    }
}
