use crate::domains::auth::models::{
    Member, RefreshTokenRequest, SigninRequest, SignupRequest, TokenResponse,
};
use crate::domains::auth::services::JwtService;
use crate::shared::database::{Database, MemberRepository};
use crate::shared::errors::ApiError;
use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// 토큰 종류 (응답에 항상 "Bearer"로 내려감)
pub const TOKEN_KIND: &str = "Bearer";

// 인증 서비스
// AuthService: handles authentication business logic
#[derive(Clone)]
pub struct AuthService {
    db: Database,
    jwt_service: JwtService,
}

impl AuthService {
    // 생성자
    pub fn new(db: Database, jwt_service: JwtService) -> Self {
        Self { db, jwt_service }
    }

    // 회원가입 (비즈니스 로직)
    pub async fn signup(&self, request: SignupRequest) -> Result<Member, ApiError> {
        // Repository 생성 (Service 내부에서)
        let member_repo = MemberRepository::new(self.db.pool().clone());

        // 1. 이메일 중복 확인
        let existing = member_repo
            .get_member_by_email(&request.email)
            .await
            .map_err(|e| {
                ApiError::DatabaseError(format!("Failed to check email existence: {}", e))
            })?;

        if existing.is_some() {
            return Err(ApiError::DuplicateIdentity {
                email: request.email,
            });
        }

        // 2. 비밀번호 해싱
        let password_hash = Self::hash_password(&request.password)?;

        // 3. 회원 생성
        let member = member_repo
            .create_member(&request.email, &password_hash, &request.name)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to create member: {}", e)))?;

        Ok(member)
    }

    // 로그인 (비즈니스 로직)
    // 이메일 없음과 비밀번호 불일치는 같은 에러로 응답한다 (계정 존재 여부 노출 방지)
    pub async fn signin(&self, request: SigninRequest) -> Result<TokenResponse, ApiError> {
        let member_repo = MemberRepository::new(self.db.pool().clone());

        // 1. 이메일로 회원 조회
        let member = member_repo
            .get_member_by_email(&request.email)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch member: {}", e)))?
            .ok_or(ApiError::Unauthenticated)?;

        // 2. 비밀번호 검증
        Self::verify_password(&request.password, &member.password_hash)?;

        // 3. 토큰 발급
        let access_token = self.jwt_service.issue_access_token(&member.email)?;
        let refresh_token = self.jwt_service.issue_refresh_token(&member.email)?;

        // 4. Refresh Token 저장 (기존 토큰은 덮어써서 암묵적으로 무효화)
        member_repo
            .update_refresh_token(member.id, &refresh_token)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to store refresh token: {}", e)))?;

        Ok(TokenResponse {
            access_token,
            refresh_token,
            token_kind: TOKEN_KIND.to_string(),
        })
    }

    /// Refresh Token 검증 및 새 Access Token 발급
    /// 서명 확인 후 subject를 꺼내고, 회원 레코드에 저장된 토큰과의 일치가
    /// 최종 권한 판정이다. Refresh Token 자체는 회전하지 않는다.
    pub async fn refresh(&self, request: RefreshTokenRequest) -> Result<TokenResponse, ApiError> {
        // 1. 토큰에서 subject(이메일) 추출 (아직 신뢰하지 않음)
        let email = self.jwt_service.extract_subject(&request.refresh_token)?;

        // 2. 회원 조회
        let member_repo = MemberRepository::new(self.db.pool().clone());
        let member = member_repo
            .get_member_by_email(&email)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch member: {}", e)))?
            .ok_or(ApiError::Unauthenticated)?;

        // 3. 저장된 Refresh Token과 비교 (서명이 유효해도 저장된 값과 다르면 거부)
        match member.refresh_token.as_deref() {
            Some(stored) if stored == request.refresh_token => {}
            _ => return Err(ApiError::Unauthenticated),
        }

        // 4. 새 Access Token 발급, Refresh Token은 그대로 반환
        let access_token = self.jwt_service.issue_access_token(&member.email)?;

        Ok(TokenResponse {
            access_token,
            refresh_token: request.refresh_token,
            token_kind: TOKEN_KIND.to_string(),
        })
    }

    fn hash_password(password: &str) -> Result<String, ApiError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))?
            .to_string();

        Ok(password_hash)
    }

    fn verify_password(password: &str, password_hash: &str) -> Result<(), ApiError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|e| ApiError::Internal(format!("Invalid password hash: {}", e)))?;

        let argon2 = Argon2::default();

        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| ApiError::Unauthenticated)?;

        Ok(())
    }
}
