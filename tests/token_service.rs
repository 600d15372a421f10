// =====================================================
// 토큰 서비스 통합 테스트
// =====================================================

use room_api_server::domains::auth::services::JwtService;
use room_api_server::shared::config::SecurityConfig;

const ACCESS_TTL_MS: i64 = 30 * 60 * 1000;
const REFRESH_TTL_MS: i64 = 14 * 24 * 60 * 60 * 1000;

fn test_config() -> SecurityConfig {
    SecurityConfig {
        jwt_secret: "integration-test-secret".to_string(),
        access_token_expiration_ms: ACCESS_TTL_MS,
        refresh_token_expiration_ms: REFRESH_TTL_MS,
    }
}

/// 테스트: 발급 직후 검증하면 원래 subject가 돌아온다
#[test]
fn issued_tokens_verify_to_their_subject() {
    let jwt = JwtService::new(&test_config());

    let access = jwt.issue_access_token("user@example.com").unwrap();
    let refresh = jwt.issue_refresh_token("user@example.com").unwrap();

    assert_eq!(jwt.verify(&access), Some("user@example.com".to_string()));
    assert_eq!(jwt.verify(&refresh), Some("user@example.com".to_string()));
}

/// 테스트: 다른 비밀키로 서명된 토큰은 거부된다
#[test]
fn foreign_signature_never_verifies() {
    let jwt = JwtService::new(&test_config());
    let other = JwtService::new(&SecurityConfig {
        jwt_secret: "a-different-secret".to_string(),
        ..test_config()
    });

    let token = other.issue_access_token("user@example.com").unwrap();

    assert_eq!(jwt.verify(&token), None);
    assert!(jwt.extract_subject(&token).is_err());
}

/// 테스트: 서명 바이트가 변조된 토큰은 어느 경로로도 통과하지 못한다
#[test]
fn tampered_token_is_rejected_everywhere() {
    let jwt = JwtService::new(&test_config());

    let mut token = jwt.issue_access_token("user@example.com").unwrap();
    // 서명 끝부분을 변조
    token.truncate(token.len() - 2);
    token.push_str("xx");

    assert_eq!(jwt.verify(&token), None);
    assert!(jwt.extract_subject(&token).is_err());
}

/// 테스트: TTL이 0이면 exp == iat 이고, 만료 비교는 now >= exp 이므로
/// 발급 즉시 무효다
#[test]
fn zero_ttl_token_is_already_expired() {
    let jwt = JwtService::new(&SecurityConfig {
        access_token_expiration_ms: 0,
        ..test_config()
    });

    let token = jwt.issue_access_token("user@example.com").unwrap();

    assert_eq!(jwt.verify(&token), None);
}

/// 테스트: 만료된 토큰이라도 서명이 맞으면 subject는 추출할 수 있다
/// (refresh 흐름이 저장된 토큰과 비교하기 위해 사용)
#[test]
fn extract_subject_ignores_expiry() {
    let jwt = JwtService::new(&SecurityConfig {
        refresh_token_expiration_ms: 0,
        ..test_config()
    });

    let token = jwt.issue_refresh_token("user@example.com").unwrap();

    assert_eq!(jwt.verify(&token), None);
    assert_eq!(jwt.extract_subject(&token).unwrap(), "user@example.com");
}

/// 테스트: garbage 입력은 조용히 무효 처리된다 (패닉 없음)
#[test]
fn malformed_input_is_just_invalid() {
    let jwt = JwtService::new(&test_config());

    assert_eq!(jwt.verify(""), None);
    assert_eq!(jwt.verify("not-a-jwt"), None);
    assert_eq!(jwt.verify("a.b.c"), None);
    assert!(jwt.extract_subject("not-a-jwt").is_err());
}
