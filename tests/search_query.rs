// =====================================================
// 검색 쿼리 빌더 통합 테스트
// =====================================================

use room_api_server::domains::room::models::{DealType, RoomSearchParams, RoomType};
use room_api_server::shared::database::build_search_query;
use rust_decimal::Decimal;

fn params_with_everything() -> RoomSearchParams {
    RoomSearchParams {
        room_types: Some("ONE_ROOM,TWO_ROOM".to_string()),
        deal_types: Some("MONTHLY_RENT".to_string()),
        min_deposit: Some(Decimal::from(10_000_000i64)),
        max_deposit: Some(Decimal::from(400_000_000i64)),
        min_monthly_rent: Some(Decimal::from(200_000)),
        max_monthly_rent: Some(Decimal::from(2_500_000)),
        page: Some(1),
        size: Some(50),
    }
}

/// 테스트: 파라미터 → 조건 → SQL 전체 경로에서 모든 조건이
/// 고정 순서로 바인딩된다
#[test]
fn every_criterion_binds_in_fixed_order() {
    let criteria = params_with_everything().into_criteria().unwrap();
    let query = build_search_query(&criteria);
    let sql = query.sql();

    assert!(sql.contains("AND r.room_type IN ($1, $2)"));
    assert!(sql.contains("AND d.deal_type IN ($3)"));
    assert!(sql.contains("AND d.deposit >= $4"));
    assert!(sql.contains("AND d.deposit <= $5"));
    assert!(sql.contains("AND d.monthly_rent >= $6"));
    assert!(sql.contains("AND d.monthly_rent <= $7"));
    assert!(sql.ends_with("LIMIT $8 OFFSET $9"));
}

/// 테스트: 조건이 없으면 술어 없이 정렬과 페이징만 남는다
#[test]
fn no_criteria_means_no_predicates() {
    let criteria = RoomSearchParams::default().into_criteria().unwrap();
    let query = build_search_query(&criteria);
    let sql = query.sql();

    assert!(sql.contains("WHERE 1=1 ORDER BY r.created_at DESC"));
    assert!(sql.ends_with("LIMIT $1 OFFSET $2"));
}

/// 테스트: 한 방이 여러 조건에 맞아도 중복 없이 나오도록 DISTINCT,
/// 거래 조건이 없는 방은 검색에 나오지 않도록 INNER JOIN
#[test]
fn query_shape_dedups_and_requires_deals() {
    let criteria = RoomSearchParams::default().into_criteria().unwrap();
    let query = build_search_query(&criteria);
    let sql = query.sql();

    assert!(sql.starts_with("SELECT DISTINCT"));
    assert!(sql.contains("INNER JOIN deals d ON r.id = d.room_id"));
    assert!(sql.contains("ORDER BY r.created_at DESC"));
}

/// 테스트: 정규화가 타입 이름을 enum으로 해석한다
#[test]
fn criteria_normalization_resolves_type_names() {
    let criteria = params_with_everything().into_criteria().unwrap();

    assert_eq!(
        criteria.room_types,
        Some(vec![RoomType::OneRoom, RoomType::TwoRoom])
    );
    assert_eq!(criteria.deal_types, Some(vec![DealType::MonthlyRent]));
    assert_eq!(criteria.page, 1);
    assert_eq!(criteria.size, 50);
}

/// 테스트: 잘못된 페이징/알 수 없는 타입 이름은 빌더에 도달하기 전에 거부된다
#[test]
fn invalid_parameters_never_reach_the_builder() {
    let unknown_type = RoomSearchParams {
        deal_types: Some("SALE".to_string()),
        ..Default::default()
    };
    assert!(unknown_type.into_criteria().is_err());

    let bad_page = RoomSearchParams {
        page: Some(-3),
        ..Default::default()
    };
    assert!(bad_page.into_criteria().is_err());

    let bad_size = RoomSearchParams {
        size: Some(500),
        ..Default::default()
    };
    assert!(bad_size.into_criteria().is_err());
}
