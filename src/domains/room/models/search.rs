use crate::domains::room::models::deal::DealType;
use crate::domains::room::models::room::RoomType;
use crate::shared::errors::ApiError;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::IntoParams;

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// 검색 쿼리 파라미터 (HTTP 레이어 형태)
/// Raw search query parameters. The set-valued filters arrive as
/// comma-separated lists.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RoomSearchParams {
    /// Comma-separated room categories, e.g. "ONE_ROOM,TWO_ROOM"
    pub room_types: Option<String>,
    /// Comma-separated deal categories, e.g. "MONTHLY_RENT"
    pub deal_types: Option<String>,
    pub min_deposit: Option<Decimal>,
    pub max_deposit: Option<Decimal>,
    pub min_monthly_rent: Option<Decimal>,
    pub max_monthly_rent: Option<Decimal>,
    /// Page index, 0-based
    pub page: Option<i64>,
    /// Page size, 1..=100
    pub size: Option<i64>,
}

/// 정규화된 검색 조건 (쿼리 빌더 입력)
/// Normalized search criteria consumed by the query builder
#[derive(Debug, Clone, Default)]
pub struct RoomSearchCriteria {
    pub room_types: Option<Vec<RoomType>>,
    pub deal_types: Option<Vec<DealType>>,
    pub min_deposit: Option<Decimal>,
    pub max_deposit: Option<Decimal>,
    pub min_monthly_rent: Option<Decimal>,
    pub max_monthly_rent: Option<Decimal>,
    pub page: i64,
    pub size: i64,
}

impl RoomSearchParams {
    /// 파라미터 검증 및 정규화
    /// 빈 목록 파라미터는 "조건 없음"으로 취급한다
    pub fn into_criteria(self) -> Result<RoomSearchCriteria, ApiError> {
        let room_types = match self.room_types.as_deref() {
            Some(raw) => parse_list(raw, RoomType::from_name, "roomTypes")?,
            None => None,
        };
        let deal_types = match self.deal_types.as_deref() {
            Some(raw) => parse_list(raw, DealType::from_name, "dealTypes")?,
            None => None,
        };

        for (name, bound) in [
            ("minDeposit", self.min_deposit),
            ("maxDeposit", self.max_deposit),
            ("minMonthlyRent", self.min_monthly_rent),
            ("maxMonthlyRent", self.max_monthly_rent),
        ] {
            if let Some(value) = bound {
                if value.is_sign_negative() {
                    return Err(ApiError::InvalidRequest(format!(
                        "{} must not be negative",
                        name
                    )));
                }
            }
        }

        let page = self.page.unwrap_or(0);
        if page < 0 {
            return Err(ApiError::InvalidRequest(
                "page must be 0 or greater".to_string(),
            ));
        }

        let size = self.size.unwrap_or(DEFAULT_PAGE_SIZE);
        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            return Err(ApiError::InvalidRequest(format!(
                "size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        Ok(RoomSearchCriteria {
            room_types,
            deal_types,
            min_deposit: self.min_deposit,
            max_deposit: self.max_deposit,
            min_monthly_rent: self.min_monthly_rent,
            max_monthly_rent: self.max_monthly_rent,
            page,
            size,
        })
    }
}

fn parse_list<T>(
    raw: &str,
    parse: fn(&str) -> Option<T>,
    name: &str,
) -> Result<Option<Vec<T>>, ApiError> {
    let values: Vec<T> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            parse(s).ok_or_else(|| {
                ApiError::InvalidRequest(format!("Unknown {} value: {}", name, s))
            })
        })
        .collect::<Result<_, _>>()?;

    if values.is_empty() {
        Ok(None)
    } else {
        Ok(Some(values))
    }
}
