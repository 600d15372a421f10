use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 거래 유형 (DB에는 변형 이름 문자열로 저장)
// Deal category, stored as its variant name string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealType {
    MonthlyRent,
    YearRent,
}

impl DealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealType::MonthlyRent => "MONTHLY_RENT",
            DealType::YearRent => "YEAR_RENT",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "MONTHLY_RENT" => Some(DealType::MonthlyRent),
            "YEAR_RENT" => Some(DealType::YearRent),
            _ => None,
        }
    }
}

/// 거래 조건 모델 (DB 저장용)
/// Deal model. `monthly_rent` is null for YEAR_RENT terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: i64,
    pub deal_type: DealType,
    pub deposit: Decimal,
    pub monthly_rent: Option<Decimal>,
    pub room_id: i64,
}

/// 저장 전의 거래 조건 (아직 id가 없음)
/// A deal term about to be persisted, before an id is assigned
#[derive(Debug, Clone)]
pub struct NewDeal {
    pub deal_type: DealType,
    pub deposit: Decimal,
    pub monthly_rent: Option<Decimal>,
}

// 거래 조건 등록 요청 모델 (등록/수정 공용 형태)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = DealRegistrationRequest)]
pub struct DealRegistrationRequest {
    /// Deal category
    /// 거래 유형
    pub deal_type: DealType,

    /// Deposit amount
    /// 보증금
    #[schema(example = "20000000")]
    pub deposit: Decimal,

    /// Monthly rent, absent for YEAR_RENT
    /// 월세 (전세는 비움)
    pub monthly_rent: Option<Decimal>,
}

// 거래 조건 수정 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = DealUpdateRequest)]
pub struct DealUpdateRequest {
    pub deal_type: DealType,
    pub deposit: Decimal,
    pub monthly_rent: Option<Decimal>,
}

// 거래 조건 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = DealResponse)]
pub struct DealResponse {
    pub deal_type: DealType,
    pub deposit: Decimal,
    pub monthly_rent: Option<Decimal>,
}

impl From<DealRegistrationRequest> for NewDeal {
    fn from(request: DealRegistrationRequest) -> Self {
        Self {
            deal_type: request.deal_type,
            deposit: request.deposit,
            monthly_rent: request.monthly_rent,
        }
    }
}

impl From<DealUpdateRequest> for NewDeal {
    fn from(request: DealUpdateRequest) -> Self {
        Self {
            deal_type: request.deal_type,
            deposit: request.deposit,
            monthly_rent: request.monthly_rent,
        }
    }
}

impl From<Deal> for DealResponse {
    fn from(deal: Deal) -> Self {
        Self {
            deal_type: deal.deal_type,
            deposit: deal.deposit,
            monthly_rent: deal.monthly_rent,
        }
    }
}
