use crate::domains::room::models::deal::{
    Deal, DealRegistrationRequest, DealResponse, DealUpdateRequest,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 방 유형 (DB에는 변형 이름 문자열로 저장)
// Room category, stored as its variant name string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    OneRoom,
    TwoRoom,
    ThreeRoom,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::OneRoom => "ONE_ROOM",
            RoomType::TwoRoom => "TWO_ROOM",
            RoomType::ThreeRoom => "THREE_ROOM",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ONE_ROOM" => Some(RoomType::OneRoom),
            "TWO_ROOM" => Some(RoomType::TwoRoom),
            "THREE_ROOM" => Some(RoomType::ThreeRoom),
            _ => None,
        }
    }
}

/// 방 모델 (DB 저장용)
/// Room model. Ownership is fixed at registration, `owner_id` never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub address: String,
    pub area: Option<f64>,
    pub room_type: RoomType,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 방 등록 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = RoomRegistrationRequest)]
pub struct RoomRegistrationRequest {
    /// Listing title
    /// 매물 제목
    #[schema(example = "역세권 신축 원룸")]
    pub title: String,

    /// Description
    /// 상세 설명
    pub description: Option<String>,

    /// Address
    /// 주소
    #[schema(example = "서울시 관악구")]
    pub address: String,

    /// Area in square meters
    /// 전용 면적 (제곱미터)
    pub area: Option<f64>,

    /// Room category
    /// 방 유형
    pub room_type: RoomType,

    /// Deal terms for this room
    /// 이 방의 거래 조건 목록
    #[serde(default)]
    pub deals: Vec<DealRegistrationRequest>,
}

// 방 수정 요청 모델 (부분 수정, 넘어온 필드만 반영)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = RoomUpdateRequest)]
pub struct RoomUpdateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub area: Option<f64>,
    pub room_type: Option<RoomType>,

    /// 비어 있지 않으면 기존 거래 조건 전체를 교체한다
    /// A non-empty list replaces every existing deal for the room
    #[serde(default)]
    pub deals: Vec<DealUpdateRequest>,
}

impl RoomUpdateRequest {
    // 모든 필드가 비어 있는지 (빈 수정 요청은 거부됨)
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.address.is_none()
            && self.area.is_none()
            && self.room_type.is_none()
            && self.deals.is_empty()
    }
}

// 방 응답 모델 (거래 조건 포함)
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = RoomResponse)]
pub struct RoomResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub address: String,
    pub area: Option<f64>,
    pub room_type: RoomType,
    pub deals: Vec<DealResponse>,
}

impl RoomResponse {
    /// Room과 해당 Deal들을 묶어 응답 생성
    pub fn from_parts(room: Room, deals: Vec<Deal>) -> Self {
        Self {
            id: room.id,
            title: room.title,
            description: room.description,
            address: room.address,
            area: room.area,
            room_type: room.room_type,
            deals: deals.into_iter().map(DealResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_with_no_fields_is_empty() {
        let request = RoomUpdateRequest {
            title: None,
            description: None,
            address: None,
            area: None,
            room_type: None,
            deals: vec![],
        };

        assert!(request.is_empty());
    }

    #[test]
    fn update_request_with_one_field_is_not_empty() {
        let request = RoomUpdateRequest {
            title: Some("새 제목".to_string()),
            description: None,
            address: None,
            area: None,
            room_type: None,
            deals: vec![],
        };

        assert!(!request.is_empty());
    }

    #[test]
    fn room_type_round_trips_through_its_name() {
        for room_type in [RoomType::OneRoom, RoomType::TwoRoom, RoomType::ThreeRoom] {
            assert_eq!(RoomType::from_name(room_type.as_str()), Some(room_type));
        }
        assert_eq!(RoomType::from_name("FOUR_ROOM"), None);
    }
}
