use crate::domains::room::models::{
    Deal, NewDeal, Room, RoomRegistrationRequest, RoomResponse, RoomSearchCriteria,
    RoomUpdateRequest,
};
use crate::domains::room::services::DealService;
use crate::shared::database::{Database, RoomRepository};
use crate::shared::errors::ApiError;
use std::collections::HashMap;

// 방 서비스
// RoomService: room aggregate business logic with ownership enforcement
#[derive(Clone)]
pub struct RoomService {
    db: Database,
    deal_service: DealService,
}

impl RoomService {
    pub fn new(db: Database) -> Self {
        let deal_service = DealService::new(db.clone());
        Self { db, deal_service }
    }

    // 방 등록 (방 + 거래 조건을 한 트랜잭션으로 저장)
    pub async fn register(
        &self,
        owner_id: i64,
        request: RoomRegistrationRequest,
    ) -> Result<RoomResponse, ApiError> {
        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

        // 1. 방 저장 (소유자는 현재 회원으로 고정)
        let room = RoomRepository::create_room(
            &mut tx,
            &request.title,
            request.description.as_deref(),
            &request.address,
            request.area,
            request.room_type,
            owner_id,
        )
        .await
        .map_err(|e| ApiError::DatabaseError(format!("Failed to create room: {}", e)))?;

        // 2. 거래 조건 일괄 저장 (방 id에 바인딩)
        let new_deals: Vec<NewDeal> = request.deals.into_iter().map(Into::into).collect();
        let deals = self
            .deal_service
            .register_all(&mut tx, room.id, new_deals)
            .await?;

        tx.commit()
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to commit transaction: {}", e)))?;

        Ok(RoomResponse::from_parts(room, deals))
    }

    // 내 방 삭제 (거래 조건 먼저, 방 나중에, 모두 한 트랜잭션)
    pub async fn delete_my_room(&self, member_id: i64, room_id: i64) -> Result<(), ApiError> {
        let room = self.load_room(room_id).await?;
        Self::validate_owner_or_forbidden(member_id, &room)?;

        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

        self.deal_service.delete_by_room(&mut tx, room.id).await?;
        RoomRepository::delete_room(&mut tx, room.id)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to delete room: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to commit transaction: {}", e)))?;

        Ok(())
    }

    // 내 방 수정 (부분 수정, 거래 조건은 비어 있지 않을 때만 전체 교체)
    pub async fn update_my_room(
        &self,
        member_id: i64,
        room_id: i64,
        request: RoomUpdateRequest,
    ) -> Result<RoomResponse, ApiError> {
        // 1. 빈 수정 요청은 거부
        if request.is_empty() {
            tracing::debug!("All fields are empty in the room update request");
            return Err(ApiError::InvalidRequest(
                "Nothing to update in the request".to_string(),
            ));
        }

        // 2. 조회 및 소유자 확인
        let mut room = self.load_room(room_id).await?;
        Self::validate_owner_or_forbidden(member_id, &room)?;

        // 3. 넘어온 필드만 반영
        apply_update(&mut room, &request);

        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

        RoomRepository::update_room(&mut tx, &room)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to update room: {}", e)))?;

        // 4. 거래 조건 교체 필요 여부
        let replace_deals = !request.deals.is_empty();
        let mut deals: Vec<Deal> = Vec::new();
        if replace_deals {
            // 기존 거래 조건 삭제 후 새로 저장
            self.deal_service.delete_by_room(&mut tx, room.id).await?;
            let new_deals: Vec<NewDeal> = request.deals.into_iter().map(Into::into).collect();
            deals = self
                .deal_service
                .register_all(&mut tx, room.id, new_deals)
                .await?;
        }

        tx.commit()
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to commit transaction: {}", e)))?;

        if !replace_deals {
            deals = self.deal_service.find_all_by_room_id(room.id).await?;
        }

        Ok(RoomResponse::from_parts(room, deals))
    }

    // 내 방 단건 조회
    // 남의 방은 존재 여부를 드러내지 않도록 NotFound로 응답한다
    pub async fn find_my_room(
        &self,
        member_id: i64,
        room_id: i64,
    ) -> Result<RoomResponse, ApiError> {
        let room = self.load_room(room_id).await?;
        if room.owner_id != member_id {
            return Err(ApiError::NotFound("Room not found".to_string()));
        }

        let deals = self.deal_service.find_all_by_room_id(room.id).await?;

        Ok(RoomResponse::from_parts(room, deals))
    }

    // 내 방 목록 조회
    pub async fn find_my_rooms(&self, member_id: i64) -> Result<Vec<RoomResponse>, ApiError> {
        let room_repo = RoomRepository::new(self.db.pool().clone());

        let rooms = room_repo
            .find_rooms_by_owner(member_id)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch rooms: {}", e)))?;

        self.attach_deals(rooms).await
    }

    // 전체 방 검색 (공개, 소유자 무관)
    pub async fn search(
        &self,
        criteria: &RoomSearchCriteria,
    ) -> Result<Vec<RoomResponse>, ApiError> {
        let room_repo = RoomRepository::new(self.db.pool().clone());

        let rooms = room_repo
            .search_rooms(criteria)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to search rooms: {}", e)))?;

        // 필터는 방을 고르기만 하고, 응답은 방의 전체 거래 조건을 담는다
        self.attach_deals(rooms).await
    }

    async fn load_room(&self, room_id: i64) -> Result<Room, ApiError> {
        let room_repo = RoomRepository::new(self.db.pool().clone());

        room_repo
            .find_room_by_id(room_id)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch room: {}", e)))?
            .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))
    }

    fn validate_owner_or_forbidden(member_id: i64, room: &Room) -> Result<(), ApiError> {
        if room.owner_id != member_id {
            return Err(ApiError::Forbidden);
        }
        Ok(())
    }

    // 방 목록에 거래 조건을 붙여 응답 조립 (거래 조건은 한 번의 조회로)
    async fn attach_deals(&self, rooms: Vec<Room>) -> Result<Vec<RoomResponse>, ApiError> {
        let room_ids: Vec<i64> = rooms.iter().map(|r| r.id).collect();
        let deals = self.deal_service.find_all_by_room_ids(&room_ids).await?;

        let mut deals_by_room: HashMap<i64, Vec<Deal>> = HashMap::new();
        for deal in deals {
            deals_by_room.entry(deal.room_id).or_default().push(deal);
        }

        Ok(rooms
            .into_iter()
            .map(|room| {
                let deals = deals_by_room.remove(&room.id).unwrap_or_default();
                RoomResponse::from_parts(room, deals)
            })
            .collect())
    }
}

fn apply_update(room: &mut Room, request: &RoomUpdateRequest) {
    if let Some(title) = &request.title {
        room.title = title.clone();
    }
    if let Some(description) = &request.description {
        room.description = Some(description.clone());
    }
    if let Some(address) = &request.address {
        room.address = address.clone();
    }
    if let Some(area) = request.area {
        room.area = Some(area);
    }
    if let Some(room_type) = request.room_type {
        room.room_type = room_type;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::room::models::RoomType;
    use chrono::Utc;

    fn sample_room() -> Room {
        Room {
            id: 1,
            title: "역세권 원룸".to_string(),
            description: None,
            address: "서울시 관악구".to_string(),
            area: Some(23.1),
            room_type: RoomType::OneRoom,
            owner_id: 7,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn empty_update() -> RoomUpdateRequest {
        RoomUpdateRequest {
            title: None,
            description: None,
            address: None,
            area: None,
            room_type: None,
            deals: vec![],
        }
    }

    #[test]
    fn apply_update_touches_only_supplied_fields() {
        let mut room = sample_room();
        let request = RoomUpdateRequest {
            title: Some("새 제목".to_string()),
            ..empty_update()
        };

        apply_update(&mut room, &request);

        assert_eq!(room.title, "새 제목");
        assert_eq!(room.address, "서울시 관악구");
        assert_eq!(room.room_type, RoomType::OneRoom);
        assert_eq!(room.area, Some(23.1));
    }

    #[test]
    fn apply_update_can_change_every_scalar_field() {
        let mut room = sample_room();
        let request = RoomUpdateRequest {
            title: Some("투룸 전환".to_string()),
            description: Some("리모델링 완료".to_string()),
            address: Some("서울시 동작구".to_string()),
            area: Some(44.2),
            room_type: Some(RoomType::TwoRoom),
            deals: vec![],
        };

        apply_update(&mut room, &request);

        assert_eq!(room.title, "투룸 전환");
        assert_eq!(room.description.as_deref(), Some("리모델링 완료"));
        assert_eq!(room.address, "서울시 동작구");
        assert_eq!(room.area, Some(44.2));
        assert_eq!(room.room_type, RoomType::TwoRoom);
    }

    #[test]
    fn owner_mismatch_is_forbidden_for_mutation() {
        let room = sample_room();

        assert!(RoomService::validate_owner_or_forbidden(7, &room).is_ok());
        assert!(matches!(
            RoomService::validate_owner_or_forbidden(8, &room),
            Err(ApiError::Forbidden)
        ));
    }
}
