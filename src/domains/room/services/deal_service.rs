use crate::domains::room::models::{Deal, NewDeal};
use crate::shared::database::{Database, DealRepository};
use crate::shared::errors::ApiError;
use sqlx::PgConnection;

// 거래 조건 서비스
// DealService: deal persistence on behalf of the room aggregate
#[derive(Clone)]
pub struct DealService {
    db: Database,
}

impl DealService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    // 거래 조건 일괄 등록 (호출자의 트랜잭션에 참여)
    pub async fn register_all(
        &self,
        conn: &mut PgConnection,
        room_id: i64,
        deals: Vec<NewDeal>,
    ) -> Result<Vec<Deal>, ApiError> {
        DealRepository::create_deals(conn, room_id, &deals)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to create deals: {}", e)))
    }

    // 방에 속한 거래 조건 전체 삭제 (호출자의 트랜잭션에 참여)
    pub async fn delete_by_room(
        &self,
        conn: &mut PgConnection,
        room_id: i64,
    ) -> Result<(), ApiError> {
        DealRepository::delete_deals_by_room(conn, room_id)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to delete deals: {}", e)))
    }

    pub async fn find_all_by_room_id(&self, room_id: i64) -> Result<Vec<Deal>, ApiError> {
        let deal_repo = DealRepository::new(self.db.pool().clone());

        deal_repo
            .find_deals_by_room_id(room_id)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch deals: {}", e)))
    }

    pub async fn find_all_by_room_ids(&self, room_ids: &[i64]) -> Result<Vec<Deal>, ApiError> {
        let deal_repo = DealRepository::new(self.db.pool().clone());

        deal_repo
            .find_deals_by_room_ids(room_ids)
            .await
            .map_err(|e| ApiError::DatabaseError(format!("Failed to fetch deals: {}", e)))
    }
}
