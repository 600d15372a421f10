// Room domain state
// 방 도메인 상태
use crate::domains::room::services::RoomService;
use crate::shared::database::Database;

/// Room domain state
/// 방 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct RoomState {
    pub room_service: RoomService,
}

impl RoomState {
    pub fn new(db: Database) -> Self {
        Self {
            room_service: RoomService::new(db),
        }
    }
}
