use crate::domains::room::models::room::{Room, RoomType};
use crate::domains::room::models::search::RoomSearchCriteria;
use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder, Row};

const ROOM_COLUMNS: &str =
    "id, title, description, address, area, room_type, owner_id, created_at, updated_at";

pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: sqlx::postgres::PgRow) -> Result<Room> {
        let room_type: String = row.get("room_type");
        let room_type = RoomType::from_name(&room_type)
            .ok_or_else(|| anyhow!("Unknown room_type in storage: {}", room_type))?;

        Ok(Room {
            id: row.get("id"),
            title: row.get("title"),
            description: row.get("description"),
            address: row.get("address"),
            area: row.get("area"),
            room_type,
            owner_id: row.get("owner_id"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }

    // 방 생성 (트랜잭션 안에서 호출됨)
    // Insert a room inside the caller's transaction
    pub async fn create_room(
        conn: &mut PgConnection,
        title: &str,
        description: Option<&str>,
        address: &str,
        area: Option<f64>,
        room_type: RoomType,
        owner_id: i64,
    ) -> Result<Room> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO rooms (title, description, address, area, room_type, owner_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            ROOM_COLUMNS
        ))
        .bind(title)
        .bind(description)
        .bind(address)
        .bind(area)
        .bind(room_type.as_str())
        .bind(owner_id)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(conn)
        .await
        .context("Failed to create room")?;

        Self::map_row(row)
    }

    pub async fn find_room_by_id(&self, room_id: i64) -> Result<Option<Room>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {}
            FROM rooms
            WHERE id = $1
            "#,
            ROOM_COLUMNS
        ))
        .bind(room_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch room by id")?;

        row.map(Self::map_row).transpose()
    }

    // 방 수정 (소유자/생성 시각은 바뀌지 않음)
    // Persist room field changes inside the caller's transaction
    pub async fn update_room(conn: &mut PgConnection, room: &Room) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE rooms
            SET title = $1, description = $2, address = $3, area = $4, room_type = $5, updated_at = $6
            WHERE id = $7
            "#,
        )
        .bind(&room.title)
        .bind(&room.description)
        .bind(&room.address)
        .bind(room.area)
        .bind(room.room_type.as_str())
        .bind(Utc::now())
        .bind(room.id)
        .execute(conn)
        .await
        .context("Failed to update room")?;

        Ok(())
    }

    pub async fn delete_room(conn: &mut PgConnection, room_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(room_id)
            .execute(conn)
            .await
            .context("Failed to delete room")?;

        Ok(())
    }

    pub async fn find_rooms_by_owner(&self, owner_id: i64) -> Result<Vec<Room>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {}
            FROM rooms
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
            ROOM_COLUMNS
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch rooms by owner")?;

        rows.into_iter().map(Self::map_row).collect()
    }

    /// 동적 검색 (조건이 있는 것만 AND로 덧붙임)
    /// Dynamic search. Present criteria each append one AND predicate.
    pub async fn search_rooms(&self, criteria: &RoomSearchCriteria) -> Result<Vec<Room>> {
        let mut query = build_search_query(criteria);

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .context("Failed to search rooms")?;

        rows.into_iter().map(Self::map_row).collect()
    }
}

/// 검색 쿼리 조립
/// Rooms with several qualifying deals collapse to one row via DISTINCT;
/// the INNER JOIN keeps rooms without deals out of search results.
pub fn build_search_query(criteria: &RoomSearchCriteria) -> QueryBuilder<'static, Postgres> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
        "SELECT DISTINCT r.id, r.title, r.description, r.address, r.area, \
         r.room_type, r.owner_id, r.created_at, r.updated_at \
         FROM rooms r \
         INNER JOIN deals d ON r.id = d.room_id \
         WHERE 1=1",
    );

    if let Some(room_types) = &criteria.room_types {
        builder.push(" AND r.room_type IN (");
        let mut separated = builder.separated(", ");
        for room_type in room_types {
            separated.push_bind(room_type.as_str());
        }
        separated.push_unseparated(")");
    }

    if let Some(deal_types) = &criteria.deal_types {
        builder.push(" AND d.deal_type IN (");
        let mut separated = builder.separated(", ");
        for deal_type in deal_types {
            separated.push_bind(deal_type.as_str());
        }
        separated.push_unseparated(")");
    }

    if let Some(min_deposit) = criteria.min_deposit {
        builder.push(" AND d.deposit >= ");
        builder.push_bind(min_deposit);
    }

    if let Some(max_deposit) = criteria.max_deposit {
        builder.push(" AND d.deposit <= ");
        builder.push_bind(max_deposit);
    }

    if let Some(min_monthly_rent) = criteria.min_monthly_rent {
        builder.push(" AND d.monthly_rent >= ");
        builder.push_bind(min_monthly_rent);
    }

    if let Some(max_monthly_rent) = criteria.max_monthly_rent {
        builder.push(" AND d.monthly_rent <= ");
        builder.push_bind(max_monthly_rent);
    }

    builder.push(" ORDER BY r.created_at DESC");
    builder.push(" LIMIT ");
    builder.push_bind(criteria.size);
    builder.push(" OFFSET ");
    builder.push_bind(criteria.page * criteria.size);

    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::room::models::deal::DealType;
    use rust_decimal::Decimal;

    fn criteria() -> RoomSearchCriteria {
        RoomSearchCriteria {
            page: 0,
            size: 20,
            ..Default::default()
        }
    }

    #[test]
    fn bare_criteria_produce_only_paging_binds() {
        let query = build_search_query(&criteria());
        let sql = query.sql();

        assert!(sql.starts_with("SELECT DISTINCT"));
        assert!(sql.contains("INNER JOIN deals d ON r.id = d.room_id"));
        assert!(sql.contains("WHERE 1=1 ORDER BY r.created_at DESC"));
        assert!(sql.ends_with("LIMIT $1 OFFSET $2"));
        assert!(!sql.contains("AND"));
    }

    #[test]
    fn membership_criteria_become_in_lists() {
        let query = build_search_query(&RoomSearchCriteria {
            room_types: Some(vec![RoomType::OneRoom, RoomType::TwoRoom]),
            deal_types: Some(vec![DealType::YearRent]),
            ..criteria()
        });
        let sql = query.sql();

        assert!(sql.contains("AND r.room_type IN ($1, $2)"));
        assert!(sql.contains("AND d.deal_type IN ($3)"));
        assert!(sql.ends_with("LIMIT $4 OFFSET $5"));
    }

    #[test]
    fn bound_criteria_use_inclusive_comparisons() {
        let query = build_search_query(&RoomSearchCriteria {
            min_deposit: Some(Decimal::from(100_000_000i64)),
            max_deposit: Some(Decimal::from(400_000_000i64)),
            min_monthly_rent: Some(Decimal::from(500_000)),
            max_monthly_rent: Some(Decimal::from(2_500_000)),
            ..criteria()
        });
        let sql = query.sql();

        assert!(sql.contains("AND d.deposit >= $1"));
        assert!(sql.contains("AND d.deposit <= $2"));
        assert!(sql.contains("AND d.monthly_rent >= $3"));
        assert!(sql.contains("AND d.monthly_rent <= $4"));
    }

    #[test]
    fn offset_is_page_times_size() {
        // page 3, size 10 => OFFSET 30은 바인딩 값으로 전달된다
        let query = build_search_query(&RoomSearchCriteria {
            page: 3,
            size: 10,
            ..Default::default()
        });

        assert!(query.sql().ends_with("LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn absent_criteria_leave_no_trace_in_sql() {
        let with_filter = build_search_query(&RoomSearchCriteria {
            min_deposit: Some(Decimal::ONE),
            ..criteria()
        });
        let without_filter = build_search_query(&criteria());

        assert!(with_filter.sql().contains("d.deposit >="));
        assert!(!without_filter.sql().contains("d.deposit"));
    }
}
