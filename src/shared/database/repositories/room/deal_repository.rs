use crate::domains::room::models::deal::{Deal, DealType, NewDeal};
use anyhow::{anyhow, Context, Result};
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder, Row};

pub struct DealRepository {
    pool: PgPool,
}

impl DealRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: sqlx::postgres::PgRow) -> Result<Deal> {
        let deal_type: String = row.get("deal_type");
        let deal_type = DealType::from_name(&deal_type)
            .ok_or_else(|| anyhow!("Unknown deal_type in storage: {}", deal_type))?;

        Ok(Deal {
            id: row.get("id"),
            deal_type,
            deposit: row.get("deposit"),
            monthly_rent: row.get("monthly_rent"),
            room_id: row.get("room_id"),
        })
    }

    // 거래 조건 일괄 저장 (트랜잭션 안에서 호출됨)
    // Bulk-insert deals for one room inside the caller's transaction
    pub async fn create_deals(
        conn: &mut PgConnection,
        room_id: i64,
        deals: &[NewDeal],
    ) -> Result<Vec<Deal>> {
        if deals.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO deals (deal_type, deposit, monthly_rent, room_id) ");

        builder.push_values(deals, |mut row, deal| {
            row.push_bind(deal.deal_type.as_str())
                .push_bind(deal.deposit)
                .push_bind(deal.monthly_rent)
                .push_bind(room_id);
        });
        builder.push(" RETURNING id, deal_type, deposit, monthly_rent, room_id");

        let rows = builder
            .build()
            .fetch_all(conn)
            .await
            .context("Failed to create deals")?;

        rows.into_iter().map(Self::map_row).collect()
    }

    pub async fn delete_deals_by_room(conn: &mut PgConnection, room_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM deals WHERE room_id = $1")
            .bind(room_id)
            .execute(conn)
            .await
            .context("Failed to delete deals by room")?;

        Ok(())
    }

    pub async fn find_deals_by_room_id(&self, room_id: i64) -> Result<Vec<Deal>> {
        let rows = sqlx::query(
            r#"
            SELECT id, deal_type, deposit, monthly_rent, room_id
            FROM deals
            WHERE room_id = $1
            ORDER BY id
            "#,
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch deals by room id")?;

        rows.into_iter().map(Self::map_row).collect()
    }

    // 여러 방의 거래 조건을 한 번에 조회 (목록/검색 응답 조립용)
    // One query for the deals of a whole set of rooms
    pub async fn find_deals_by_room_ids(&self, room_ids: &[i64]) -> Result<Vec<Deal>> {
        if room_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(
            r#"
            SELECT id, deal_type, deposit, monthly_rent, room_id
            FROM deals
            WHERE room_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(room_ids.to_vec())
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch deals by room ids")?;

        rows.into_iter().map(Self::map_row).collect()
    }
}
