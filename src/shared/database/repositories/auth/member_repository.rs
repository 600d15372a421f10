use crate::domains::auth::models::member::Member;
use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{PgPool, Row};

pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: sqlx::postgres::PgRow) -> Member {
        Member {
            id: row.get("id"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            name: row.get("name"),
            refresh_token: row.get("refresh_token"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }

    pub async fn create_member(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
    ) -> Result<Member> {
        let row = sqlx::query(
            r#"
            INSERT INTO members (email, password_hash, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, password_hash, name, refresh_token, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create member")?;

        Ok(Self::map_row(row))
    }

    // 이메일로 회원 조회 (로그인용)
    // Get member by email (for signin)
    pub async fn get_member_by_email(&self, email: &str) -> Result<Option<Member>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, name, refresh_token, created_at, updated_at
            FROM members
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch member by email")?;

        Ok(row.map(Self::map_row))
    }

    // 회원의 Refresh Token 교체 (로그인 시마다 덮어씀)
    // Replace the member's refresh token (overwritten on every signin)
    pub async fn update_refresh_token(&self, member_id: i64, refresh_token: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE members
            SET refresh_token = $1, updated_at = $2
            WHERE id = $3
            "#,
        )
        .bind(refresh_token)
        .bind(Utc::now())
        .bind(member_id)
        .execute(&self.pool)
        .await
        .context("Failed to update refresh token")?;

        Ok(())
    }
}
