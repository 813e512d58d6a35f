//! # DeptRepository
//!
//! `dept` テーブルへの CRUD。
//!
//! 一覧は `update_time DESC, id DESC` で返す。更新日時が同じ部門の並びを
//! 安定させるため、id を第 2 キーにしている。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tlias_domain::department::{Department, DepartmentChanges, DeptId, NewDepartment};

use crate::error::InfraError;

/// 部門リポジトリトレイト
#[async_trait]
pub trait DeptRepository: Send + Sync {
   /// 全部門を更新日時の降順で取得する
   async fn find_all(&self) -> Result<Vec<Department>, InfraError>;

   /// ID で部門を検索する
   async fn find_by_id(&self, id: &DeptId) -> Result<Option<Department>, InfraError>;

   /// 部門を挿入し、保存された内容（採番された id を含む）を返す
   async fn insert(&self, new_dept: &NewDepartment) -> Result<Department, InfraError>;

   /// 名前と更新日時を更新し、影響行数を返す
   async fn update(&self, changes: &DepartmentChanges) -> Result<u64, InfraError>;

   /// 部門を削除し、影響行数を返す
   async fn delete(&self, id: &DeptId) -> Result<u64, InfraError>;
}

#[derive(sqlx::FromRow)]
struct DeptRow {
   id:          i32,
   name:        String,
   create_time: DateTime<Utc>,
   update_time: DateTime<Utc>,
}

impl From<DeptRow> for Department {
   fn from(row: DeptRow) -> Self {
      Department::from_db(
         DeptId::new(row.id),
         row.name,
         row.create_time,
         row.update_time,
      )
   }
}

/// PostgreSQL 実装の DeptRepository
#[derive(Debug, Clone)]
pub struct PostgresDeptRepository {
   pool: PgPool,
}

impl PostgresDeptRepository {
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl DeptRepository for PostgresDeptRepository {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn find_all(&self) -> Result<Vec<Department>, InfraError> {
      let rows = sqlx::query_as::<_, DeptRow>(
         r#"
         SELECT id, name, create_time, update_time
         FROM dept
         ORDER BY update_time DESC, id DESC
         "#,
      )
      .fetch_all(&self.pool)
      .await?;

      Ok(rows.into_iter().map(Department::from).collect())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_by_id(&self, id: &DeptId) -> Result<Option<Department>, InfraError> {
      let row = sqlx::query_as::<_, DeptRow>(
         r#"
         SELECT id, name, create_time, update_time
         FROM dept
         WHERE id = $1
         "#,
      )
      .bind(id.as_i32())
      .fetch_optional(&self.pool)
      .await?;

      Ok(row.map(Department::from))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(name = %new_dept.name()))]
   async fn insert(&self, new_dept: &NewDepartment) -> Result<Department, InfraError> {
      // TIMESTAMPTZ はマイクロ秒精度のため、保存後の値を読み戻して返す
      let row = sqlx::query_as::<_, DeptRow>(
         r#"
         INSERT INTO dept (name, create_time, update_time)
         VALUES ($1, $2, $3)
         RETURNING id, name, create_time, update_time
         "#,
      )
      .bind(new_dept.name().as_str())
      .bind(new_dept.created_at())
      .bind(new_dept.updated_at())
      .fetch_one(&self.pool)
      .await?;

      Ok(Department::from(row))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(id = %changes.id()))]
   async fn update(&self, changes: &DepartmentChanges) -> Result<u64, InfraError> {
      let result = sqlx::query(
         r#"
         UPDATE dept
         SET name = $2, update_time = $3
         WHERE id = $1
         "#,
      )
      .bind(changes.id().as_i32())
      .bind(changes.name().as_str())
      .bind(changes.updated_at())
      .execute(&self.pool)
      .await?;

      Ok(result.rows_affected())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn delete(&self, id: &DeptId) -> Result<u64, InfraError> {
      let result = sqlx::query("DELETE FROM dept WHERE id = $1")
         .bind(id.as_i32())
         .execute(&self.pool)
         .await?;

      Ok(result.rows_affected())
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_リポジトリはsendとsyncを実装している() {
      fn assert_send_sync<T: Send + Sync>() {}
      assert_send_sync::<PostgresDeptRepository>();
   }
}
