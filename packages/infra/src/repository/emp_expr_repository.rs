//! # EmpExprRepository
//!
//! 従業員の職歴（`emp_expr`）の取得。

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tlias_domain::employee::{EmpExprId, EmpId, EmployeeExperience};

use crate::error::InfraError;

/// 職歴リポジトリトレイト
#[async_trait]
pub trait EmpExprRepository: Send + Sync {
   /// 従業員の職歴を開始日の昇順で取得する
   async fn find_by_emp_id(&self, emp_id: &EmpId) -> Result<Vec<EmployeeExperience>, InfraError>;
}

#[derive(sqlx::FromRow)]
struct EmpExprRow {
   id:      i32,
   emp_id:  i32,
   begin:   NaiveDate,
   end:     Option<NaiveDate>,
   company: String,
   job:     String,
}

impl From<EmpExprRow> for EmployeeExperience {
   fn from(row: EmpExprRow) -> Self {
      EmployeeExperience::from_db(
         EmpExprId::new(row.id),
         EmpId::new(row.emp_id),
         row.begin,
         row.end,
         row.company,
         row.job,
      )
   }
}

/// PostgreSQL 実装の EmpExprRepository
#[derive(Debug, Clone)]
pub struct PostgresEmpExprRepository {
   pool: PgPool,
}

impl PostgresEmpExprRepository {
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl EmpExprRepository for PostgresEmpExprRepository {
   #[tracing::instrument(skip_all, level = "debug", fields(%emp_id))]
   async fn find_by_emp_id(&self, emp_id: &EmpId) -> Result<Vec<EmployeeExperience>, InfraError> {
      // begin / end は予約語のため引用符で囲む
      let rows = sqlx::query_as::<_, EmpExprRow>(
         r#"
         SELECT id, emp_id, "begin", "end", company, job
         FROM emp_expr
         WHERE emp_id = $1
         ORDER BY "begin" ASC, id ASC
         "#,
      )
      .bind(emp_id.as_i32())
      .fetch_all(&self.pool)
      .await?;

      Ok(rows.into_iter().map(EmployeeExperience::from).collect())
   }
}
