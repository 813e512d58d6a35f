//! # EmpRepository
//!
//! 従業員の条件付きページング検索。
//!
//! ## クエリ構成
//!
//! 1 回のページ取得で 2 本のクエリを発行する:
//!
//! 1. `SELECT COUNT(*)` で絞り込み後の総件数を取得
//! 2. `ORDER BY e.id LIMIT .. OFFSET ..` で該当ページの行を取得
//!
//! WHERE 句は両方で同じものを [`push_filter`] が組み立てる。
//! 値はすべて `push_bind` でバインドし、SQL 文字列には埋め込まない。
//!
//! 部門名は `dept` との LEFT JOIN で取得する。所属部門のない従業員
//! （部門削除済みを含む）は `dept_name = NULL` になる。

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tlias_domain::{
   department::DeptId,
   employee::{EmpId, Employee, EmployeeFilter, EmployeeRecord},
   pagination::Pagination,
};

use crate::error::InfraError;

/// 従業員リポジトリトレイト
#[async_trait]
pub trait EmpRepository: Send + Sync {
   /// 条件に一致する従業員の総件数
   async fn count(&self, filter: &EmployeeFilter) -> Result<i64, InfraError>;

   /// 条件に一致する従業員のうち、指定ページの分を id 昇順で取得する
   async fn find_page(
      &self,
      filter: &EmployeeFilter,
      pagination: &Pagination,
   ) -> Result<Vec<Employee>, InfraError>;

   /// ID で従業員を検索する
   async fn find_by_id(&self, id: &EmpId) -> Result<Option<Employee>, InfraError>;
}

const SELECT_COLUMNS: &str = r#"
   SELECT
      e.id, e.username, e.name, e.gender, e.phone, e.job, e.salary, e.image,
      e.entry_date, e.dept_id, d.name AS dept_name, e.create_time, e.update_time
   FROM emp e
   LEFT JOIN dept d ON e.dept_id = d.id
"#;

#[derive(sqlx::FromRow)]
struct EmpRow {
   id:          i32,
   username:    String,
   name:        String,
   gender:      i16,
   phone:       String,
   job:         Option<i16>,
   salary:      Option<i32>,
   image:       Option<String>,
   entry_date:  Option<NaiveDate>,
   dept_id:     Option<i32>,
   dept_name:   Option<String>,
   create_time: DateTime<Utc>,
   update_time: DateTime<Utc>,
}

impl From<EmpRow> for Employee {
   fn from(row: EmpRow) -> Self {
      Employee::from_db(EmployeeRecord {
         id:         EmpId::new(row.id),
         username:   row.username,
         name:       row.name,
         gender:     row.gender,
         phone:      row.phone,
         job:        row.job,
         salary:     row.salary,
         image:      row.image,
         entry_date: row.entry_date,
         dept_id:    row.dept_id.map(DeptId::new),
         dept_name:  row.dept_name,
         created_at: row.create_time,
         updated_at: row.update_time,
      })
   }
}

/// LIKE パターンのメタ文字（`\`, `%`, `_`）をエスケープする
///
/// PostgreSQL の LIKE は既定で `\` をエスケープ文字として扱う。
fn escape_like(value: &str) -> String {
   let mut escaped = String::with_capacity(value.len());
   for c in value.chars() {
      if matches!(c, '\\' | '%' | '_') {
         escaped.push('\\');
      }
      escaped.push(c);
   }
   escaped
}

/// 絞り込み条件を WHERE 句として追加する
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &EmployeeFilter) {
   builder.push(" WHERE TRUE");

   if let Some(name) = filter.name() {
      builder
         .push(" AND e.name ILIKE ")
         .push_bind(format!("%{}%", escape_like(name)));
   }
   if let Some(gender) = filter.gender() {
      builder.push(" AND e.gender = ").push_bind(gender);
   }
   if let Some(from) = filter.entry_date_from() {
      builder.push(" AND e.entry_date >= ").push_bind(from);
   }
   if let Some(to) = filter.entry_date_to() {
      builder.push(" AND e.entry_date <= ").push_bind(to);
   }
}

/// `COUNT(*)` の結果を総件数として検証する
fn checked_total(count: i64) -> Result<i64, InfraError> {
   if count < 0 {
      return Err(InfraError::unexpected(format!(
         "従業員の件数が負の値です: {count}"
      )));
   }
   Ok(count)
}

/// PostgreSQL 実装の EmpRepository
#[derive(Debug, Clone)]
pub struct PostgresEmpRepository {
   pool: PgPool,
}

impl PostgresEmpRepository {
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl EmpRepository for PostgresEmpRepository {
   #[tracing::instrument(skip_all, level = "debug", fields(?filter))]
   async fn count(&self, filter: &EmployeeFilter) -> Result<i64, InfraError> {
      let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM emp e");
      push_filter(&mut builder, filter);

      let count = builder
         .build_query_scalar::<i64>()
         .fetch_one(&self.pool)
         .await?;

      checked_total(count)
   }

   #[tracing::instrument(
      skip_all,
      level = "debug",
      fields(?filter, page = pagination.page(), page_size = pagination.page_size())
   )]
   async fn find_page(
      &self,
      filter: &EmployeeFilter,
      pagination: &Pagination,
   ) -> Result<Vec<Employee>, InfraError> {
      let mut builder = QueryBuilder::<Postgres>::new(SELECT_COLUMNS);
      push_filter(&mut builder, filter);
      builder
         .push(" ORDER BY e.id ASC LIMIT ")
         .push_bind(pagination.limit())
         .push(" OFFSET ")
         .push_bind(pagination.offset());

      let rows = builder
         .build_query_as::<EmpRow>()
         .fetch_all(&self.pool)
         .await?;

      Ok(rows.into_iter().map(Employee::from).collect())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_by_id(&self, id: &EmpId) -> Result<Option<Employee>, InfraError> {
      let mut builder = QueryBuilder::<Postgres>::new(SELECT_COLUMNS);
      builder.push(" WHERE e.id = ").push_bind(id.as_i32());

      let row = builder
         .build_query_as::<EmpRow>()
         .fetch_optional(&self.pool)
         .await?;

      Ok(row.map(Employee::from))
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;
   use crate::error::InfraErrorKind;

   #[rstest]
   #[case("宋江", "宋江")]
   #[case("100%", "100\\%")]
   #[case("a_b", "a\\_b")]
   #[case("c:\\tmp", "c:\\\\tmp")]
   fn test_escape_likeはメタ文字をエスケープする(#[case] input: &str, #[case] expected: &str) {
      assert_eq!(escape_like(input), expected);
   }

   #[test]
   fn test_条件なしのwhere句は常に真() {
      let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM emp e");

      push_filter(&mut builder, &EmployeeFilter::default());

      assert_eq!(builder.sql(), "SELECT COUNT(*) FROM emp e WHERE TRUE");
   }

   #[test]
   fn test_全条件を指定すると順にバインドされる() {
      let filter = EmployeeFilter::new(
         Some("張".to_string()),
         Some(1),
         NaiveDate::from_ymd_opt(2020, 1, 1),
         NaiveDate::from_ymd_opt(2020, 12, 31),
      );
      let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM emp e");

      push_filter(&mut builder, &filter);

      assert_eq!(
         builder.sql(),
         "SELECT COUNT(*) FROM emp e WHERE TRUE AND e.name ILIKE $1 AND e.gender = $2 \
          AND e.entry_date >= $3 AND e.entry_date <= $4"
      );
   }

   #[rstest]
   #[case(0)]
   #[case(5)]
   fn test_0以上の件数はそのまま総件数になる(#[case] count: i64) {
      assert_eq!(checked_total(count).unwrap(), count);
   }

   #[test]
   fn test_負の件数は予期しないエラー() {
      let err = checked_total(-1).unwrap_err();

      assert!(matches!(
         err.kind(),
         InfraErrorKind::Unexpected(msg) if msg.contains("-1")
      ));
   }

   #[test]
   fn test_リポジトリはsendとsyncを実装している() {
      fn assert_send_sync<T: Send + Sync>() {}
      assert_send_sync::<PostgresEmpRepository>();
   }
}
