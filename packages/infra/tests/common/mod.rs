//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するシードデータ投入ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

/// テスト用の固定日時（マイクロ秒以下を持たないため DB 往復で値が変わらない）
pub fn test_now() -> DateTime<Utc> {
   DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
   NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 部門を直接 INSERT して id を返す
pub async fn insert_dept(pool: &PgPool, name: &str, update_time: DateTime<Utc>) -> i32 {
   sqlx::query_scalar::<_, i32>(
      "INSERT INTO dept (name, create_time, update_time) VALUES ($1, $2, $3) RETURNING id",
   )
   .bind(name)
   .bind(test_now())
   .bind(update_time)
   .fetch_one(pool)
   .await
   .expect("部門の作成に失敗")
}

/// 従業員を直接 INSERT して id を返す
pub async fn insert_emp(
   pool: &PgPool,
   username: &str,
   name: &str,
   gender: i16,
   entry_date: Option<NaiveDate>,
   dept_id: Option<i32>,
) -> i32 {
   sqlx::query_scalar::<_, i32>(
      r#"
      INSERT INTO emp (username, name, gender, phone, job, salary, entry_date, dept_id)
      VALUES ($1, $2, $3, '13300000000', 1, 6000, $4, $5)
      RETURNING id
      "#,
   )
   .bind(username)
   .bind(name)
   .bind(gender)
   .bind(entry_date)
   .bind(dept_id)
   .fetch_one(pool)
   .await
   .expect("従業員の作成に失敗")
}

/// 職歴を直接 INSERT する
pub async fn insert_expr(
   pool: &PgPool,
   emp_id: i32,
   begin: NaiveDate,
   end: Option<NaiveDate>,
   company: &str,
) {
   sqlx::query(
      r#"INSERT INTO emp_expr (emp_id, "begin", "end", company, job) VALUES ($1, $2, $3, $4, '開発')"#,
   )
   .bind(emp_id)
   .bind(begin)
   .bind(end)
   .bind(company)
   .execute(pool)
   .await
   .expect("職歴の作成に失敗");
}
