//! # リポジトリ
//!
//! 各テーブルへのクエリをトレイトとして定義し、PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **トレイト経由のアクセス**: ユースケース層は `Arc<dyn XxxRepository>` のみを保持する
//! - **実行時クエリ**: `sqlx::query_as` と `QueryBuilder` を使い、ビルド時に DB を必要としない
//! - **NotFound はエラーにしない**: 単体取得は `Option`、更新・削除は影響行数を返す

pub mod dept_repository;
pub mod emp_expr_repository;
pub mod emp_repository;

pub use dept_repository::{DeptRepository, PostgresDeptRepository};
pub use emp_expr_repository::{EmpExprRepository, PostgresEmpExprRepository};
pub use emp_repository::{EmpRepository, PostgresEmpRepository};
