//! # Tlias インフラ層
//!
//! PostgreSQL への接続とクエリ実行を担当する。
//!
//! ## 設計方針
//!
//! リポジトリトレイトと、その PostgreSQL 実装を提供する。ユースケース層は
//! トレイト経由でのみアクセスするため、テストではインメモリモックに差し替えられる。
//!
//! ## 依存関係
//!
//! ```text
//! core-api → infra → domain
//!    └──→ shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プール
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと PostgreSQL 実装
//! - `mock` - テスト用インメモリ実装（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use tlias_infra::{db, repository::PostgresDeptRepository};
//!
//! let pool = db::create_pool("postgres://localhost/tlias", 10).await?;
//! let repo = PostgresDeptRepository::new(pool);
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
