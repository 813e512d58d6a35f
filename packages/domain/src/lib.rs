//! # Tlias ドメイン層
//!
//! 部門・従業員管理の中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（Department, Employee）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（DeptName, Pagination）
//! - **ドメインエラー**: 入力値の検証失敗などを表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! core-api → infra → domain
//!    └──→ shared
//! ```
//!
//! ドメイン層はインフラ層（DB）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 現在時刻の抽象化
//! - [`department`] - 部門エンティティ
//! - [`employee`] - 従業員エンティティと職歴、検索条件
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`pagination`] - ページ番号・ページサイズから LIMIT/OFFSET への変換
//!
//! ## 使用例
//!
//! ```rust
//! use tlias_domain::{DomainError, department::DeptName};
//!
//! let name = DeptName::new("学工部").unwrap();
//! assert_eq!(name.as_str(), "学工部");
//!
//! assert!(matches!(DeptName::new("  "), Err(DomainError::Validation(_))));
//! ```

pub mod clock;
pub mod department;
pub mod employee;
pub mod error;
pub mod pagination;

pub use error::DomainError;
