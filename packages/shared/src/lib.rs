//! # Tlias 共有ユーティリティ
//!
//! このクレートは、Tlias プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - HTTP 層（core-api）から依存され、domain / infra には依存しない
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える（axum や sqlx には依存しない）
//!
//! ## モジュール構成
//!
//! - [`api_response`] - 統一レスポンスエンベロープ `{ code, message, data }`
//! - [`page_result`] - ページング結果 `{ total, rows }`
//! - [`observability`] - トレーシング初期化

pub mod api_response;
pub mod observability;
pub mod page_result;

pub use api_response::{ApiResponse, ResultCode};
pub use page_result::PageResult;
