//! # ドメイン層エラー定義
//!
//! 入力値の検証失敗などドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//!
//! 対象が存在しないケース（NotFound）はエラーとして扱わない。
//! 単体取得は `Option::None`、更新・削除は影響行数 0 の no-op で表す。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// 必須フィールドの未入力など、入力値が制約に違反している場合に使用する。
   #[error("バリデーションエラー: {0}")]
   Validation(String),
}
