//! # Core API エラー定義
//!
//! Core API 固有のエラーと、統一エンベロープ形式の HTTP レスポンスへの変換を定義する。
//!
//! | バリアント | HTTP ステータス | `message` |
//! |-----------|----------------|-----------|
//! | `BadRequest` | 400 | パース失敗の詳細 |
//! | `Validation` | 400 | 検証エラーの内容 |
//! | `RouteNotFound` | 404 | 要求されたパス |
//! | `MethodNotAllowed` | 405 | 要求されたメソッドとパス |
//! | `Database` | 500 | 固定文言（詳細はログのみ） |

use axum::{
   Json,
   extract::rejection::{JsonRejection, PathRejection, QueryRejection},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use tlias_domain::DomainError;
use tlias_infra::InfraError;
use tlias_shared::ApiResponse;

const INTERNAL_ERROR_MESSAGE: &str = "内部エラーが発生しました";

/// Core API で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
   /// リクエストのパス・クエリ・ボディを解釈できない
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// 入力値の検証失敗
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// 該当するルートがない
   #[error("リソースが見つかりません: {0}")]
   RouteNotFound(String),

   /// パスは存在するがメソッドが許可されていない
   #[error("許可されていないメソッドです: {0}")]
   MethodNotAllowed(String),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl From<DomainError> for CoreError {
   fn from(err: DomainError) -> Self {
      match err {
         DomainError::Validation(msg) => CoreError::Validation(msg),
      }
   }
}

impl From<JsonRejection> for CoreError {
   fn from(rejection: JsonRejection) -> Self {
      CoreError::BadRequest(rejection.body_text())
   }
}

impl From<QueryRejection> for CoreError {
   fn from(rejection: QueryRejection) -> Self {
      CoreError::BadRequest(rejection.body_text())
   }
}

impl From<PathRejection> for CoreError {
   fn from(rejection: PathRejection) -> Self {
      CoreError::BadRequest(rejection.body_text())
   }
}

impl IntoResponse for CoreError {
   fn into_response(self) -> Response {
      let (status, message) = match self {
         CoreError::BadRequest(msg) => {
            tracing::warn!("不正なリクエスト: {}", msg);
            (StatusCode::BAD_REQUEST, msg)
         }
         CoreError::Validation(msg) => {
            tracing::warn!("バリデーションエラー: {}", msg);
            (StatusCode::BAD_REQUEST, msg)
         }
         err @ CoreError::RouteNotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
         err @ CoreError::MethodNotAllowed(_) => {
            (StatusCode::METHOD_NOT_ALLOWED, err.to_string())
         }
         CoreError::Database(e) => {
            // セキュリティ: 内部エラー詳細はログのみ
            tracing::error!(error = %e, span_trace = %e.span_trace(), "データベースエラー");
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               INTERNAL_ERROR_MESSAGE.to_string(),
            )
         }
      };

      (status, Json(ApiResponse::error(message))).into_response()
   }
}
