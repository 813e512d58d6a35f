//! # フォールバックハンドラ
//!
//! ルート・メソッドが一致しないリクエストにも統一エンベロープで応答する。

use axum::http::{Method, Uri};

use crate::error::CoreError;

/// 該当ルートなし（404）
pub async fn route_not_found(uri: Uri) -> CoreError {
   CoreError::RouteNotFound(uri.path().to_string())
}

/// 許可されていないメソッド（405）
pub async fn method_not_allowed(method: Method, uri: Uri) -> CoreError {
   CoreError::MethodNotAllowed(format!("{method} {}", uri.path()))
}
