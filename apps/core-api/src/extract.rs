//! # リクエスト抽出器
//!
//! axum 標準の `Json` / `Query` / `Path` をラップし、パース失敗を
//! [`CoreError::BadRequest`] に変換する。
//!
//! 標準の抽出器は失敗時にプレーンテキストを返すため、そのままでは
//! エラーレスポンスが統一エンベロープ `{ code, message, data }` にならない。

use axum::{
   Json,
   extract::{FromRequest, FromRequestParts, Path, Query, Request},
   http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::CoreError;

/// JSON ボディ
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
   T: DeserializeOwned,
   S: Send + Sync,
{
   type Rejection = CoreError;

   async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
      let Json(value) = Json::<T>::from_request(req, state).await?;
      Ok(Self(value))
   }
}

/// クエリ文字列
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
   T: DeserializeOwned,
   S: Send + Sync,
{
   type Rejection = CoreError;

   async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
      let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
      Ok(Self(value))
   }
}

/// パスパラメータ
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
   T: DeserializeOwned + Send,
   S: Send + Sync,
{
   type Rejection = CoreError;

   async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
      let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
      Ok(Self(value))
   }
}
