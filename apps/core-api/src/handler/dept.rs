//! # 部門ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /depts` - 部門一覧（更新日時の降順）
//! - `GET /depts/{id}` - 部門 1 件（存在しなければ `data: null`）
//! - `POST /depts` - 部門作成
//! - `PUT /depts` - 部門名更新
//! - `DELETE /depts?id=` - 部門削除

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tlias_domain::department::{Department, DeptId};
use tlias_shared::ApiResponse;

use crate::{
   error::CoreError,
   extract::{ApiJson, ApiPath, ApiQuery},
   usecase::{DeptUseCaseImpl, UpdateDeptInput},
};

/// 部門 API の共有状態
pub struct DeptState {
   pub usecase: DeptUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 部門 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeptDto {
   pub id:          i32,
   pub name:        String,
   pub create_time: DateTime<Utc>,
   pub update_time: DateTime<Utc>,
}

impl From<Department> for DeptDto {
   fn from(dept: Department) -> Self {
      Self {
         id:          dept.id().as_i32(),
         name:        dept.name().to_string(),
         create_time: dept.created_at(),
         update_time: dept.updated_at(),
      }
   }
}

/// 部門作成リクエスト（`id` などその他のフィールドは無視する）
#[derive(Debug, Deserialize)]
pub struct CreateDeptRequest {
   pub name: String,
}

/// 部門更新リクエスト
#[derive(Debug, Deserialize)]
pub struct UpdateDeptRequest {
   pub id:   Option<i32>,
   pub name: String,
}

/// 部門削除のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct DeleteDeptQuery {
   pub id: i32,
}

// --- ハンドラ ---

/// GET /depts
pub async fn list_depts(
   State(state): State<Arc<DeptState>>,
) -> Result<impl IntoResponse, CoreError> {
   tracing::info!("部門一覧を取得します");

   let depts: Vec<DeptDto> = state
      .usecase
      .find_all()
      .await?
      .into_iter()
      .map(DeptDto::from)
      .collect();

   Ok(Json(ApiResponse::success(depts)))
}

/// GET /depts/{id}
pub async fn get_dept(
   State(state): State<Arc<DeptState>>,
   ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, CoreError> {
   tracing::info!(id, "部門を取得します");

   let dept = state.usecase.get_by_id(&DeptId::new(id)).await?;

   Ok(Json(ApiResponse::success_optional(dept.map(DeptDto::from))))
}

/// POST /depts
pub async fn create_dept(
   State(state): State<Arc<DeptState>>,
   ApiJson(req): ApiJson<CreateDeptRequest>,
) -> Result<impl IntoResponse, CoreError> {
   tracing::info!(name = %req.name, "部門を作成します");

   let dept = state.usecase.add(req.name).await?;

   Ok(Json(ApiResponse::success(DeptDto::from(dept))))
}

/// PUT /depts
///
/// 存在しない id の場合も成功を返す（更新なし）。
pub async fn update_dept(
   State(state): State<Arc<DeptState>>,
   ApiJson(req): ApiJson<UpdateDeptRequest>,
) -> Result<impl IntoResponse, CoreError> {
   tracing::info!(id = ?req.id, name = %req.name, "部門を更新します");

   state
      .usecase
      .update(UpdateDeptInput {
         id:   req.id.map(DeptId::new),
         name: req.name,
      })
      .await?;

   Ok(Json(ApiResponse::ok()))
}

/// DELETE /depts?id=
///
/// 存在しない id の場合も成功を返す。
pub async fn delete_dept(
   State(state): State<Arc<DeptState>>,
   ApiQuery(query): ApiQuery<DeleteDeptQuery>,
) -> Result<impl IntoResponse, CoreError> {
   tracing::info!(id = query.id, "部門を削除します");

   state.usecase.delete_by_id(&DeptId::new(query.id)).await?;

   Ok(Json(ApiResponse::ok()))
}
