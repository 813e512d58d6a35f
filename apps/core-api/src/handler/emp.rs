//! # 従業員ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /emps?page=1&pageSize=10&name=&gender=&start=&end=` - 条件付きページング検索
//! - `GET /emps/{id}` - 従業員詳細（職歴付き）
//!
//! クエリパラメータの空文字（`name=&gender=`）は未指定として扱う。
//! 日付は `yyyy-MM-dd` 形式。

use std::{fmt, str::FromStr, sync::Arc};

use axum::{Json, extract::State, response::IntoResponse};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use tlias_domain::employee::{EmpId, Employee, EmployeeExperience};
use tlias_shared::{ApiResponse, PageResult};

use crate::{
   error::CoreError,
   extract::{ApiPath, ApiQuery},
   usecase::{EmpQuery, EmpUseCaseImpl, EmployeeDetail},
};

/// 従業員 API の共有状態
pub struct EmpState {
   pub usecase: EmpUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 従業員検索のクエリパラメータ
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmpQueryParams {
   #[serde(default, deserialize_with = "empty_string_as_none")]
   pub page:      Option<i64>,
   #[serde(default, deserialize_with = "empty_string_as_none")]
   pub page_size: Option<i64>,
   #[serde(default, deserialize_with = "empty_string_as_none")]
   pub name:      Option<String>,
   #[serde(default, deserialize_with = "empty_string_as_none")]
   pub gender:    Option<i16>,
   #[serde(default, deserialize_with = "empty_string_as_none")]
   pub start:     Option<NaiveDate>,
   #[serde(default, deserialize_with = "empty_string_as_none")]
   pub end:       Option<NaiveDate>,
}

/// 空文字（空白のみを含む）を `None` として扱うデシリアライザ
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
   D: Deserializer<'de>,
   T: FromStr,
   T::Err: fmt::Display,
{
   let value = Option::<String>::deserialize(deserializer)?;
   match value.as_deref().map(str::trim) {
      None | Some("") => Ok(None),
      Some(s) => s.parse().map(Some).map_err(de::Error::custom),
   }
}

impl From<EmpQueryParams> for EmpQuery {
   fn from(params: EmpQueryParams) -> Self {
      Self {
         page:      params.page,
         page_size: params.page_size,
         name:      params.name,
         gender:    params.gender,
         start:     params.start,
         end:       params.end,
      }
   }
}

/// 従業員 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmpDto {
   pub id:          i32,
   pub username:    String,
   pub name:        String,
   pub gender:      i16,
   pub phone:       String,
   pub job:         Option<i16>,
   pub salary:      Option<i32>,
   pub image:       Option<String>,
   pub entry_date:  Option<NaiveDate>,
   pub dept_id:     Option<i32>,
   pub dept_name:   Option<String>,
   pub create_time: DateTime<Utc>,
   pub update_time: DateTime<Utc>,
}

impl From<Employee> for EmpDto {
   fn from(emp: Employee) -> Self {
      Self {
         id:          emp.id().as_i32(),
         username:    emp.username().to_string(),
         name:        emp.name().to_string(),
         gender:      emp.gender(),
         phone:       emp.phone().to_string(),
         job:         emp.job(),
         salary:      emp.salary(),
         image:       emp.image().map(str::to_string),
         entry_date:  emp.entry_date(),
         dept_id:     emp.dept_id().map(|id| id.as_i32()),
         dept_name:   emp.dept_name().map(str::to_string),
         create_time: emp.created_at(),
         update_time: emp.updated_at(),
      }
   }
}

/// 職歴 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmpExprDto {
   pub id:      i32,
   pub emp_id:  i32,
   pub begin:   NaiveDate,
   pub end:     Option<NaiveDate>,
   pub company: String,
   pub job:     String,
}

impl From<EmployeeExperience> for EmpExprDto {
   fn from(expr: EmployeeExperience) -> Self {
      Self {
         id:      expr.id().as_i32(),
         emp_id:  expr.emp_id().as_i32(),
         begin:   expr.begin(),
         end:     expr.end(),
         company: expr.company().to_string(),
         job:     expr.job().to_string(),
      }
   }
}

/// 従業員詳細 DTO（従業員の各フィールド + `exprList`）
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmpDetailDto {
   #[serde(flatten)]
   pub emp:       EmpDto,
   pub expr_list: Vec<EmpExprDto>,
}

impl From<EmployeeDetail> for EmpDetailDto {
   fn from(detail: EmployeeDetail) -> Self {
      Self {
         emp:       EmpDto::from(detail.employee),
         expr_list: detail
            .experiences
            .into_iter()
            .map(EmpExprDto::from)
            .collect(),
      }
   }
}

// --- ハンドラ ---

/// GET /emps
pub async fn list_emps(
   State(state): State<Arc<EmpState>>,
   ApiQuery(params): ApiQuery<EmpQueryParams>,
) -> Result<impl IntoResponse, CoreError> {
   tracing::info!(?params, "従業員を検索します");

   let page: PageResult<EmpDto> = state.usecase.page(params.into()).await?.map(EmpDto::from);

   Ok(Json(ApiResponse::success(page)))
}

/// GET /emps/{id}
pub async fn get_emp(
   State(state): State<Arc<EmpState>>,
   ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, CoreError> {
   tracing::info!(id, "従業員を取得します");

   let detail = state.usecase.get_by_id(&EmpId::new(id)).await?;

   Ok(Json(ApiResponse::success_optional(
      detail.map(EmpDetailDto::from),
   )))
}
