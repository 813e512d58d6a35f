//! # Tlias Core API ライブラリ
//!
//! 部門管理・従業員検索のユースケースとハンドラを公開する。
//! ルーター構築を [`router`] に集約し、`main` とハンドラテストで共有する。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 内容 |
//! |----------|------|------|
//! | GET | `/depts` | 部門一覧 |
//! | POST | `/depts` | 部門作成 |
//! | PUT | `/depts` | 部門名変更 |
//! | DELETE | `/depts?id=` | 部門削除 |
//! | GET | `/depts/{id}` | 部門取得 |
//! | GET | `/emps` | 従業員ページング検索 |
//! | GET | `/emps/{id}` | 従業員詳細 |
//! | GET | `/health` | ヘルスチェック（エンベロープなし） |
//!
//! 未定義のパス（404）・メソッド（405）もエラーエンベロープで返す。

pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod usecase;

use std::sync::Arc;

use axum::{Router, routing::get};
use handler::{
   DeptState,
   EmpState,
   create_dept,
   delete_dept,
   get_dept,
   get_emp,
   health_check,
   list_depts,
   list_emps,
   method_not_allowed,
   route_not_found,
   update_dept,
};
use tower_http::trace::TraceLayer;

/// アプリケーション全体のルーターを構築する
pub fn router(dept_state: Arc<DeptState>, emp_state: Arc<EmpState>) -> Router {
   let dept_routes = Router::new()
      .route(
         "/depts",
         get(list_depts)
            .post(create_dept)
            .put(update_dept)
            .delete(delete_dept),
      )
      .route("/depts/{id}", get(get_dept))
      .with_state(dept_state);

   let emp_routes = Router::new()
      .route("/emps", get(list_emps))
      .route("/emps/{id}", get(get_emp))
      .with_state(emp_state);

   Router::new()
      .route("/health", get(health_check))
      .merge(dept_routes)
      .merge(emp_routes)
      .fallback(route_not_found)
      .method_not_allowed_fallback(method_not_allowed)
      .layer(TraceLayer::new_for_http())
}
