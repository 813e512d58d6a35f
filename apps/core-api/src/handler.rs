//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、入力の変換とレスポンスの組み立てのみを行う

pub mod dept;
pub mod emp;
pub mod fallback;
pub mod health;

pub use dept::{DeptState, create_dept, delete_dept, get_dept, list_depts, update_dept};
pub use emp::{EmpState, get_emp, list_emps};
pub use fallback::{method_not_allowed, route_not_found};
pub use health::health_check;
