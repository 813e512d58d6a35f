//! # ユースケース層
//!
//! 部門・従業員に関する操作を実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリと `Clock` を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: 入力の検証・時刻の採番・ページング計算はユースケースで行う
//!
//! ## モジュール構成
//!
//! - `dept`: 部門 CRUD
//! - `emp`: 従業員のページング検索と詳細取得

pub mod dept;
pub mod emp;

pub use dept::{DeptUseCaseImpl, UpdateDeptInput};
pub use emp::{EmpQuery, EmpUseCaseImpl, EmployeeDetail};
