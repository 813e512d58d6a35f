//! # 部門（Department）
//!
//! 組織単位としての部門を表すエンティティ。
//!
//! ## ライフサイクル
//!
//! | 操作 | 変化 |
//! |------|------|
//! | 作成 | `created_at = updated_at = now`、id は DB が採番 |
//! | 更新 | `name` を置換、`updated_at = now`（`created_at` は不変） |
//! | 削除 | id 指定で物理削除（所属従業員の `dept_id` は NULL になる） |
//!
//! ## 使用例
//!
//! ```rust
//! use chrono::Utc;
//! use tlias_domain::department::{DeptName, NewDepartment};
//!
//! let now = Utc::now();
//! let new_dept = NewDepartment::new(DeptName::new("教研部").unwrap(), now);
//!
//! assert_eq!(new_dept.created_at(), new_dept.updated_at());
//! ```

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 部門 ID（DB の自動採番値）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct DeptId(i32);

impl DeptId {
   pub fn new(value: i32) -> Self {
      Self(value)
   }

   pub fn as_i32(&self) -> i32 {
      self.0
   }
}

/// 部門名（値オブジェクト）
///
/// # バリデーション
///
/// - 前後の空白を除去した結果が空でない
///
/// 長さの上限は設けない。
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct DeptName(String);

impl DeptName {
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into();
      let trimmed = value.trim();
      if trimmed.is_empty() {
         return Err(DomainError::Validation("部門名は必須です".to_string()));
      }
      Ok(Self(trimmed.to_string()))
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

/// 部門エンティティ（永続化済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
   id:         DeptId,
   name:       String,
   created_at: DateTime<Utc>,
   updated_at: DateTime<Utc>,
}

impl Department {
   /// DB の行から復元する
   ///
   /// DB 上の値は挿入時に検証済みのため、名前は文字列のまま受け取る。
   pub fn from_db(
      id: DeptId,
      name: String,
      created_at: DateTime<Utc>,
      updated_at: DateTime<Utc>,
   ) -> Self {
      Self {
         id,
         name,
         created_at,
         updated_at,
      }
   }

   pub fn id(&self) -> DeptId {
      self.id
   }

   pub fn name(&self) -> &str {
      &self.name
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }

   pub fn updated_at(&self) -> DateTime<Utc> {
      self.updated_at
   }
}

/// 挿入前の部門
///
/// id は DB が採番するため持たない。作成日時と更新日時は同じ値で初期化される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
   name: DeptName,
   now:  DateTime<Utc>,
}

impl NewDepartment {
   pub fn new(name: DeptName, now: DateTime<Utc>) -> Self {
      Self { name, now }
   }

   pub fn name(&self) -> &DeptName {
      &self.name
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.now
   }

   pub fn updated_at(&self) -> DateTime<Utc> {
      self.now
   }
}

/// 部門の更新内容
///
/// 更新対象は `name` と `updated_at` のみ。`created_at` は含まない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentChanges {
   id:         DeptId,
   name:       DeptName,
   updated_at: DateTime<Utc>,
}

impl DepartmentChanges {
   pub fn new(id: DeptId, name: DeptName, updated_at: DateTime<Utc>) -> Self {
      Self {
         id,
         name,
         updated_at,
      }
   }

   pub fn id(&self) -> DeptId {
      self.id
   }

   pub fn name(&self) -> &DeptName {
      &self.name
   }

   pub fn updated_at(&self) -> DateTime<Utc> {
      self.updated_at
   }

   /// 既存の部門に更新内容を適用する
   pub fn apply_to(&self, department: &Department) -> Department {
      Department {
         id:         department.id,
         name:       self.name.as_str().to_string(),
         created_at: department.created_at,
         updated_at: self.updated_at,
      }
   }
}
