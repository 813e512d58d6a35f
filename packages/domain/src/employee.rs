//! # 従業員（Employee）
//!
//! 従業員エンティティ、職歴（EmployeeExperience）、一覧検索の絞り込み条件を定義する。
//!
//! 従業員はこのサービスでは参照専用である。部門への参照（`dept_id`）は弱参照で、
//! 部門が削除されると `None` になる。

use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::department::DeptId;

/// 従業員 ID（DB の自動採番値）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct EmpId(i32);

impl EmpId {
   pub fn new(value: i32) -> Self {
      Self(value)
   }

   pub fn as_i32(&self) -> i32 {
      self.0
   }
}

/// DB から読み出した従業員の全カラム
///
/// [`Employee::from_db`] の引数。パスワードは読み出さない。
#[derive(Debug, Clone)]
pub struct EmployeeRecord {
   pub id:         EmpId,
   pub username:   String,
   pub name:       String,
   pub gender:     i16,
   pub phone:      String,
   pub job:        Option<i16>,
   pub salary:     Option<i32>,
   pub image:      Option<String>,
   pub entry_date: Option<NaiveDate>,
   pub dept_id:    Option<DeptId>,
   pub dept_name:  Option<String>,
   pub created_at: DateTime<Utc>,
   pub updated_at: DateTime<Utc>,
}

/// 従業員エンティティ
///
/// `gender` は性別コード（1: 男性、2: 女性）、`job` は職位コード。
/// `dept_name` は一覧表示用に部門テーブルから結合した値。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
   id:         EmpId,
   username:   String,
   name:       String,
   gender:     i16,
   phone:      String,
   job:        Option<i16>,
   salary:     Option<i32>,
   image:      Option<String>,
   entry_date: Option<NaiveDate>,
   dept_id:    Option<DeptId>,
   dept_name:  Option<String>,
   created_at: DateTime<Utc>,
   updated_at: DateTime<Utc>,
}

impl Employee {
   pub fn from_db(record: EmployeeRecord) -> Self {
      Self {
         id:         record.id,
         username:   record.username,
         name:       record.name,
         gender:     record.gender,
         phone:      record.phone,
         job:        record.job,
         salary:     record.salary,
         image:      record.image,
         entry_date: record.entry_date,
         dept_id:    record.dept_id,
         dept_name:  record.dept_name,
         created_at: record.created_at,
         updated_at: record.updated_at,
      }
   }

   pub fn id(&self) -> EmpId {
      self.id
   }

   pub fn username(&self) -> &str {
      &self.username
   }

   pub fn name(&self) -> &str {
      &self.name
   }

   pub fn gender(&self) -> i16 {
      self.gender
   }

   pub fn phone(&self) -> &str {
      &self.phone
   }

   pub fn job(&self) -> Option<i16> {
      self.job
   }

   pub fn salary(&self) -> Option<i32> {
      self.salary
   }

   pub fn image(&self) -> Option<&str> {
      self.image.as_deref()
   }

   pub fn entry_date(&self) -> Option<NaiveDate> {
      self.entry_date
   }

   pub fn dept_id(&self) -> Option<DeptId> {
      self.dept_id
   }

   pub fn dept_name(&self) -> Option<&str> {
      self.dept_name.as_deref()
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }

   pub fn updated_at(&self) -> DateTime<Utc> {
      self.updated_at
   }
}

/// 職歴 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct EmpExprId(i32);

impl EmpExprId {
   pub fn new(value: i32) -> Self {
      Self(value)
   }

   pub fn as_i32(&self) -> i32 {
      self.0
   }
}

/// 職歴（従業員の過去・現在の勤務経験）
///
/// `end` が `None` の場合は在職中を表す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeExperience {
   id:      EmpExprId,
   emp_id:  EmpId,
   begin:   NaiveDate,
   end:     Option<NaiveDate>,
   company: String,
   job:     String,
}

impl EmployeeExperience {
   pub fn from_db(
      id: EmpExprId,
      emp_id: EmpId,
      begin: NaiveDate,
      end: Option<NaiveDate>,
      company: String,
      job: String,
   ) -> Self {
      Self {
         id,
         emp_id,
         begin,
         end,
         company,
         job,
      }
   }

   pub fn id(&self) -> EmpExprId {
      self.id
   }

   pub fn emp_id(&self) -> EmpId {
      self.emp_id
   }

   pub fn begin(&self) -> NaiveDate {
      self.begin
   }

   pub fn end(&self) -> Option<NaiveDate> {
      self.end
   }

   pub fn company(&self) -> &str {
      &self.company
   }

   pub fn job(&self) -> &str {
      &self.job
   }

   /// 在職中かどうか
   pub fn is_ongoing(&self) -> bool {
      self.end.is_none()
   }
}

/// 従業員一覧の絞り込み条件
///
/// すべて任意で、指定されたものを AND で結合する。
///
/// | 条件 | 一致方法 |
/// |------|----------|
/// | `name` | 部分一致（大文字小文字を区別しない） |
/// | `gender` | 完全一致 |
/// | `entry_date_from` / `entry_date_to` | 入社日の閉区間 |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
   name:            Option<String>,
   gender:          Option<i16>,
   entry_date_from: Option<NaiveDate>,
   entry_date_to:   Option<NaiveDate>,
}

impl EmployeeFilter {
   /// 絞り込み条件を作成する
   ///
   /// `name` は前後の空白を除去し、空になった場合は未指定として扱う。
   pub fn new(
      name: Option<String>,
      gender: Option<i16>,
      entry_date_from: Option<NaiveDate>,
      entry_date_to: Option<NaiveDate>,
   ) -> Self {
      let name = name
         .map(|n| n.trim().to_string())
         .filter(|n| !n.is_empty());
      Self {
         name,
         gender,
         entry_date_from,
         entry_date_to,
      }
   }

   pub fn name(&self) -> Option<&str> {
      self.name.as_deref()
   }

   pub fn gender(&self) -> Option<i16> {
      self.gender
   }

   pub fn entry_date_from(&self) -> Option<NaiveDate> {
      self.entry_date_from
   }

   pub fn entry_date_to(&self) -> Option<NaiveDate> {
      self.entry_date_to
   }

   /// 条件が 1 つも指定されていないか
   pub fn is_empty(&self) -> bool {
      self.name.is_none()
         && self.gender.is_none()
         && self.entry_date_from.is_none()
         && self.entry_date_to.is_none()
   }

   /// 従業員が条件に一致するか
   ///
   /// SQL の WHERE 句と同じ意味論。日付条件が指定されている場合、
   /// 入社日が未登録の従業員は一致しない。
   pub fn matches(&self, employee: &Employee) -> bool {
      let name_matches = self.name.as_ref().is_none_or(|name| {
         employee
            .name()
            .to_lowercase()
            .contains(&name.to_lowercase())
      });
      let gender_matches = self.gender.is_none_or(|gender| employee.gender() == gender);

      let date_matches = if self.entry_date_from.is_none() && self.entry_date_to.is_none() {
         true
      } else {
         employee.entry_date().is_some_and(|entry_date| {
            self.entry_date_from.is_none_or(|from| entry_date >= from)
               && self.entry_date_to.is_none_or(|to| entry_date <= to)
         })
      };

      name_matches && gender_matches && date_matches
   }
}
