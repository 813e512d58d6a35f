//! 部門管理ユースケース

use std::sync::Arc;

use tlias_domain::{
   clock::Clock,
   department::{Department, DepartmentChanges, DeptId, DeptName, NewDepartment},
};
use tlias_infra::repository::DeptRepository;

use crate::error::CoreError;

/// 部門更新の入力
///
/// `id` はリクエストボディ由来のため欠落し得る。
#[derive(Debug, Clone)]
pub struct UpdateDeptInput {
   pub id:   Option<DeptId>,
   pub name: String,
}

/// 部門管理ユースケース
pub struct DeptUseCaseImpl {
   dept_repository: Arc<dyn DeptRepository>,
   clock:           Arc<dyn Clock>,
}

impl DeptUseCaseImpl {
   pub fn new(dept_repository: Arc<dyn DeptRepository>, clock: Arc<dyn Clock>) -> Self {
      Self {
         dept_repository,
         clock,
      }
   }

   /// 全部門を更新日時の降順で取得する
   pub async fn find_all(&self) -> Result<Vec<Department>, CoreError> {
      Ok(self.dept_repository.find_all().await?)
   }

   /// 部門を 1 件取得する（存在しなければ `None`）
   pub async fn get_by_id(&self, id: &DeptId) -> Result<Option<Department>, CoreError> {
      Ok(self.dept_repository.find_by_id(id).await?)
   }

   /// 部門を作成する
   ///
   /// 作成日時と更新日時には同じ現在時刻を設定する。
   pub async fn add(&self, name: String) -> Result<Department, CoreError> {
      let name = DeptName::new(name)?;
      let new_dept = NewDepartment::new(name, self.clock.now());

      let department = self.dept_repository.insert(&new_dept).await?;
      tracing::info!(id = %department.id(), name = department.name(), "部門を作成しました");

      Ok(department)
   }

   /// 部門名を更新し、影響行数を返す
   ///
   /// 存在しない id は no-op（0 を返す）でエラーにしない。
   pub async fn update(&self, input: UpdateDeptInput) -> Result<u64, CoreError> {
      let id = input
         .id
         .ok_or_else(|| CoreError::Validation("部門IDは必須です".to_string()))?;
      let name = DeptName::new(input.name)?;
      let changes = DepartmentChanges::new(id, name, self.clock.now());

      let affected = self.dept_repository.update(&changes).await?;
      if affected == 0 {
         tracing::warn!(%id, "更新対象の部門が存在しません");
      }

      Ok(affected)
   }

   /// 部門を削除し、影響行数を返す
   ///
   /// 所属していた従業員の部門は DB 側で NULL になる。
   pub async fn delete_by_id(&self, id: &DeptId) -> Result<u64, CoreError> {
      let affected = self.dept_repository.delete(id).await?;
      if affected == 0 {
         tracing::debug!(%id, "削除対象の部門が存在しません");
      }
      Ok(affected)
   }
}
