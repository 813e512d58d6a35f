//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! tlias-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 並び順・絞り込み・採番は PostgreSQL 実装と同じ意味論に合わせている。
//! `failing()` で作成したモックは全メソッドがエラーを返す。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::SubsecRound;
use tlias_domain::{
   department::{Department, DepartmentChanges, DeptId, NewDepartment},
   employee::{EmpId, Employee, EmployeeExperience, EmployeeFilter},
   pagination::Pagination,
};

use crate::{
   error::InfraError,
   repository::{DeptRepository, EmpExprRepository, EmpRepository},
};

fn storage_failure() -> InfraError {
   InfraError::unexpected("モックのストレージ障害")
}

// ===== MockDeptRepository =====

#[derive(Clone, Default)]
pub struct MockDeptRepository {
   departments: Arc<Mutex<Vec<Department>>>,
   failing:     bool,
}

impl MockDeptRepository {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn failing() -> Self {
      Self {
         failing: true,
         ..Self::default()
      }
   }

   pub fn add_department(&self, department: Department) {
      self.departments.lock().unwrap().push(department);
   }

   /// 保持している部門のスナップショット（挿入順）
   pub fn departments(&self) -> Vec<Department> {
      self.departments.lock().unwrap().clone()
   }
}

#[async_trait]
impl DeptRepository for MockDeptRepository {
   async fn find_all(&self) -> Result<Vec<Department>, InfraError> {
      if self.failing {
         return Err(storage_failure());
      }
      let mut departments = self.departments.lock().unwrap().clone();
      departments.sort_by(|a, b| {
         b.updated_at()
            .cmp(&a.updated_at())
            .then_with(|| b.id().as_i32().cmp(&a.id().as_i32()))
      });
      Ok(departments)
   }

   async fn find_by_id(&self, id: &DeptId) -> Result<Option<Department>, InfraError> {
      if self.failing {
         return Err(storage_failure());
      }
      Ok(self
         .departments
         .lock()
         .unwrap()
         .iter()
         .find(|d| d.id() == *id)
         .cloned())
   }

   async fn insert(&self, new_dept: &NewDepartment) -> Result<Department, InfraError> {
      if self.failing {
         return Err(storage_failure());
      }
      let mut departments = self.departments.lock().unwrap();
      let next_id = departments
         .iter()
         .map(|d| d.id().as_i32())
         .max()
         .unwrap_or(0)
         + 1;
      // TIMESTAMPTZ と同じくマイクロ秒に丸めて保存する
      let department = Department::from_db(
         DeptId::new(next_id),
         new_dept.name().as_str().to_string(),
         new_dept.created_at().trunc_subsecs(6),
         new_dept.updated_at().trunc_subsecs(6),
      );
      departments.push(department.clone());
      Ok(department)
   }

   async fn update(&self, changes: &DepartmentChanges) -> Result<u64, InfraError> {
      if self.failing {
         return Err(storage_failure());
      }
      let mut departments = self.departments.lock().unwrap();
      let Some(pos) = departments.iter().position(|d| d.id() == changes.id()) else {
         return Ok(0);
      };
      let updated = changes.apply_to(&departments[pos]);
      departments[pos] = updated;
      Ok(1)
   }

   async fn delete(&self, id: &DeptId) -> Result<u64, InfraError> {
      if self.failing {
         return Err(storage_failure());
      }
      let mut departments = self.departments.lock().unwrap();
      let before = departments.len();
      departments.retain(|d| d.id() != *id);
      Ok((before - departments.len()) as u64)
   }
}

// ===== MockEmpRepository =====

#[derive(Clone, Default)]
pub struct MockEmpRepository {
   employees: Arc<Mutex<Vec<Employee>>>,
   failing:   bool,
}

impl MockEmpRepository {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn failing() -> Self {
      Self {
         failing: true,
         ..Self::default()
      }
   }

   pub fn add_employee(&self, employee: Employee) {
      self.employees.lock().unwrap().push(employee);
   }

   fn matching(&self, filter: &EmployeeFilter) -> Vec<Employee> {
      let mut employees: Vec<Employee> = self
         .employees
         .lock()
         .unwrap()
         .iter()
         .filter(|e| filter.matches(e))
         .cloned()
         .collect();
      employees.sort_by_key(|e| e.id().as_i32());
      employees
   }
}

#[async_trait]
impl EmpRepository for MockEmpRepository {
   async fn count(&self, filter: &EmployeeFilter) -> Result<i64, InfraError> {
      if self.failing {
         return Err(storage_failure());
      }
      Ok(self.matching(filter).len() as i64)
   }

   async fn find_page(
      &self,
      filter: &EmployeeFilter,
      pagination: &Pagination,
   ) -> Result<Vec<Employee>, InfraError> {
      if self.failing {
         return Err(storage_failure());
      }
      let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
      let limit = usize::try_from(pagination.limit()).unwrap_or(usize::MAX);
      Ok(self
         .matching(filter)
         .into_iter()
         .skip(offset)
         .take(limit)
         .collect())
   }

   async fn find_by_id(&self, id: &EmpId) -> Result<Option<Employee>, InfraError> {
      if self.failing {
         return Err(storage_failure());
      }
      Ok(self
         .employees
         .lock()
         .unwrap()
         .iter()
         .find(|e| e.id() == *id)
         .cloned())
   }
}

// ===== MockEmpExprRepository =====

#[derive(Clone, Default)]
pub struct MockEmpExprRepository {
   experiences: Arc<Mutex<Vec<EmployeeExperience>>>,
}

impl MockEmpExprRepository {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn add_experience(&self, experience: EmployeeExperience) {
      self.experiences.lock().unwrap().push(experience);
   }
}

#[async_trait]
impl EmpExprRepository for MockEmpExprRepository {
   async fn find_by_emp_id(&self, emp_id: &EmpId) -> Result<Vec<EmployeeExperience>, InfraError> {
      let mut experiences: Vec<EmployeeExperience> = self
         .experiences
         .lock()
         .unwrap()
         .iter()
         .filter(|x| x.emp_id() == *emp_id)
         .cloned()
         .collect();
      experiences.sort_by_key(|x| (x.begin(), x.id().as_i32()));
      Ok(experiences)
   }
}

#[cfg(test)]
mod tests {
   use chrono::{DateTime, Duration, Utc};
   use pretty_assertions::assert_eq;
   use tlias_domain::department::DeptName;

   use super::*;

   fn now() -> DateTime<Utc> {
      DateTime::from_timestamp(1_700_000_000, 0).unwrap()
   }

   #[tokio::test]
   async fn test_insertは連番のidを採番する() {
      let repo = MockDeptRepository::new();

      let first = repo
         .insert(&NewDepartment::new(DeptName::new("学工部").unwrap(), now()))
         .await
         .unwrap();
      let second = repo
         .insert(&NewDepartment::new(DeptName::new("教研部").unwrap(), now()))
         .await
         .unwrap();

      assert_eq!(first.id(), DeptId::new(1));
      assert_eq!(second.id(), DeptId::new(2));
   }

   #[tokio::test]
   async fn test_find_allは更新日時の降順で同値はid降順() {
      let repo = MockDeptRepository::new();
      repo.add_department(Department::from_db(DeptId::new(1), "A".to_string(), now(), now()));
      repo.add_department(Department::from_db(DeptId::new(2), "B".to_string(), now(), now()));
      repo.add_department(Department::from_db(
         DeptId::new(3),
         "C".to_string(),
         now(),
         now() - Duration::hours(1),
      ));

      let ids: Vec<i32> = repo
         .find_all()
         .await
         .unwrap()
         .iter()
         .map(|d| d.id().as_i32())
         .collect();

      assert_eq!(ids, vec![2, 1, 3]);
   }

   #[tokio::test]
   async fn test_insertは日時をマイクロ秒に丸めて保存する() {
      let repo = MockDeptRepository::new();
      let now = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();

      let inserted = repo
         .insert(&NewDepartment::new(DeptName::new("学工部").unwrap(), now))
         .await
         .unwrap();

      let expected = DateTime::from_timestamp(1_700_000_000, 123_456_000).unwrap();
      assert_eq!(inserted.created_at(), expected);
      assert_eq!(repo.departments(), vec![inserted]);
   }

   #[tokio::test]
   async fn test_failingモックはエラーを返す() {
      let repo = MockDeptRepository::failing();

      assert!(repo.find_all().await.is_err());
      assert!(repo.delete(&DeptId::new(1)).await.is_err());
   }
}
