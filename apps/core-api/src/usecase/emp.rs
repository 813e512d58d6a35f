//! 従業員検索ユースケース
//!
//! ページング検索は総件数と該当ページの 2 クエリで構成する。
//! 総件数が 0 の場合や範囲外のページでは行クエリを発行しない。

use std::sync::Arc;

use chrono::NaiveDate;
use tlias_domain::{
   employee::{EmpId, Employee, EmployeeExperience, EmployeeFilter},
   pagination::Pagination,
};
use tlias_infra::repository::{EmpExprRepository, EmpRepository};
use tlias_shared::PageResult;

use crate::error::CoreError;

/// 従業員ページング検索の入力
#[derive(Debug, Clone, Default)]
pub struct EmpQuery {
   pub page:      Option<i64>,
   pub page_size: Option<i64>,
   pub name:      Option<String>,
   pub gender:    Option<i16>,
   pub start:     Option<NaiveDate>,
   pub end:       Option<NaiveDate>,
}

/// 従業員と職歴
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetail {
   pub employee:    Employee,
   pub experiences: Vec<EmployeeExperience>,
}

/// 従業員検索ユースケース
pub struct EmpUseCaseImpl {
   emp_repository:      Arc<dyn EmpRepository>,
   emp_expr_repository: Arc<dyn EmpExprRepository>,
}

impl EmpUseCaseImpl {
   pub fn new(
      emp_repository: Arc<dyn EmpRepository>,
      emp_expr_repository: Arc<dyn EmpExprRepository>,
   ) -> Self {
      Self {
         emp_repository,
         emp_expr_repository,
      }
   }

   /// 条件に一致する従業員を 1 ページ分取得する
   ///
   /// 範囲外のページは空の `rows` を返す（エラーにしない）。
   pub async fn page(&self, query: EmpQuery) -> Result<PageResult<Employee>, CoreError> {
      let pagination = Pagination::new(query.page, query.page_size);
      let filter = EmployeeFilter::new(query.name, query.gender, query.start, query.end);

      let total = self.emp_repository.count(&filter).await?;
      if pagination.is_beyond(total) {
         return Ok(PageResult::empty(total));
      }

      let rows = self
         .emp_repository
         .find_page(&filter, &pagination)
         .await?;
      tracing::debug!(
         total,
         rows = rows.len(),
         filtered = !filter.is_empty(),
         page = pagination.page(),
         page_size = pagination.page_size(),
         "従業員を検索しました"
      );

      Ok(PageResult::new(total, rows))
   }

   /// 従業員を職歴付きで取得する（存在しなければ `None`）
   pub async fn get_by_id(&self, id: &EmpId) -> Result<Option<EmployeeDetail>, CoreError> {
      let Some(employee) = self.emp_repository.find_by_id(id).await? else {
         return Ok(None);
      };
      let experiences = self.emp_expr_repository.find_by_emp_id(id).await?;

      Ok(Some(EmployeeDetail {
         employee,
         experiences,
      }))
   }
}

#[cfg(test)]
mod tests {
   use chrono::{DateTime, Utc};
   use pretty_assertions::assert_eq;
   use rstest::rstest;
   use tlias_domain::{
      department::DeptId,
      employee::{EmpExprId, EmployeeRecord},
   };
   use tlias_infra::mock::{MockEmpExprRepository, MockEmpRepository};

   use super::*;

   fn date(y: i32, m: u32, d: u32) -> NaiveDate {
      NaiveDate::from_ymd_opt(y, m, d).unwrap()
   }

   fn employee(id: i32, name: &str, gender: i16, entry_date: Option<NaiveDate>) -> Employee {
      let now = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
      Employee::from_db(EmployeeRecord {
         id: EmpId::new(id),
         username: format!("user{id}"),
         name: name.to_string(),
         gender,
         phone: "13300000000".to_string(),
         job: Some(2),
         salary: Some(6000),
         image: None,
         entry_date,
         dept_id: Some(DeptId::new(1)),
         dept_name: Some("教研部".to_string()),
         created_at: now,
         updated_at: now,
      })
   }

   /// 5 人（男性 3 人・女性 2 人）を登録したユースケース
   fn five_employees() -> EmpUseCaseImpl {
      let repo = MockEmpRepository::new();
      repo.add_employee(employee(1, "宋江", 1, Some(date(2019, 3, 1))));
      repo.add_employee(employee(2, "卢俊义", 1, Some(date(2020, 1, 1))));
      repo.add_employee(employee(3, "扈三娘", 2, Some(date(2020, 6, 15))));
      repo.add_employee(employee(4, "李逵", 1, Some(date(2020, 12, 31))));
      repo.add_employee(employee(5, "孙二娘", 2, None));
      EmpUseCaseImpl::new(Arc::new(repo), Arc::new(MockEmpExprRepository::new()))
   }

   fn page_query(page: i64, page_size: i64) -> EmpQuery {
      EmpQuery {
         page: Some(page),
         page_size: Some(page_size),
         ..EmpQuery::default()
      }
   }

   #[rstest]
   #[case(1, 2, vec![1, 2])]
   #[case(2, 2, vec![3, 4])]
   #[case(3, 2, vec![5])]
   #[case(4, 2, vec![])]
   #[tokio::test]
   async fn test_5人をページサイズ2で分割する(
      #[case] page: i64,
      #[case] page_size: i64,
      #[case] expected_ids: Vec<i32>,
   ) {
      let sut = five_employees();

      let result = sut.page(page_query(page, page_size)).await.unwrap();

      let ids: Vec<i32> = result.rows.iter().map(|e| e.id().as_i32()).collect();
      assert_eq!(result.total, 5);
      assert_eq!(ids, expected_ids);
   }

   #[tokio::test]
   async fn test_未指定なら1ページ目を10件で返す() {
      let sut = five_employees();

      let result = sut.page(EmpQuery::default()).await.unwrap();

      assert_eq!(result.total, 5);
      assert_eq!(result.rows.len(), 5);
   }

   #[tokio::test]
   async fn test_全ページを走査した行数の合計はtotalに一致する() {
      let sut = five_employees();

      for page_size in 1..=6 {
         let mut seen = 0;
         let mut total = 0;
         for page in 1.. {
            let result = sut.page(page_query(page, page_size)).await.unwrap();
            total = result.total;
            if result.rows.is_empty() {
               break;
            }
            assert!(result.rows.len() as i64 <= page_size);
            seen += result.rows.len() as i64;
         }
         assert_eq!(seen, total, "page_size = {page_size}");
      }
   }

   #[tokio::test]
   async fn test_フィルタはtotalとrowsの両方に適用される() {
      let sut = five_employees();

      let result = sut
         .page(EmpQuery {
            gender: Some(2),
            start: Some(date(2020, 1, 1)),
            ..EmpQuery::default()
         })
         .await
         .unwrap();

      assert_eq!(result.total, 1);
      assert_eq!(result.rows[0].name(), "扈三娘");
   }

   #[tokio::test]
   async fn test_空白の名前は未指定として扱う() {
      let sut = five_employees();

      let result = sut
         .page(EmpQuery {
            name: Some("  ".to_string()),
            ..EmpQuery::default()
         })
         .await
         .unwrap();

      assert_eq!(result.total, 5);
   }

   #[tokio::test]
   async fn test_該当なしはtotal0で空のrows() {
      let sut = five_employees();

      let result = sut
         .page(EmpQuery {
            name: Some("林冲".to_string()),
            ..EmpQuery::default()
         })
         .await
         .unwrap();

      assert_eq!(result, PageResult::empty(0));
   }

   #[tokio::test]
   async fn test_詳細は職歴を開始日の昇順で含む() {
      let repo = MockEmpRepository::new();
      repo.add_employee(employee(1, "宋江", 1, None));
      let expr_repo = MockEmpExprRepository::new();
      expr_repo.add_experience(EmployeeExperience::from_db(
         EmpExprId::new(1),
         EmpId::new(1),
         date(2015, 4, 1),
         None,
         "梁山泊".to_string(),
         "頭領".to_string(),
      ));
      expr_repo.add_experience(EmployeeExperience::from_db(
         EmpExprId::new(2),
         EmpId::new(1),
         date(2010, 4, 1),
         Some(date(2015, 3, 31)),
         "郓城県".to_string(),
         "押司".to_string(),
      ));
      let sut = EmpUseCaseImpl::new(Arc::new(repo), Arc::new(expr_repo));

      let detail = sut.get_by_id(&EmpId::new(1)).await.unwrap().unwrap();

      let companies: Vec<&str> = detail.experiences.iter().map(|x| x.company()).collect();
      assert_eq!(detail.employee.name(), "宋江");
      assert_eq!(companies, vec!["郓城県", "梁山泊"]);
   }

   #[tokio::test]
   async fn test_存在しない従業員はnone() {
      let sut = five_employees();

      assert_eq!(sut.get_by_id(&EmpId::new(9999)).await.unwrap(), None);
   }

   #[tokio::test]
   async fn test_ストレージエラーはデータベースエラーとして伝播する() {
      let sut = EmpUseCaseImpl::new(
         Arc::new(MockEmpRepository::failing()),
         Arc::new(MockEmpExprRepository::new()),
      );

      let result = sut.page(EmpQuery::default()).await;

      assert!(matches!(result, Err(CoreError::Database(_))));
   }
}
