//! # ページング結果
//!
//! オフセットベースのページングに対応した一覧レスポンスのペイロード。

use serde::{Deserialize, Serialize};

/// ページング結果
///
/// `total` はページングを無視したフィルタ一致件数、`rows` は要求ページの行。
/// リクエストごとに生成され、永続化されない。
///
/// ## JSON 形式
///
/// ```json
/// {
///   "total": 5,
///   "rows": [...]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult<T> {
   pub total: i64,
   pub rows:  Vec<T>,
}

impl<T> PageResult<T> {
   pub fn new(total: i64, rows: Vec<T>) -> Self {
      Self { total, rows }
   }

   /// 該当なしの結果
   pub fn empty(total: i64) -> Self {
      Self {
         total,
         rows: Vec::new(),
      }
   }

   /// 行を変換する（エンティティ → DTO など）
   pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
      PageResult {
         total: self.total,
         rows:  self.rows.into_iter().map(f).collect(),
      }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_serializeでtotalとrowsを出力する() {
      let result = PageResult::new(5, vec![1, 2]);
      let json = serde_json::to_value(&result).unwrap();

      assert_eq!(json, serde_json::json!({ "total": 5, "rows": [1, 2] }));
   }

   #[test]
   fn test_emptyはtotalを保持しrowsが空() {
      let result: PageResult<String> = PageResult::empty(3);

      assert_eq!(result.total, 3);
      assert!(result.rows.is_empty());
   }

   #[test]
   fn test_mapはtotalを保持して行を変換する() {
      let result = PageResult::new(10, vec![1, 2, 3]).map(|n| n * 10);

      assert_eq!(result, PageResult::new(10, vec![10, 20, 30]));
   }
}
