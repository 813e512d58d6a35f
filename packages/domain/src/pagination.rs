//! # ページング
//!
//! 1 始まりのページ番号とページサイズを、SQL の `LIMIT` / `OFFSET` に変換する。
//!
//! ## 正規化ルール
//!
//! | 入力 | 既定値 | 範囲外の扱い |
//! |------|--------|--------------|
//! | `page` | 1 | 1 未満は 1 |
//! | `page_size` | 10 | `1..=500` にクランプ |
//!
//! 上限を設けることで、1 リクエストで無制限の行を返すことを防ぐ。
//!
//! ```rust
//! use tlias_domain::pagination::Pagination;
//!
//! let p = Pagination::new(Some(3), Some(2));
//! assert_eq!(p.limit(), 2);
//! assert_eq!(p.offset(), 4);
//! ```

/// ページ番号の既定値
pub const DEFAULT_PAGE: i64 = 1;
/// ページサイズの既定値
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// ページサイズの上限
pub const MAX_PAGE_SIZE: i64 = 500;

/// 正規化済みのページ指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
   page:      i64,
   page_size: i64,
}

impl Pagination {
   /// 未指定・範囲外の値を正規化してページ指定を作成する
   pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
      let page = page.unwrap_or(DEFAULT_PAGE).max(1);
      let page_size = page_size
         .unwrap_or(DEFAULT_PAGE_SIZE)
         .clamp(1, MAX_PAGE_SIZE);
      Self { page, page_size }
   }

   pub fn page(&self) -> i64 {
      self.page
   }

   pub fn page_size(&self) -> i64 {
      self.page_size
   }

   /// `LIMIT` 句の値
   pub fn limit(&self) -> i64 {
      self.page_size
   }

   /// `OFFSET` 句の値（`(page - 1) * page_size`、オーバーフロー時は飽和）
   pub fn offset(&self) -> i64 {
      (self.page - 1).saturating_mul(self.page_size)
   }

   /// 総件数に対してこのページが範囲外（行が 0 件）か
   pub fn is_beyond(&self, total: i64) -> bool {
      self.offset() >= total
   }
}

impl Default for Pagination {
   fn default() -> Self {
      Self::new(None, None)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   #[test]
   fn test_未指定の場合は1ページ目の10件() {
      let p = Pagination::default();

      assert_eq!(p.page(), 1);
      assert_eq!(p.page_size(), 10);
      assert_eq!(p.offset(), 0);
   }

   #[rstest]
   #[case(Some(1), Some(2), 0)]
   #[case(Some(2), Some(2), 2)]
   #[case(Some(3), Some(2), 4)]
   #[case(Some(5), Some(10), 40)]
   fn test_offsetはページ番号とサイズから計算する(
      #[case] page: Option<i64>,
      #[case] page_size: Option<i64>,
      #[case] expected: i64,
   ) {
      assert_eq!(Pagination::new(page, page_size).offset(), expected);
   }

   #[rstest]
   #[case(0)]
   #[case(-3)]
   fn test_1未満のページ番号は1に切り上げる(#[case] page: i64) {
      assert_eq!(Pagination::new(Some(page), None).page(), 1);
   }

   #[rstest]
   #[case(0, 1)]
   #[case(-10, 1)]
   #[case(500, 500)]
   #[case(10_000, MAX_PAGE_SIZE)]
   fn test_ページサイズは範囲内にクランプする(#[case] input: i64, #[case] expected: i64) {
      assert_eq!(Pagination::new(None, Some(input)).page_size(), expected);
   }

   #[test]
   fn test_巨大なページ番号でもoffsetはオーバーフローしない() {
      let p = Pagination::new(Some(i64::MAX), Some(MAX_PAGE_SIZE));

      assert_eq!(p.offset(), i64::MAX);
   }

   #[rstest]
   #[case(Some(3), Some(2), 5, false)]
   #[case(Some(4), Some(2), 5, true)]
   #[case(Some(1), Some(10), 0, true)]
   fn test_is_beyondは総件数を超えるページを判定する(
      #[case] page: Option<i64>,
      #[case] page_size: Option<i64>,
      #[case] total: i64,
      #[case] expected: bool,
   ) {
      assert_eq!(Pagination::new(page, page_size).is_beyond(total), expected);
   }
}
