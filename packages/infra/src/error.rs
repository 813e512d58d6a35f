//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターン:
//! - [`InfraError`]: 種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別
//!
//! `From<sqlx::Error>` や convenience constructor で生成すると、その時点の
//! スパン（リポジトリメソッドの `#[tracing::instrument]`）が記録される。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// 種別に応じた処理には [`kind()`](InfraError::kind) を使用する:
///
/// ```ignore
/// match error.kind() {
///     InfraErrorKind::Database(e) => { /* ... */ }
///     InfraErrorKind::Unexpected(msg) => { /* ... */ }
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
   kind:       InfraErrorKind,
   span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
   /// データベースエラー
   ///
   /// 接続取得のタイムアウト、クエリ実行失敗、制約違反など。
   #[error("データベースエラー: {0}")]
   Database(#[source] sqlx::Error),

   /// 予期しないエラー
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl InfraError {
   pub fn kind(&self) -> &InfraErrorKind {
      &self.kind
   }

   pub fn span_trace(&self) -> &SpanTrace {
      &self.span_trace
   }

   /// 予期しないエラーを生成する
   pub fn unexpected(msg: impl Into<String>) -> Self {
      Self {
         kind:       InfraErrorKind::Unexpected(msg.into()),
         span_trace: SpanTrace::capture(),
      }
   }
}

impl fmt::Debug for InfraError {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("InfraError")
         .field("kind", &self.kind)
         .field("span_trace", &self.span_trace)
         .finish()
   }
}

impl std::error::Error for InfraError {
   fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
      self.kind.source()
   }
}

impl From<sqlx::Error> for InfraError {
   fn from(source: sqlx::Error) -> Self {
      Self {
         kind:       InfraErrorKind::Database(source),
         span_trace: SpanTrace::capture(),
      }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use tracing_subscriber::layer::SubscriberExt as _;

   use super::*;

   fn with_error_layer(f: impl FnOnce()) {
      let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
      let _guard = tracing::subscriber::set_default(subscriber);
      f();
   }

   #[test]
   fn test_from_sqlx_errorでspan_traceがキャプチャされる() {
      with_error_layer(|| {
         let span = tracing::info_span!("dept_find_all");
         let _enter = span.enter();

         let err: InfraError = sqlx::Error::PoolTimedOut.into();

         assert!(matches!(err.kind(), InfraErrorKind::Database(_)));
         let trace_str = format!("{}", err.span_trace());
         assert!(
            trace_str.contains("dept_find_all"),
            "SpanTrace がスパン名を含むこと: {trace_str}",
         );
      });
   }

   #[test]
   fn test_unexpectedでspan_traceがキャプチャされる() {
      with_error_layer(|| {
         let span = tracing::info_span!("emp_count");
         let _enter = span.enter();

         let err = InfraError::unexpected("件数が負の値");

         assert!(matches!(
            err.kind(),
            InfraErrorKind::Unexpected(msg) if msg == "件数が負の値"
         ));
         assert!(format!("{}", err.span_trace()).contains("emp_count"));
      });
   }

   #[test]
   fn test_displayが種別のメッセージを出力する() {
      let err = InfraError::unexpected("接続が切断されました");

      assert_eq!(err.to_string(), "予期しないエラー: 接続が切断されました");
   }

   #[test]
   fn test_sourceが種別に委譲する() {
      use std::error::Error;

      let db_err: InfraError = sqlx::Error::RowNotFound.into();
      let unexpected = InfraError::unexpected("x");

      assert!(db_err.source().is_some());
      assert!(unexpected.source().is_none());
   }
}
