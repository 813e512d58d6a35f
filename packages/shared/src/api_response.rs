//! # API レスポンスエンベロープ
//!
//! 全エンドポイントの統一レスポンス形式 `{ "code": 1|0, "message": "...", "data": T }` を提供する。
//!
//! ## JSON 形式
//!
//! 成功時:
//!
//! ```json
//! { "code": 1, "message": "success", "data": { "id": 1, "name": "学工部" } }
//! ```
//!
//! 失敗時:
//!
//! ```json
//! { "code": 0, "message": "部門名は必須です", "data": null }
//! ```
//!
//! HTTP ステータスコードとは独立に、`code` で成否を判別できる。

use serde::{Deserialize, Serialize};

/// 成功時の固定メッセージ
const SUCCESS_MESSAGE: &str = "success";

/// レスポンスの成否コード
///
/// JSON 上は整数（成功 = `1`、失敗 = `0`）として表現する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ResultCode {
   Failure,
   Success,
}

impl From<ResultCode> for u8 {
   fn from(code: ResultCode) -> Self {
      match code {
         ResultCode::Failure => 0,
         ResultCode::Success => 1,
      }
   }
}

impl TryFrom<u8> for ResultCode {
   type Error = String;

   fn try_from(value: u8) -> Result<Self, Self::Error> {
      match value {
         0 => Ok(Self::Failure),
         1 => Ok(Self::Success),
         other => Err(format!("不明なレスポンスコード: {other}")),
      }
   }
}

/// 公開 API の統一レスポンス型
///
/// ハンドラの戻り値（成功）と `CoreError` の `IntoResponse`（失敗）の両方で使用する。
/// `data` を返さない操作（更新・削除など）は `ApiResponse<()>` を使い、`data` は `null` になる。
///
/// ## 使用例
///
/// ```
/// use tlias_shared::{ApiResponse, ResultCode};
///
/// let response = ApiResponse::success("hello");
/// assert_eq!(response.code, ResultCode::Success);
/// assert_eq!(response.data, Some("hello"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
   pub code:    ResultCode,
   pub message: String,
   pub data:    Option<T>,
}

impl<T> ApiResponse<T> {
   /// データ付きの成功レスポンスを作成する
   pub fn success(data: T) -> Self {
      Self {
         code:    ResultCode::Success,
         message: SUCCESS_MESSAGE.to_string(),
         data:    Some(data),
      }
   }

   /// 値が存在しない可能性のある成功レスポンスを作成する
   ///
   /// `None` の場合も成功扱いで、`data` は `null` になる。
   pub fn success_optional(data: Option<T>) -> Self {
      Self {
         code: ResultCode::Success,
         message: SUCCESS_MESSAGE.to_string(),
         data,
      }
   }

   /// 成否を判定する
   pub fn is_success(&self) -> bool {
      self.code == ResultCode::Success
   }
}

impl ApiResponse<()> {
   /// データなしの成功レスポンスを作成する
   pub fn ok() -> Self {
      Self {
         code:    ResultCode::Success,
         message: SUCCESS_MESSAGE.to_string(),
         data:    None,
      }
   }

   /// エラーレスポンスを作成する
   pub fn error(message: impl Into<String>) -> Self {
      Self {
         code:    ResultCode::Failure,
         message: message.into(),
         data:    None,
      }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_successを正しいjson形状にする() {
      let response = ApiResponse::success("hello");
      let json = serde_json::to_value(&response).unwrap();

      assert_eq!(
         json,
         serde_json::json!({ "code": 1, "message": "success", "data": "hello" })
      );
   }

   #[test]
   fn test_okはdataがnullになる() {
      let json = serde_json::to_value(ApiResponse::ok()).unwrap();

      assert_eq!(
         json,
         serde_json::json!({ "code": 1, "message": "success", "data": null })
      );
   }

   #[test]
   fn test_errorはcode0とメッセージを持つ() {
      let json = serde_json::to_value(ApiResponse::error("部門名は必須です")).unwrap();

      assert_eq!(
         json,
         serde_json::json!({ "code": 0, "message": "部門名は必須です", "data": null })
      );
   }

   #[test]
   fn test_success_optionalのnoneも成功扱い() {
      let response: ApiResponse<i32> = ApiResponse::success_optional(None);

      assert!(response.is_success());
      assert_eq!(response.data, None);
   }

   #[test]
   fn test_deserializeでjsonからオブジェクトに変換する() {
      let json = r#"{"code": 1, "message": "success", "data": ["a", "b"]}"#;
      let response: ApiResponse<Vec<String>> = serde_json::from_str(json).unwrap();

      assert!(response.is_success());
      assert_eq!(response.data, Some(vec!["a".to_string(), "b".to_string()]));
   }

   #[test]
   fn test_不明なcodeはデシリアライズエラー() {
      let json = r#"{"code": 7, "message": "?", "data": null}"#;
      let result = serde_json::from_str::<ApiResponse<()>>(json);

      assert!(result.is_err());
   }
}
