//! # Core API 設定
//!
//! 環境変数から Core API サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | 既定値 |
//! |--------|------|--------|
//! | `TLIAS_HOST` | No | `0.0.0.0` |
//! | `TLIAS_PORT` | No | `8080` |
//! | `DATABASE_URL` | **Yes** | - |
//! | `DATABASE_MAX_CONNECTIONS` | No | `10` |
//!
//! ログ形式（`LOG_FORMAT`）は [`tlias_shared::observability::TracingConfig`] が読む。

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// 設定の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   #[error("{0} が設定されていません")]
   Missing(&'static str),

   #[error("{name} の値が不正です: {value}")]
   Invalid { name: &'static str, value: String },
}

/// Core API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
   /// バインドアドレス
   pub host:                     String,
   /// ポート番号
   pub port:                     u16,
   /// データベース接続 URL
   pub database_url:             String,
   /// 接続プールの最大接続数
   pub database_max_connections: u32,
}

impl CoreConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の取得関数から設定を読み込む
   ///
   /// 空文字は未設定として扱う。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

      let host = get("TLIAS_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
      let port = parse_or("TLIAS_PORT", get("TLIAS_PORT"), DEFAULT_PORT)?;
      let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
      let database_max_connections = parse_or(
         "DATABASE_MAX_CONNECTIONS",
         get("DATABASE_MAX_CONNECTIONS"),
         DEFAULT_MAX_CONNECTIONS,
      )?;

      Ok(Self {
         host,
         port,
         database_url,
         database_max_connections,
      })
   }
}

fn parse_or<T: std::str::FromStr>(
   name: &'static str,
   value: Option<String>,
   default: T,
) -> Result<T, ConfigError> {
   match value {
      None => Ok(default),
      Some(value) => value
         .trim()
         .parse()
         .map_err(|_| ConfigError::Invalid { name, value }),
   }
}
