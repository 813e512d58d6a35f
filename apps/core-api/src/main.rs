//! # Tlias Core API サーバー
//!
//! 人事管理画面のバックエンド。部門の CRUD と従業員の条件付きページング検索を提供する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TLIAS_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TLIAS_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `DATABASE_MAX_CONNECTIONS` | No | 接続プールの上限（デフォルト: `10`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ |
//!
//! ## 起動方法
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo run -p tlias-core-api
//! ```

use std::sync::Arc;

use tlias_core_api::{
   config::CoreConfig,
   handler::{DeptState, EmpState},
   router,
   usecase::{DeptUseCaseImpl, EmpUseCaseImpl},
};
use tlias_domain::clock::SystemClock;
use tlias_infra::{
   db,
   repository::{PostgresDeptRepository, PostgresEmpExprRepository, PostgresEmpRepository},
};
use tlias_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   init_tracing(TracingConfig::from_env("tlias-core-api"));

   let config = CoreConfig::from_env()?;
   tracing::info!(
      "Core API サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   let pool = db::create_pool(&config.database_url, config.database_max_connections).await?;

   let dept_state = Arc::new(DeptState {
      usecase: DeptUseCaseImpl::new(
         Arc::new(PostgresDeptRepository::new(pool.clone())),
         Arc::new(SystemClock),
      ),
   });
   let emp_state = Arc::new(EmpState {
      usecase: EmpUseCaseImpl::new(
         Arc::new(PostgresEmpRepository::new(pool.clone())),
         Arc::new(PostgresEmpExprRepository::new(pool)),
      ),
   });

   let app = router(dept_state, emp_state);

   let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
   tracing::info!("リッスン開始: {}", listener.local_addr()?);
   axum::serve(listener, app).await?;

   Ok(())
}
