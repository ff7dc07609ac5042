//! # Notifier サーバー
//!
//! 大会エントリーの通知メールを送信する内部サービス。
//!
//! ## 役割
//!
//! エントリー操作を行ったアプリケーションから通知依頼を受け取り、
//! 通知先を選定してメールを送信する:
//!
//! - **通知先選定**: デリゲートの受信設定、管理者ロスター（オーガナイザー or デリゲート）
//! - **本文生成**: tera テンプレート（HTML + テキスト）
//! - **送信**: SMTP / SES / Noop
//!
//! ```text
//! ┌──────────────┐  POST /internal/notifications/registrations  ┌──────────────┐
//! │ Registration │────────────────────────────────────────────→│   Notifier   │
//! │     App      │                                              └──────┬───────┘
//! └──────────────┘                                                     │
//!                                                          SMTP / SES  ↓
//!                                                              ┌──────────────┐
//!                                                              │ Mail server  │
//!                                                              └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `NOTIFIER_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `NOTIFIER_PORT` | No | ポート番号（デフォルト: `3100`） |
//! | `NOTIFICATION_BACKEND` | No | `smtp` / `ses` / `noop`（デフォルト: `noop`） |
//! | `SMTP_HOST` | No | SMTP ホスト（デフォルト: `localhost`） |
//! | `SMTP_PORT` | No | SMTP ポート（デフォルト: `1025`） |
//! | `NOTIFICATION_FROM_ADDRESS` | No | 送信元アドレス |
//! | `NOTIFICATION_BASE_URL` | No | メール内リンクのベース URL（デフォルト: `http://localhost:3000`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（Mailpit に送信）
//! NOTIFICATION_BACKEND=smtp cargo run -p regmail-notifier
//!
//! # 本番環境
//! NOTIFICATION_BACKEND=ses LOG_FORMAT=json cargo run -p regmail-notifier --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use regmail_infra::notification::{
   NoopNotificationSender,
   NotificationSender,
   SesNotificationSender,
   SmtpNotificationSender,
};
use regmail_notifier::{
   app,
   config::{NotificationBackend, NotificationConfig, NotifierConfig},
   handler::NotificationState,
   usecase::{NotificationLinks, NotificationService, TemplateRenderer},
};
use regmail_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;
use tracing::Instrument;

/// Notifier サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   let service_span = init_tracing(TracingConfig::from_env("notifier"));

   let config = NotifierConfig::from_env()?;

   run(config).instrument(service_span).await
}

/// 通知サービスを組み立ててサーバーを起動する
async fn run(config: NotifierConfig) -> anyhow::Result<()> {
   tracing::info!(
      "Notifier サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   let sender = build_sender(&config.notification).await;
   let template_renderer = TemplateRenderer::new()?;
   let service = NotificationService::new(
      sender,
      template_renderer,
      NotificationLinks::new(&config.notification.base_url),
      config.notification.from_address.clone(),
   );
   let notification_state = Arc::new(NotificationState { service });

   let app = app(notification_state);

   let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Notifier サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}

/// 設定に応じた送信バックエンドを作成する
async fn build_sender(config: &NotificationConfig) -> Arc<dyn NotificationSender> {
   tracing::info!(backend = %config.backend, "通知バックエンドを初期化します");

   match config.backend {
      NotificationBackend::Smtp => Arc::new(SmtpNotificationSender::new(
         &config.smtp_host,
         config.smtp_port,
      )),
      NotificationBackend::Ses => {
         let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
         Arc::new(SesNotificationSender::new(aws_sdk_sesv2::Client::new(
            &aws_config,
         )))
      }
      NotificationBackend::Noop => Arc::new(NoopNotificationSender),
   }
}
