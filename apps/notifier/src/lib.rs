//! # Notifier ライブラリ
//!
//! Notifier の設定・ハンドラ・ユースケースを公開する。
//! 統合テストからルーターを組み立てられるよう、`app` でルーティングを定義する。

pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;

use std::sync::Arc;

use axum::{
   Router,
   routing::{get, post},
};
use handler::{NotificationState, health_check, notify_registration};
use tower_http::trace::TraceLayer;

/// ルーターを構築する
pub fn app(notification_state: Arc<NotificationState>) -> Router {
   Router::new()
      .route("/health", get(health_check))
      .route(
         "/internal/notifications/registrations",
         post(notify_registration),
      )
      .with_state(notification_state)
      .layer(TraceLayer::new_for_http())
}
