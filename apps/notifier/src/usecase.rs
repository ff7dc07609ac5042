//! # ユースケース層
//!
//! Notifier のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: 送信バックエンドを `Arc<dyn NotificationSender>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約
//!
//! ## モジュール構成
//!
//! - `notification`: エントリー通知の選定・生成・送信

pub mod notification;

pub use notification::{NotificationLinks, NotificationOutcome, NotificationService, TemplateRenderer};
