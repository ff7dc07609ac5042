//! # RegMail インフラ層
//!
//! 外部システムとの通信を担当するインフラストラクチャ層。
//! 現在の責務はメール送信バックエンドのみ。
//!
//! ## 依存関係
//!
//! ```text
//! notifier → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`notification`] - メール送信トレイトと SMTP / SES / Noop 実装
//! - `mock` - テスト用の記録型送信実装（`test-utils` feature）

pub mod notification;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
