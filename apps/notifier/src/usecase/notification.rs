//! # 通知ユースケース
//!
//! エントリー操作に伴うメール通知の選定・生成・送信を統合する。
//!
//! ## モジュール構成
//!
//! - [`links`] - メール本文に埋め込む絶対 URL の生成
//! - [`template_renderer`] - tera テンプレートエンジンによるメール生成
//! - [`service`] - 通知先選定 + テンプレートレンダリング + 送信の統合サービス

pub mod links;
pub mod service;
pub mod template_renderer;

pub use links::NotificationLinks;
pub use service::{NotificationOutcome, NotificationService};
pub use template_renderer::TemplateRenderer;
