//! # RegMail ドメイン層
//!
//! 大会エントリー通知の中核となるドメインモデルと、通知先選定ロジックを定義する。
//!
//! ## 設計方針
//!
//! - **読み取り専用モデル**: 大会・エントリーの永続化は呼び出し元アプリケーションの責務。
//!   このクレートはロード済みのデータを受け取り、値として検証するだけ
//! - **純粋関数**: 通知先選定（[`notification::selector`]）は I/O を持たない
//! - **ドメインエラー**: 読み取りモデルの構築失敗は [`DomainError`] で表現する
//!
//! ## 依存関係の方向
//!
//! ```text
//! notifier → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`competition`] - 大会、デリゲート、オーガナイザー、管理者ロスター
//! - [`registration`] - エントリーと待機リスト
//! - [`notification`] - 通知種別、通知記述子、通知先選定、文面ヘルパー
//! - [`value_objects`] - メールアドレス、人名、大会名
//! - [`error`] - ドメインエラー
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use regmail_domain::{
//!     competition::{Competition, CompetitionId, Delegate, Official},
//!     notification::selector,
//!     registration::{Registrant, Registration, RegistrationContext, RegistrationId, RegistrationStatus},
//!     value_objects::{CompetitionName, Email, PersonName},
//! };
//!
//! let competition = Competition::new(
//!     CompetitionId::new(),
//!     CompetitionName::new("Kanto Open 2026")?,
//!     vec![Delegate::new(
//!         Official::new(PersonName::new("Aiko Sato")?, Email::new("aiko@example.com")?),
//!         false,
//!     )],
//!     vec![],
//! )?;
//! let registration = Registration::new(
//!     RegistrationId::new(),
//!     competition.id().clone(),
//!     Registrant::new(PersonName::new("Ken Ito")?, Email::new("ken@example.com")?),
//!     RegistrationStatus::New,
//!     chrono::Utc::now(),
//! );
//! let ctx = RegistrationContext::new(competition, registration, vec![])?;
//!
//! // 受信を希望するデリゲートがいないため通知しない
//! assert!(selector::organizer_new_registration_notice(&ctx).is_none());
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod competition;
pub mod error;
pub mod notification;
pub mod registration;
pub mod value_objects;

pub use error::DomainError;
