//! # ドメイン層エラー定義
//!
//! 読み取りモデルの構築時に検出されるルール違反を表現するエラー型。
//!
//! 通知先が 0 件で送信を抑止するケースはエラーではない。
//! 選定結果の `Option::None` で表現する（[`crate::notification::selector`] 参照）。
//!
//! ## 使用例
//!
//! ```rust
//! use regmail_domain::DomainError;
//!
//! fn validate_name(name: &str) -> Result<(), DomainError> {
//!     if name.is_empty() {
//!         return Err(DomainError::Validation("名前は必須です".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、400 Bad Request に変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// # 例
    ///
    /// - 必須フィールドが未入力
    /// - メールアドレスの形式不正
    /// - デリゲートが 1 人もいない大会
    /// - 別の大会に属するエントリーの混入
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
