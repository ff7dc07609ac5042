//! # 共通値オブジェクト
//!
//! 大会・エントリー・通知で共有される値オブジェクトを定義する。
//!
//! ## 含まれる型
//!
//! | 型 | ラップ対象 | 用途 |
//! |---|-----------|------|
//! | [`Email`] | `String` | 宛先・返信先メールアドレス |
//! | [`PersonName`] | `String` | 参加者・デリゲート・オーガナイザーの表示名 |
//! | [`CompetitionName`] | `String` | 大会名 |

use serde::{Deserialize, Serialize};

use crate::DomainError;

// =========================================================================
// Email（メールアドレス）
// =========================================================================

/// メールアドレス（値オブジェクト）
///
/// 生成時に `local@domain` の基本構造を検証する。
/// 厳密な RFC 5322 検証は送信バックエンド（lettre / SES）に委ねる。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない（前後の空白は除去）
    /// - `@` を含み、ローカル部・ドメイン部が空でない
    /// - 最大 255 文字
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスは必須です".to_string(),
            ));
        }

        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::Validation(format!(
                "メールアドレスの形式が不正です: {value}"
            )));
        };

        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::Validation(format!(
                "メールアドレスの形式が不正です: {value}"
            )));
        }

        if value.len() > 255 {
            return Err(DomainError::Validation(
                "メールアドレスは255文字以内である必要があります".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// PersonName（人名）
// =========================================================================

define_display_name! {
    /// 人名（値オブジェクト）
    ///
    /// 参加者・デリゲート・オーガナイザーの表示名。
    /// PII のため Debug 出力はマスクされ、Display は実装しない。
    /// メール本文への差し込みは `as_str()` を明示して行う。
    pub struct PersonName {
        label: "氏名",
        max_chars: 255,
        debug: redacted,
    }
}

// =========================================================================
// CompetitionName（大会名）
// =========================================================================

define_display_name! {
    /// 大会名（値オブジェクト）
    pub struct CompetitionName {
        label: "大会名",
        max_chars: 255,
        debug: plain,
    }
}
