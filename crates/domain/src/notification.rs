//! # 通知
//!
//! エントリーのライフサイクルに伴うメール通知のドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`NotificationEventType`] | 通知イベント種別 | 運営者向け 2 種類 + 参加者向け 4 種類 |
//! | [`RegistrationNotification`] | 通知記述子 | 宛先・返信先・件名・本文素材を確定させたもの |
//! | [`EmailMessage`] | メールメッセージ | レンダリング済みの送信単位 |
//!
//! ## 設計方針
//!
//! - **選定と生成の分離**: 宛先の選定は [`selector`]（純粋関数）、本文の生成は notifier のテンプレートレンダラー
//! - **送信抑止は `Option`**: 宛先が 0 件のとき、空のメッセージではなく `None` を返す
//! - **fire-and-forget**: 通知送信の失敗はエントリー操作に影響しない

pub mod selector;
pub mod wording;

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;

pub use self::wording::Signature;
use crate::{
    competition::CompetitionId,
    registration::RegistrationId,
    value_objects::Email,
};

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),
}

/// 通知イベント種別
///
/// snake_case でシリアライズされ、テンプレート名にもそのまま使われる。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationEventType {
    /// 新規エントリー → 受信希望のデリゲートに送信
    OrganizerNewRegistration,
    /// エントリー削除 → 全デリゲートに送信
    OrganizerDeletedRegistration,
    /// 新規エントリー → 参加者に送信（待機リストの長さを含む）
    RegistrantNewRegistration,
    /// エントリー承認 → 参加者に送信
    RegistrantAcceptedRegistration,
    /// 待機リストへの移動 → 参加者に送信
    RegistrantPendingRegistration,
    /// エントリー削除 → 参加者に送信
    RegistrantDeletedRegistration,
}

/// メールメッセージ
///
/// テンプレートレンダリングの出力。NotificationSender に渡される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 送信元メールアドレス（システム固定）
    pub from:      String,
    /// 送信先メールアドレス
    pub to:        Vec<String>,
    /// 返信先メールアドレス
    pub reply_to:  Vec<String>,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
    /// プレーンテキスト本文
    pub text_body: String,
}

/// 全通知で共通の本文素材
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeDetails {
    pub competition_id:   CompetitionId,
    pub competition_name: String,
    pub registration_id:  RegistrationId,
    pub registrant_name:  String,
}

/// 参加者向け通知の共通部分
///
/// 宛先は参加者本人のみ、返信先は管理者ロスター、本文末尾に署名を付ける。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrantNotice {
    pub details:          NoticeDetails,
    pub registrant_email: Email,
    pub manager_emails:   Vec<Email>,
    pub signature:        Signature,
}

/// エントリー通知記述子
///
/// 各バリアントが通知イベント種別（6 種類）に対応する。
/// [`selector`] の出力であり、テンプレートレンダラーの入力。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationNotification {
    /// 新規エントリー（運営者向け）
    OrganizerNewRegistration {
        details:          NoticeDetails,
        delegate_emails:  Vec<Email>,
        registrant_email: Email,
    },
    /// エントリー削除（運営者向け）
    OrganizerDeletedRegistration {
        details:         NoticeDetails,
        delegate_emails: Vec<Email>,
        manager_emails:  Vec<Email>,
    },
    /// 新規エントリー（参加者向け）
    RegistrantNewRegistration {
        notice:          RegistrantNotice,
        waitlist_length: usize,
    },
    /// エントリー承認（参加者向け）
    RegistrantAcceptedRegistration { notice: RegistrantNotice },
    /// 待機リストへの移動（参加者向け）
    RegistrantPendingRegistration { notice: RegistrantNotice },
    /// エントリー削除（参加者向け）
    RegistrantDeletedRegistration { notice: RegistrantNotice },
}

impl RegistrationNotification {
    /// 通知イベント種別を返す
    pub fn event_type(&self) -> NotificationEventType {
        match self {
            Self::OrganizerNewRegistration { .. } => NotificationEventType::OrganizerNewRegistration,
            Self::OrganizerDeletedRegistration { .. } => {
                NotificationEventType::OrganizerDeletedRegistration
            }
            Self::RegistrantNewRegistration { .. } => {
                NotificationEventType::RegistrantNewRegistration
            }
            Self::RegistrantAcceptedRegistration { .. } => {
                NotificationEventType::RegistrantAcceptedRegistration
            }
            Self::RegistrantPendingRegistration { .. } => {
                NotificationEventType::RegistrantPendingRegistration
            }
            Self::RegistrantDeletedRegistration { .. } => {
                NotificationEventType::RegistrantDeletedRegistration
            }
        }
    }

    /// 本文素材を返す
    pub fn details(&self) -> &NoticeDetails {
        match self {
            Self::OrganizerNewRegistration { details, .. }
            | Self::OrganizerDeletedRegistration { details, .. } => details,
            Self::RegistrantNewRegistration { notice, .. }
            | Self::RegistrantAcceptedRegistration { notice }
            | Self::RegistrantPendingRegistration { notice }
            | Self::RegistrantDeletedRegistration { notice } => &notice.details,
        }
    }

    /// 参加者向け通知の共通部分を返す（運営者向けは `None`）
    pub fn registrant_notice(&self) -> Option<&RegistrantNotice> {
        match self {
            Self::OrganizerNewRegistration { .. } | Self::OrganizerDeletedRegistration { .. } => {
                None
            }
            Self::RegistrantNewRegistration { notice, .. }
            | Self::RegistrantAcceptedRegistration { notice }
            | Self::RegistrantPendingRegistration { notice }
            | Self::RegistrantDeletedRegistration { notice } => Some(notice),
        }
    }

    /// 宛先メールアドレスを返す
    pub fn recipients(&self) -> Vec<&Email> {
        match self {
            Self::OrganizerNewRegistration {
                delegate_emails, ..
            }
            | Self::OrganizerDeletedRegistration {
                delegate_emails, ..
            } => delegate_emails.iter().collect(),
            _ => self
                .registrant_notice()
                .map(|notice| vec![&notice.registrant_email])
                .unwrap_or_default(),
        }
    }

    /// 返信先メールアドレスを返す
    pub fn reply_to(&self) -> Vec<&Email> {
        match self {
            Self::OrganizerNewRegistration {
                registrant_email, ..
            } => vec![registrant_email],
            Self::OrganizerDeletedRegistration { manager_emails, .. } => {
                manager_emails.iter().collect()
            }
            _ => self
                .registrant_notice()
                .map(|notice| notice.manager_emails.iter().collect())
                .unwrap_or_default(),
        }
    }

    /// 件名を返す
    pub fn subject(&self) -> String {
        let NoticeDetails {
            competition_name,
            registrant_name,
            ..
        } = self.details();

        match self.event_type() {
            NotificationEventType::OrganizerNewRegistration => {
                format!("{registrant_name} just registered for {competition_name}")
            }
            NotificationEventType::OrganizerDeletedRegistration => {
                format!("{registrant_name} just deleted their registration for {competition_name}")
            }
            NotificationEventType::RegistrantNewRegistration => {
                format!("You have registered for {competition_name}")
            }
            NotificationEventType::RegistrantAcceptedRegistration => {
                format!("Your registration for {competition_name} has been approved!")
            }
            NotificationEventType::RegistrantPendingRegistration => {
                format!("You have been moved to the waiting list for {competition_name}")
            }
            NotificationEventType::RegistrantDeletedRegistration => {
                format!("Your registration for {competition_name} has been deleted")
            }
        }
    }

    /// 参加者向け通知の署名を返す（運営者向けは `None`）
    pub fn signature(&self) -> Option<&Signature> {
        self.registrant_notice().map(|notice| &notice.signature)
    }

    /// 待機リストの長さを返す（参加者向け新規エントリー通知のみ）
    pub fn waitlist_length(&self) -> Option<usize> {
        match self {
            Self::RegistrantNewRegistration {
                waitlist_length, ..
            } => Some(*waitlist_length),
            _ => None,
        }
    }
}
