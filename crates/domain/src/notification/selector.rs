//! # 通知先選定
//!
//! エントリー通知の宛先・返信先・本文素材を決める純粋関数群。
//!
//! | 関数 | 宛先 | 返信先 |
//! |------|------|--------|
//! | [`organizer_new_registration_notice`] | 受信希望のデリゲート（0 人なら送信しない） | 参加者 |
//! | [`organizer_deleted_registration_notice`] | 全デリゲート | 管理者ロスター |
//! | [`registrant_new_registration_notice`] | 参加者 | 管理者ロスター |
//! | [`registrant_accepted_registration_notice`] | 参加者 | 管理者ロスター |
//! | [`registrant_pending_registration_notice`] | 参加者 | 管理者ロスター |
//! | [`registrant_deleted_registration_notice`] | 参加者 | 管理者ロスター |
//!
//! 送信を抑止するのは運営者向け新規エントリー通知で宛先が 0 件の場合のみ。
//! エントリー削除の運営者向け通知には受信設定を適用しない。

use super::{
    NoticeDetails,
    NotificationEventType,
    RegistrantNotice,
    RegistrationNotification,
    Signature,
};
use crate::registration::RegistrationContext;

/// 通知イベント種別に対応する選定関数を呼び出す
///
/// `None` は「送信しない」を表す。
pub fn select(
    event_type: NotificationEventType,
    ctx: &RegistrationContext,
) -> Option<RegistrationNotification> {
    match event_type {
        NotificationEventType::OrganizerNewRegistration => organizer_new_registration_notice(ctx),
        NotificationEventType::OrganizerDeletedRegistration => {
            Some(organizer_deleted_registration_notice(ctx))
        }
        NotificationEventType::RegistrantNewRegistration => {
            Some(registrant_new_registration_notice(ctx))
        }
        NotificationEventType::RegistrantAcceptedRegistration => {
            Some(registrant_accepted_registration_notice(ctx))
        }
        NotificationEventType::RegistrantPendingRegistration => {
            Some(registrant_pending_registration_notice(ctx))
        }
        NotificationEventType::RegistrantDeletedRegistration => {
            Some(registrant_deleted_registration_notice(ctx))
        }
    }
}

/// 新規エントリー（運営者向け）
///
/// 受信希望のデリゲートが 1 人もいなければ `None`。
pub fn organizer_new_registration_notice(
    ctx: &RegistrationContext,
) -> Option<RegistrationNotification> {
    let delegate_emails = ctx.competition().registration_email_recipients();
    if delegate_emails.is_empty() {
        return None;
    }

    Some(RegistrationNotification::OrganizerNewRegistration {
        details: notice_details(ctx),
        delegate_emails,
        registrant_email: ctx.registration().registrant().email().clone(),
    })
}

/// エントリー削除（運営者向け）
pub fn organizer_deleted_registration_notice(ctx: &RegistrationContext) -> RegistrationNotification {
    RegistrationNotification::OrganizerDeletedRegistration {
        details:         notice_details(ctx),
        delegate_emails: ctx.competition().delegate_emails(),
        manager_emails:  ctx.competition().managers().emails(),
    }
}

/// 新規エントリー（参加者向け）
pub fn registrant_new_registration_notice(ctx: &RegistrationContext) -> RegistrationNotification {
    RegistrationNotification::RegistrantNewRegistration {
        notice:          registrant_notice(ctx),
        waitlist_length: ctx.waitlist_length(),
    }
}

/// エントリー承認（参加者向け）
pub fn registrant_accepted_registration_notice(
    ctx: &RegistrationContext,
) -> RegistrationNotification {
    RegistrationNotification::RegistrantAcceptedRegistration {
        notice: registrant_notice(ctx),
    }
}

/// 待機リストへの移動（参加者向け）
pub fn registrant_pending_registration_notice(
    ctx: &RegistrationContext,
) -> RegistrationNotification {
    RegistrationNotification::RegistrantPendingRegistration {
        notice: registrant_notice(ctx),
    }
}

/// エントリー削除（参加者向け）
pub fn registrant_deleted_registration_notice(
    ctx: &RegistrationContext,
) -> RegistrationNotification {
    RegistrationNotification::RegistrantDeletedRegistration {
        notice: registrant_notice(ctx),
    }
}

fn notice_details(ctx: &RegistrationContext) -> NoticeDetails {
    let competition = ctx.competition();
    let registration = ctx.registration();

    NoticeDetails {
        competition_id:   competition.id().clone(),
        competition_name: competition.name().as_str().to_string(),
        registration_id:  registration.id().clone(),
        registrant_name:  registration.registrant().name().as_str().to_string(),
    }
}

fn registrant_notice(ctx: &RegistrationContext) -> RegistrantNotice {
    let managers = ctx.competition().managers();

    RegistrantNotice {
        details:          notice_details(ctx),
        registrant_email: ctx.registration().registrant().email().clone(),
        manager_emails:   managers.emails(),
        signature:        Signature::from_names(managers.names().as_slice()),
    }
}
