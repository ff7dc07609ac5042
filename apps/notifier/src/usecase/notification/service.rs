//! # 通知サービス
//!
//! 通知先選定 → テンプレートレンダリング → メール送信を統合するサービス。
//!
//! ## 設計方針
//!
//! - **fire-and-forget**: `notify()` は送信失敗してもエラーを返さず、結果を [`NotificationOutcome`] で返す
//! - **送信抑止**: 通知先選定が `None` を返した場合は送信せず、ビジネスイベントとして記録する
//! - **依存性注入**: `NotificationSender` は trait で抽象化

use std::sync::Arc;

use itertools::Itertools;
use regmail_domain::{
    notification::{NotificationEventType, selector},
    registration::RegistrationContext,
};
use regmail_infra::notification::NotificationSender;
use regmail_shared::{event_log::event, log_business_event};
use serde::Serialize;

use super::{NotificationLinks, TemplateRenderer};

/// 通知処理の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationOutcome {
    /// 送信に成功
    Sent,
    /// 宛先がいないため送信しなかった
    Suppressed,
    /// レンダリングまたは送信に失敗
    Failed,
}

/// 通知サービス
///
/// エントリー操作に伴うメール通知の全体フローを統合する。
pub struct NotificationService {
    sender: Arc<dyn NotificationSender>,
    template_renderer: TemplateRenderer,
    links: NotificationLinks,
    from_address: String,
}

impl NotificationService {
    pub fn new(
        sender: Arc<dyn NotificationSender>,
        template_renderer: TemplateRenderer,
        links: NotificationLinks,
        from_address: String,
    ) -> Self {
        Self {
            sender,
            template_renderer,
            links,
            from_address,
        }
    }

    /// 通知を送信する（fire-and-forget）
    ///
    /// 通知先選定 → テンプレートレンダリング → メール送信を行う。
    /// いずれのステップで失敗してもエラーを返さない（ログ出力のみ）。
    pub async fn notify(
        &self,
        event_type: NotificationEventType,
        ctx: &RegistrationContext,
    ) -> NotificationOutcome {
        let event_type_str: &str = event_type.into();
        let registration_id = ctx.registration().id();

        let Some(notification) = selector::select(event_type, ctx) else {
            log_business_event!(
                event.category = event::category::NOTIFICATION,
                event.action = event::action::NOTIFICATION_SUPPRESSED,
                event.entity_type = event::entity_type::REGISTRATION,
                event.entity_id = %registration_id,
                event.result = event::result::SKIPPED,
                notification.event_type = event_type_str,
                "通知先がいないため送信を抑止"
            );
            return NotificationOutcome::Suppressed;
        };

        // テンプレートレンダリング
        let email = match self
            .template_renderer
            .render(&notification, &self.links, &self.from_address)
        {
            Ok(email) => email,
            Err(e) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_FAILED,
                    event.entity_type = event::entity_type::REGISTRATION,
                    event.entity_id = %registration_id,
                    event.result = event::result::FAILURE,
                    notification.event_type = event_type_str,
                    error = %e,
                    "通知テンプレートのレンダリングに失敗"
                );
                return NotificationOutcome::Failed;
            }
        };

        let recipients = email.to.iter().join(", ");

        // メール送信
        match self.sender.send_email(&email).await {
            Ok(()) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_SENT,
                    event.entity_type = event::entity_type::REGISTRATION,
                    event.entity_id = %registration_id,
                    event.result = event::result::SUCCESS,
                    notification.event_type = event_type_str,
                    notification.recipients = %recipients,
                    "通知メール送信成功"
                );
                NotificationOutcome::Sent
            }
            Err(e) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_FAILED,
                    event.entity_type = event::entity_type::REGISTRATION,
                    event.entity_id = %registration_id,
                    event.result = event::result::FAILURE,
                    notification.event_type = event_type_str,
                    notification.recipients = %recipients,
                    error = %e,
                    "通知メール送信失敗"
                );
                NotificationOutcome::Failed
            }
        }
    }
}
