//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンで通知メールを HTML/plaintext 両形式で生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **テンプレート名 = イベント種別**: `{event_type}.html` / `{event_type}.txt`
//! - **エスケープ**: `.html` テンプレートのみ autoescape が有効。URL は `safe` フィルタで出力する
//! - **件名・宛先・返信先**: 通知記述子がすでに確定させたものをそのまま使う

use regmail_domain::{
    notification::{EmailMessage, NotificationError, RegistrationNotification, wording::pluralize},
    value_objects::Email,
};
use tera::{Context, Tera};

use super::NotificationLinks;

/// テンプレートレンダラー
///
/// tera テンプレートエンジンをラップし、`RegistrationNotification` から
/// `EmailMessage` を生成する。
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new() -> Result<Self, NotificationError> {
        Self::from_raw_templates(vec![
            (
                "organizer_new_registration.html",
                include_str!("../../../templates/notifications/organizer_new_registration.html"),
            ),
            (
                "organizer_new_registration.txt",
                include_str!("../../../templates/notifications/organizer_new_registration.txt"),
            ),
            (
                "organizer_deleted_registration.html",
                include_str!(
                    "../../../templates/notifications/organizer_deleted_registration.html"
                ),
            ),
            (
                "organizer_deleted_registration.txt",
                include_str!(
                    "../../../templates/notifications/organizer_deleted_registration.txt"
                ),
            ),
            (
                "registrant_new_registration.html",
                include_str!("../../../templates/notifications/registrant_new_registration.html"),
            ),
            (
                "registrant_new_registration.txt",
                include_str!("../../../templates/notifications/registrant_new_registration.txt"),
            ),
            (
                "registrant_accepted_registration.html",
                include_str!(
                    "../../../templates/notifications/registrant_accepted_registration.html"
                ),
            ),
            (
                "registrant_accepted_registration.txt",
                include_str!(
                    "../../../templates/notifications/registrant_accepted_registration.txt"
                ),
            ),
            (
                "registrant_pending_registration.html",
                include_str!(
                    "../../../templates/notifications/registrant_pending_registration.html"
                ),
            ),
            (
                "registrant_pending_registration.txt",
                include_str!(
                    "../../../templates/notifications/registrant_pending_registration.txt"
                ),
            ),
            (
                "registrant_deleted_registration.html",
                include_str!(
                    "../../../templates/notifications/registrant_deleted_registration.html"
                ),
            ),
            (
                "registrant_deleted_registration.txt",
                include_str!(
                    "../../../templates/notifications/registrant_deleted_registration.txt"
                ),
            ),
        ])
    }

    /// `(テンプレート名, 本文)` の組からレンダラーを作成する
    pub(crate) fn from_raw_templates(
        templates: Vec<(&str, &str)>,
    ) -> Result<Self, NotificationError> {
        let mut engine = Tera::default();
        engine
            .add_raw_templates(templates)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// 通知記述子からメールメッセージを生成する
    ///
    /// # 引数
    ///
    /// - `notification`: 通知先選定の結果
    /// - `links`: メール内リンクの生成器
    /// - `from_address`: 送信元メールアドレス（システム固定）
    pub fn render(
        &self,
        notification: &RegistrationNotification,
        links: &NotificationLinks,
        from_address: &str,
    ) -> Result<EmailMessage, NotificationError> {
        let template_name = notification.event_type().to_string();
        let context = build_context(notification, links);

        let html_body = self
            .engine
            .render(&format!("{template_name}.html"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        let text_body = self
            .engine
            .render(&format!("{template_name}.txt"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(EmailMessage {
            from: from_address.to_string(),
            to: addresses(notification.recipients()),
            reply_to: addresses(notification.reply_to()),
            subject: notification.subject(),
            html_body,
            text_body,
        })
    }
}

/// テンプレートコンテキストを構築する
fn build_context(notification: &RegistrationNotification, links: &NotificationLinks) -> Context {
    let details = notification.details();

    let mut context = Context::new();
    context.insert("competition_name", &details.competition_name);
    context.insert("registrant_name", &details.registrant_name);
    context.insert(
        "registration_edit_url",
        &links.registration_edit(&details.registration_id),
    );
    context.insert(
        "registration_status_url",
        &links.registration_status(&details.competition_id),
    );
    context.insert(
        "competition_registrations_url",
        &links.competition_registrations(&details.competition_id),
    );

    if let Some(signature) = notification.signature() {
        context.insert("signature", &signature.to_string());
    }
    if let Some(waitlist_length) = notification.waitlist_length() {
        context.insert(
            "waitlist_count",
            &pluralize(waitlist_length, "person", "people"),
        );
    }

    context
}

fn addresses(emails: Vec<&Email>) -> Vec<String> {
    emails.into_iter().map(|e| e.as_str().to_string()).collect()
}
