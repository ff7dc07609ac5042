//! SMTP 通知送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! 開発環境では Mailpit（ローカル SMTP サーバー）に接続する。

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Mailbox, Message, MultiPart, SinglePart, header::ContentType},
};
use regmail_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

/// SMTP 通知送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
/// 送信元アドレスは [`EmailMessage::from`] を使う。
pub struct SmtpNotificationSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpNotificationSender {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `host`: SMTP サーバーのホスト名（例: "localhost"）
    /// - `port`: SMTP サーバーのポート番号（例: 1025 for Mailpit）
    pub fn new(host: &str, port: u16) -> Self {
        // builder_dangerous: TLS なしで接続（Mailpit 等のローカル SMTP 向け）
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self { transport }
    }
}

/// lettre のメッセージを組み立てる
///
/// 宛先・返信先は複数指定でき、それぞれ `To` / `Reply-To` ヘッダに並ぶ。
fn build_message(email: &EmailMessage) -> Result<Message, NotificationError> {
    if email.to.is_empty() {
        return Err(NotificationError::SendFailed("宛先が空です".to_string()));
    }

    let mut builder = Message::builder()
        .from(parse_mailbox(&email.from, "送信元")?)
        .subject(&email.subject);

    for to in &email.to {
        builder = builder.to(parse_mailbox(to, "宛先")?);
    }
    for reply_to in &email.reply_to {
        builder = builder.reply_to(parse_mailbox(reply_to, "返信先")?);
    }

    builder
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(email.text_body.clone()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(email.html_body.clone()),
                ),
        )
        .map_err(|e| NotificationError::SendFailed(format!("メッセージ構築失敗: {e}")))
}

fn parse_mailbox(address: &str, label: &str) -> Result<Mailbox, NotificationError> {
    address
        .parse()
        .map_err(|e| NotificationError::SendFailed(format!("{label}アドレス不正 ({address}): {e}")))
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let message = build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SMTP 送信失敗: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_email() -> EmailMessage {
        EmailMessage {
            from:      "notifications@regmail.example.com".to_string(),
            to:        vec!["ken@example.com".to_string()],
            reply_to:  vec![
                "yuki@example.com".to_string(),
                "akira@example.com".to_string(),
            ],
            subject:   "You have registered for Kanto Open 2026".to_string(),
            html_body: "<p>Regards, Akira Ueda and Yuki Ono.</p>".to_string(),
            text_body: "Regards, Akira Ueda and Yuki Ono.".to_string(),
        }
    }

    #[test]
    fn トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SmtpNotificationSender>();
    }

    #[test]
    fn 複数の返信先がreply_toヘッダに含まれる() {
        let message = build_message(&make_email()).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(formatted.contains("ken@example.com"));
        assert!(formatted.contains("yuki@example.com"));
        assert!(formatted.contains("akira@example.com"));
        assert!(formatted.contains("Reply-To:"));
    }

    #[test]
    fn 宛先が空ならエラーを返す() {
        let email = EmailMessage {
            to: vec![],
            ..make_email()
        };

        let result = build_message(&email);
        assert!(matches!(result, Err(NotificationError::SendFailed(_))));
    }

    #[test]
    fn 不正な宛先アドレスはエラーを返す() {
        let email = EmailMessage {
            to: vec!["not an address".to_string()],
            ..make_email()
        };

        let err = build_message(&email).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("メール送信に失敗: 宛先アドレス不正")
        );
    }
}
