//! # Notifier 設定
//!
//! 環境変数から Notifier サーバーの設定を読み込む。
//!
//! 値の取得元はクロージャで差し替えられる（テストでは `HashMap` を渡す）。

use std::{env, str::FromStr};

use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// ポート番号として解釈できない
    #[error("{name} は有効なポート番号である必要があります: {value}")]
    InvalidPort { name: &'static str, value: String },

    /// 未知の送信バックエンド
    #[error("NOTIFICATION_BACKEND は smtp / ses / noop のいずれかである必要があります: {0}")]
    UnknownBackend(String),
}

/// Notifier サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// 通知設定
    pub notification: NotificationConfig,
}

/// 送信バックエンド
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationBackend {
    /// Mailpit（開発）/ SMTP サーバー経由で送信
    Smtp,
    /// Amazon SES v2 経由で送信（本番）
    Ses,
    /// 送信しない（ログ出力のみ）
    Noop,
}

/// 通知機能の設定
///
/// `NOTIFICATION_BACKEND` 環境変数で送信バックエンドを切り替える。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    /// 送信バックエンド
    pub backend:      NotificationBackend,
    /// SMTP ホスト（backend=smtp の場合に使用）
    pub smtp_host:    String,
    /// SMTP ポート（backend=smtp の場合に使用）
    pub smtp_port:    u16,
    /// 送信元メールアドレス
    pub from_address: String,
    /// フロントエンド URL（メール内リンク用）
    pub base_url:     String,
}

impl NotifierConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の取得元から設定を読み込む
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("NOTIFIER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_port(&lookup, "NOTIFIER_PORT", 3100)?,
            notification: NotificationConfig::from_lookup(&lookup)?,
        })
    }
}

impl NotificationConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("NOTIFICATION_BACKEND") {
            Some(value) => NotificationBackend::from_str(value.trim())
                .map_err(|_| ConfigError::UnknownBackend(value))?,
            None => NotificationBackend::Noop,
        };

        Ok(Self {
            backend,
            smtp_host: lookup("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
            smtp_port: parse_port(lookup, "SMTP_PORT", 1025)?,
            from_address: lookup("NOTIFICATION_FROM_ADDRESS")
                .unwrap_or_else(|| "notifications@regmail.example.com".to_string()),
            base_url: lookup("NOTIFICATION_BASE_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
        })
    }
}

fn parse_port<F>(lookup: &F, name: &'static str, default: u16) -> Result<u16, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<NotifierConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        NotifierConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_未設定ならデフォルト値を使う() {
        let config = load(&[]).unwrap();

        assert_eq!(
            config,
            NotifierConfig {
                host: "0.0.0.0".to_string(),
                port: 3100,
                notification: NotificationConfig {
                    backend:      NotificationBackend::Noop,
                    smtp_host:    "localhost".to_string(),
                    smtp_port:    1025,
                    from_address: "notifications@regmail.example.com".to_string(),
                    base_url:     "http://localhost:3000".to_string(),
                },
            }
        );
    }

    #[rstest]
    #[case("smtp", NotificationBackend::Smtp)]
    #[case("ses", NotificationBackend::Ses)]
    #[case("noop", NotificationBackend::Noop)]
    fn test_送信バックエンドを読み込む(
        #[case] value: &str,
        #[case] expected: NotificationBackend,
    ) {
        let config = load(&[("NOTIFICATION_BACKEND", value)]).unwrap();
        assert_eq!(config.notification.backend, expected);
    }

    #[test]
    fn test_未知の送信バックエンドはエラー() {
        let result = load(&[("NOTIFICATION_BACKEND", "sendgrid")]);
        assert_eq!(
            result,
            Err(ConfigError::UnknownBackend("sendgrid".to_string()))
        );
    }

    #[rstest]
    #[case("NOTIFIER_PORT")]
    #[case("SMTP_PORT")]
    fn test_ポート番号が不正ならエラー(#[case] name: &'static str) {
        let result = load(&[(name, "not-a-port")]);
        assert_eq!(
            result,
            Err(ConfigError::InvalidPort {
                name,
                value: "not-a-port".to_string(),
            })
        );
    }

    #[test]
    fn test_環境変数で値を上書きできる() {
        let config = load(&[
            ("NOTIFIER_HOST", "127.0.0.1"),
            ("NOTIFIER_PORT", "8080"),
            ("SMTP_HOST", "mailpit"),
            ("SMTP_PORT", "2525"),
            ("NOTIFICATION_FROM_ADDRESS", "noreply@kanto-open.example.com"),
            ("NOTIFICATION_BASE_URL", "https://regmail.example.com"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.notification.smtp_host, "mailpit");
        assert_eq!(config.notification.smtp_port, 2525);
        assert_eq!(
            config.notification.from_address,
            "noreply@kanto-open.example.com"
        );
        assert_eq!(config.notification.base_url, "https://regmail.example.com");
    }
}
