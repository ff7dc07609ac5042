//! # トレーシング初期化
//!
//! Notifier のログ出力を設定する。
//!
//! - `RUST_LOG`: フィルタ（未設定時は [`DEFAULT_DIRECTIVES`]）
//! - `LOG_FORMAT`: `json` / `pretty`
//!
//! [`init_tracing`] はサービス名を持つルートスパンを返す。
//! 呼び出し側は起動処理をこのスパンで `instrument` し、
//! 起動・設定まわりのログに `service` フィールドを載せる。
//!
//! ```rust,ignore
//! let span = init_tracing(TracingConfig::from_env("notifier"));
//! run(config).instrument(span).await
//! ```

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_DIRECTIVES: &str = "info,regmail=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 行 1 イベントの JSON（ログ基盤への取り込み用）
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値を解釈する。前後の空白と大文字小文字は無視する。
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// ルートスパンの `service` フィールド
    pub service_name:    String,
    pub log_format:      LogFormat,
    /// 解釈できなかった `LOG_FORMAT` の値（初期化後に警告ログを出す）
    pub rejected_format: Option<String>,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
            rejected_format: None,
        }
    }

    /// `LOG_FORMAT` 相当の値から設定を作る
    ///
    /// 未設定なら Pretty。解釈できない値も Pretty にして `rejected_format` に残す。
    pub fn from_log_format(service_name: impl Into<String>, raw: Option<&str>) -> Self {
        let mut config = Self::new(service_name, LogFormat::default());
        if let Some(raw) = raw {
            match LogFormat::from_value(raw) {
                Some(format) => config.log_format = format,
                None => config.rejected_format = Some(raw.to_string()),
            }
        }
        config
    }

    /// 環境変数 `LOG_FORMAT` から設定を読み取る
    pub fn from_env(service_name: impl Into<String>) -> Self {
        let raw = std::env::var("LOG_FORMAT").ok();
        Self::from_log_format(service_name, raw.as_deref())
    }
}

/// グローバルサブスクライバを登録し、サービスのルートスパンを返す
///
/// 2 回目以降の呼び出しはサブスクライバ登録に失敗して panic する。
/// プロセスの起動時に 1 度だけ呼ぶ。
#[cfg(feature = "observability")]
pub fn init_tracing(config: TracingConfig) -> tracing::Span {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_DIRECTIVES));

    // JSON ではスパン一覧を省き、直近スパン（service を含む）だけを出す
    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let span = tracing::info_span!("service", service = %config.service_name);

    if let Some(rejected) = &config.rejected_format {
        span.in_scope(|| {
            tracing::warn!(
                log_format = %rejected,
                "LOG_FORMAT を解釈できないため pretty で出力します"
            );
        });
    }

    span
}
