//! # ドメイン型生成マクロ
//!
//! 大会・エントリーの ID 型と、表示名の Newtype を生成する。

/// UUID v7 をラップする ID 型を定義する
///
/// `Display` は UUID のハイフン区切り表記のみを出力する。
/// メール内リンクのパスにそのまま埋め込まれるため、接頭辞などは付けない。
///
/// ```rust
/// use regmail_domain::registration::RegistrationId;
/// use uuid::Uuid;
///
/// let uuid = Uuid::parse_str("0190a0b4-9d8c-7b6a-8f5e-4d3c2b1a0f9e").unwrap();
/// let id = RegistrationId::from_uuid(uuid);
/// assert_eq!(id.to_string(), "0190a0b4-9d8c-7b6a-8f5e-4d3c2b1a0f9e");
/// ```
macro_rules! define_uuid_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
        $vis struct $Name(uuid::Uuid);

        impl $Name {
            /// 新しい ID を採番する（テストや呼び出し元での生成用）
            pub fn new() -> Self {
                Self(uuid::Uuid::now_v7())
            }

            /// 呼び出し元が採番済みの UUID から ID を作る
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }
        }

        impl Default for $Name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

/// 表示名の Newtype を定義する
///
/// 表示名はメールの件名（ヘッダ）と本文にそのまま差し込まれる。
/// `new()` は前後の空白を除去したうえで次の値を拒否する:
///
/// - 空文字列
/// - 改行・タブなどの制御文字を含む値（ヘッダの折り返しや注入を防ぐ）
/// - `max_chars` 文字を超える値
///
/// `&` や `<` などの記号はそのまま保持する（HTML エスケープはテンプレート側の責務）。
///
/// `debug: redacted` は人名用で、`Debug` 出力を `[REDACTED]` にして `Display` を生成しない。
/// `debug: plain` は `Debug` と `Display` の両方で値を出力する。
macro_rules! define_display_name {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:literal,
            max_chars: $max_chars:literal,
            debug: redacted $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        $vis struct $Name(String);

        impl std::fmt::Debug for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(concat!(stringify!($Name), "([REDACTED])"))
            }
        }

        _display_name_impl!($Name, $label, $max_chars);
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:literal,
            max_chars: $max_chars:literal,
            debug: plain $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
        $vis struct $Name(String);

        _display_name_impl!($Name, $label, $max_chars);
    };
}

/// `define_display_name!` の両アームで共有する実装
macro_rules! _display_name_impl {
    ($Name:ident, $label:literal, $max_chars:literal) => {
        impl $Name {
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into();
                let trimmed = value.trim();

                if trimmed.is_empty() {
                    return Err($crate::DomainError::Validation(
                        concat!($label, "は必須です").to_string(),
                    ));
                }
                if trimmed.chars().any(char::is_control) {
                    return Err($crate::DomainError::Validation(
                        concat!($label, "に改行などの制御文字は使えません").to_string(),
                    ));
                }
                if trimmed.chars().count() > $max_chars {
                    return Err($crate::DomainError::Validation(
                        concat!($label, "は ", $max_chars, " 文字以内である必要があります")
                            .to_string(),
                    ));
                }

                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $Name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}
