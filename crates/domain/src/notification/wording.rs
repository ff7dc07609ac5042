//! # 文面ヘルパー
//!
//! 通知本文で使う英語の言い回しを組み立てる純粋関数群。

use std::fmt;

/// 件数と名詞を単数形・複数形を使い分けて連結する
///
/// ```rust
/// use regmail_domain::notification::wording::pluralize;
///
/// assert_eq!(pluralize(1, "person", "people"), "1 person");
/// assert_eq!(pluralize(2, "person", "people"), "2 people");
/// assert_eq!(pluralize(0, "person", "people"), "0 people");
/// ```
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    let noun = if count == 1 { singular } else { plural };
    format!("{count} {noun}")
}

/// 要素を英語の列挙文（"A, B, and C"）に連結する
///
/// ```rust
/// use regmail_domain::notification::wording::to_sentence;
///
/// assert_eq!(to_sentence(&["A"]), "A");
/// assert_eq!(to_sentence(&["A", "B"]), "A and B");
/// assert_eq!(to_sentence(&["A", "B", "C"]), "A, B, and C");
/// ```
pub fn to_sentence<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head = init.iter().map(|s| s.as_ref()).collect::<Vec<&str>>().join(", ");
            format!("{head}, and {}", last.as_ref())
        }
    }
}

/// 参加者向け通知の署名
///
/// 管理者ロスターの表示名をアルファベット順に並べ、`Regards, A and B.` の形で出力する。
/// HTML エスケープは行わない（テンプレートエンジンの autoescape に任せる）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    names: Vec<String>,
}

impl Signature {
    /// 表示名から署名を作成する（入力順は問わない）
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut names: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        names.sort();
        Self { names }
    }

    /// ソート済みの表示名
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Regards, {}.", to_sentence(&self.names))
    }
}
