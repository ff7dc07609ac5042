//! # 通知リンク
//!
//! メール本文に埋め込む絶対 URL を設定済みのベース URL から生成する。

use regmail_domain::{competition::CompetitionId, registration::RegistrationId};

/// 通知リンク生成
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationLinks {
    base_url: String,
}

impl NotificationLinks {
    /// ベース URL からリンク生成器を作成する（末尾の `/` は無視する）
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// エントリー編集ページ（運営者向け）
    pub fn registration_edit(&self, registration_id: &RegistrationId) -> String {
        format!("{}/registrations/{registration_id}/edit", self.base_url)
    }

    /// エントリー状況ページ（参加者向け）
    pub fn registration_status(&self, competition_id: &CompetitionId) -> String {
        format!("{}/competitions/{competition_id}/register", self.base_url)
    }

    /// 大会のエントリー一覧ページ（運営者向け）
    pub fn competition_registrations(&self, competition_id: &CompetitionId) -> String {
        format!("{}/competitions/{competition_id}/registrations", self.base_url)
    }
}
