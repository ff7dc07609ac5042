//! # 大会
//!
//! 大会と、その運営者（デリゲート・オーガナイザー）を定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`Competition`] | 大会 | デリゲート 1 人以上、オーガナイザー 0 人以上 |
//! | [`Delegate`] | デリゲート | エントリー通知メールの受信可否を自分で設定できる |
//! | [`Official`] | 運営者 | 表示名とメールアドレスを持つ。オーガナイザーはこの型そのもの |
//! | [`ManagerRoster`] | 管理者ロスター | オーガナイザーがいればオーガナイザー、いなければデリゲート |

use crate::{
    DomainError,
    value_objects::{CompetitionName, Email, PersonName},
};

define_uuid_id! {
    /// 大会 ID（一意識別子）
    pub struct CompetitionId;
}

/// 運営者（表示名 + メールアドレス）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Official {
    name:  PersonName,
    email: Email,
}

impl Official {
    pub fn new(name: PersonName, email: Email) -> Self {
        Self { name, email }
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

/// デリゲート
///
/// `receives_registration_emails` が `false` のデリゲートは
/// 新規エントリーの運営者向け通知から除外される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delegate {
    official: Official,
    receives_registration_emails: bool,
}

impl Delegate {
    pub fn new(official: Official, receives_registration_emails: bool) -> Self {
        Self {
            official,
            receives_registration_emails,
        }
    }

    pub fn official(&self) -> &Official {
        &self.official
    }

    pub fn email(&self) -> &Email {
        self.official.email()
    }

    pub fn receives_registration_emails(&self) -> bool {
        self.receives_registration_emails
    }
}

/// 大会
///
/// # 不変条件
///
/// - デリゲートは 1 人以上
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competition {
    id:         CompetitionId,
    name:       CompetitionName,
    delegates:  Vec<Delegate>,
    organizers: Vec<Official>,
}

impl Competition {
    /// 大会を作成する
    ///
    /// # エラー
    ///
    /// デリゲートが空の場合は `DomainError::Validation` を返す。
    pub fn new(
        id: CompetitionId,
        name: CompetitionName,
        delegates: Vec<Delegate>,
        organizers: Vec<Official>,
    ) -> Result<Self, DomainError> {
        if delegates.is_empty() {
            return Err(DomainError::Validation(format!(
                "大会にはデリゲートが 1 人以上必要です: {id}"
            )));
        }

        Ok(Self {
            id,
            name,
            delegates,
            organizers,
        })
    }

    pub fn id(&self) -> &CompetitionId {
        &self.id
    }

    pub fn name(&self) -> &CompetitionName {
        &self.name
    }

    pub fn delegates(&self) -> &[Delegate] {
        &self.delegates
    }

    pub fn organizers(&self) -> &[Official] {
        &self.organizers
    }

    /// 全デリゲートのメールアドレス（受信設定は考慮しない）
    pub fn delegate_emails(&self) -> Vec<Email> {
        self.delegates.iter().map(|d| d.email().clone()).collect()
    }

    /// エントリー通知の受信を希望しているデリゲートのメールアドレス
    pub fn registration_email_recipients(&self) -> Vec<Email> {
        self.delegates
            .iter()
            .filter(|d| d.receives_registration_emails())
            .map(|d| d.email().clone())
            .collect()
    }

    /// 管理者ロスター（organizers_or_delegates）を返す
    pub fn managers(&self) -> ManagerRoster<'_> {
        if self.organizers.is_empty() {
            ManagerRoster::Delegates(&self.delegates)
        } else {
            ManagerRoster::Organizers(&self.organizers)
        }
    }
}

/// 管理者ロスター
///
/// 参加者向け通知の返信先と署名に使う運営者の集合。
/// オーガナイザーが 1 人以上いればオーガナイザー、いなければデリゲート。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerRoster<'a> {
    Organizers(&'a [Official]),
    Delegates(&'a [Delegate]),
}

impl<'a> ManagerRoster<'a> {
    /// ロスターの構成員（入力順）
    pub fn members(&self) -> Vec<&'a Official> {
        match *self {
            Self::Organizers(organizers) => organizers.iter().collect(),
            Self::Delegates(delegates) => delegates.iter().map(Delegate::official).collect(),
        }
    }

    /// 構成員のメールアドレス（入力順）
    pub fn emails(&self) -> Vec<Email> {
        self.members().into_iter().map(|m| m.email().clone()).collect()
    }

    /// 構成員の表示名（入力順）
    pub fn names(&self) -> Vec<&'a str> {
        self.members().into_iter().map(|m| m.name().as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;

    fn official(name: &str, email: &str) -> Official {
        Official::new(PersonName::new(name).unwrap(), Email::new(email).unwrap())
    }

    fn delegate(name: &str, email: &str, receives: bool) -> Delegate {
        Delegate::new(official(name, email), receives)
    }

    fn emails(values: &[&str]) -> Vec<Email> {
        values.iter().map(|v| Email::new(*v).unwrap()).collect()
    }

    #[fixture]
    fn delegates() -> Vec<Delegate> {
        vec![
            delegate("Daichi Mori", "daichi@example.com", true),
            delegate("Emi Kato", "emi@example.com", false),
        ]
    }

    fn make_competition(delegates: Vec<Delegate>, organizers: Vec<Official>) -> Competition {
        Competition::new(
            CompetitionId::new(),
            CompetitionName::new("Kanto Open 2026").unwrap(),
            delegates,
            organizers,
        )
        .unwrap()
    }

    #[test]
    fn test_デリゲートがいない大会は作成できない() {
        let result = Competition::new(
            CompetitionId::new(),
            CompetitionName::new("Kanto Open 2026").unwrap(),
            vec![],
            vec![official("Oscar Organizer", "oscar@example.com")],
        );

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[rstest]
    fn test_受信希望のデリゲートのみが通知先になる(delegates: Vec<Delegate>) {
        let sut = make_competition(delegates, vec![]);

        assert_eq!(
            sut.registration_email_recipients(),
            emails(&["daichi@example.com"])
        );
    }

    #[rstest]
    fn test_delegate_emailsは受信設定を無視する(delegates: Vec<Delegate>) {
        let sut = make_competition(delegates, vec![]);

        assert_eq!(
            sut.delegate_emails(),
            emails(&["daichi@example.com", "emi@example.com"])
        );
    }

    #[test]
    fn test_全デリゲートが受信を拒否すると通知先は空() {
        let sut = make_competition(
            vec![
                delegate("Daichi Mori", "daichi@example.com", false),
                delegate("Emi Kato", "emi@example.com", false),
            ],
            vec![],
        );

        assert!(sut.registration_email_recipients().is_empty());
    }

    #[rstest]
    fn test_オーガナイザーがいなければ管理者はデリゲート(delegates: Vec<Delegate>) {
        let sut = make_competition(delegates, vec![]);
        let managers = sut.managers();

        assert!(matches!(managers, ManagerRoster::Delegates(_)));
        assert_eq!(
            managers.emails(),
            emails(&["daichi@example.com", "emi@example.com"])
        );
        assert_eq!(managers.names(), vec!["Daichi Mori", "Emi Kato"]);
    }

    #[rstest]
    fn test_オーガナイザーがいれば管理者はオーガナイザー(delegates: Vec<Delegate>) {
        let sut = make_competition(
            delegates,
            vec![
                official("Yuki Ono", "yuki@example.com"),
                official("Akira Ueda", "akira@example.com"),
            ],
        );
        let managers = sut.managers();

        assert!(matches!(managers, ManagerRoster::Organizers(_)));
        assert_eq!(
            managers.emails(),
            emails(&["yuki@example.com", "akira@example.com"])
        );
        assert_eq!(managers.names(), vec!["Yuki Ono", "Akira Ueda"]);
    }
}
