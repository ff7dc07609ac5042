//! # エントリー
//!
//! 大会へのエントリー（参加登録）と、通知生成に必要な読み取りコンテキストを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`Registration`] | エントリー | 大会と参加者に紐づく。状態と作成日時を持つ |
//! | [`RegistrationStatus`] | エントリー状態 | new / pending / accepted / deleted |
//! | [`RegistrationContext`] | 通知コンテキスト | 大会 + 対象エントリー + 同じ大会の他のエントリー |
//!
//! ## 待機リスト
//!
//! 承認待ち（new / pending）のエントリーのうち、作成日時が対象エントリー以前のものの数を
//! 待機リストの長さとする。対象エントリー自身も含む。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::{
    DomainError,
    competition::{Competition, CompetitionId},
    value_objects::{Email, PersonName},
};

define_uuid_id! {
    /// エントリー ID（一意識別子）
    pub struct RegistrationId;
}

/// エントリー状態
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RegistrationStatus {
    /// 新規（まだ運営者が確認していない）
    New,
    /// 承認待ち（待機リストに移動済み）
    Pending,
    /// 承認済み
    Accepted,
    /// 削除済み
    Deleted,
}

impl RegistrationStatus {
    /// 承認待ちとして待機リストに数えるかどうか
    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::New | Self::Pending)
    }
}

/// 参加者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registrant {
    name:  PersonName,
    email: Email,
}

impl Registrant {
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

/// エントリー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    id: RegistrationId,
    competition_id: CompetitionId,
    registrant: Registrant,
    status: RegistrationStatus,
    created_at: DateTime<Utc>,
}

impl Registration {
    pub fn new(
        id: RegistrationId,
        competition_id: CompetitionId,
        registrant: Registrant,
        status: RegistrationStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            competition_id,
            registrant,
            status,
            created_at,
        }
    }

    pub fn id(&self) -> &RegistrationId {
        &self.id
    }

    pub fn competition_id(&self) -> &CompetitionId {
        &self.competition_id
    }

    pub fn registrant(&self) -> &Registrant {
        &self.registrant
    }

    pub fn status(&self) -> RegistrationStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// 通知コンテキスト
///
/// 通知先選定の入力。呼び出し元がロード済みの大会・エントリーをまとめたもの。
///
/// # 不変条件
///
/// - 対象エントリーと他のエントリーはすべて同じ大会に属する
#[derive(Debug, Clone)]
pub struct RegistrationContext {
    competition: Competition,
    registration: Registration,
    competition_registrations: Vec<Registration>,
}

impl RegistrationContext {
    /// 通知コンテキストを作成する
    ///
    /// `competition_registrations` は対象エントリー自身を含んでいてもいなくてもよい。
    ///
    /// # エラー
    ///
    /// 大会が一致しないエントリーが含まれる場合は `DomainError::Validation` を返す。
    pub fn new(
        competition: Competition,
        registration: Registration,
        competition_registrations: Vec<Registration>,
    ) -> Result<Self, DomainError> {
        let mismatched = std::iter::once(&registration)
            .chain(competition_registrations.iter())
            .find(|r| r.competition_id() != competition.id());

        if let Some(r) = mismatched {
            return Err(DomainError::Validation(format!(
                "エントリー {} は大会 {} に属していません",
                r.id(),
                competition.id()
            )));
        }

        Ok(Self {
            competition,
            registration,
            competition_registrations,
        })
    }

    pub fn competition(&self) -> &Competition {
        &self.competition
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    pub fn competition_registrations(&self) -> &[Registration] {
        &self.competition_registrations
    }

    /// 待機リストの長さ
    ///
    /// 承認待ちのエントリーのうち、作成日時が対象エントリー以前（同時刻を含む）のものを数える。
    /// 対象エントリーは他のエントリー一覧に含まれていても 1 回だけ数える。
    pub fn waitlist_length(&self) -> usize {
        let target = &self.registration;

        self.competition_registrations
            .iter()
            .filter(|r| r.id() != target.id())
            .chain(std::iter::once(target))
            .filter(|r| r.status().is_awaiting() && r.created_at() <= target.created_at())
            .count()
    }
}
