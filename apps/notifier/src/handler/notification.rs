//! # エントリー通知ハンドラ
//!
//! エントリー操作を行ったアプリケーションから通知依頼を受け付ける内部 API。
//!
//! ## エンドポイント
//!
//! - `POST /internal/notifications/registrations` - 通知イベントを受け付け、送信結果を返す
//!
//! リクエストには大会・対象エントリー・同じ大会の他のエントリーをすべて含める。
//! Notifier 自身はデータを保持しない。

use std::{str::FromStr, sync::Arc};

use axum::{Json, extract::State, response::IntoResponse};
use chrono::{DateTime, Utc};
use regmail_domain::{
   competition::{Competition, CompetitionId, Delegate, Official},
   notification::NotificationEventType,
   registration::{
      Registrant,
      Registration,
      RegistrationContext,
      RegistrationId,
      RegistrationStatus,
   },
   value_objects::{CompetitionName, Email, PersonName},
};
use regmail_shared::ApiResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
   error::NotifierError,
   usecase::{NotificationOutcome, NotificationService},
};

/// 通知 API の共有状態
pub struct NotificationState {
   pub service: NotificationService,
}

// --- リクエスト/レスポンス型 ---

/// 通知依頼リクエスト
#[derive(Debug, Deserialize)]
pub struct NotifyRegistrationRequest {
   pub event_type:                String,
   pub competition:               CompetitionDto,
   pub registration:              RegistrationDto,
   #[serde(default)]
   pub competition_registrations: Vec<RegistrationDto>,
}

/// 大会 DTO
#[derive(Debug, Deserialize)]
pub struct CompetitionDto {
   pub id:         Uuid,
   pub name:       String,
   pub delegates:  Vec<DelegateDto>,
   #[serde(default)]
   pub organizers: Vec<PersonDto>,
}

/// デリゲート DTO
#[derive(Debug, Deserialize)]
pub struct DelegateDto {
   pub name:                         String,
   pub email:                        String,
   pub receives_registration_emails: bool,
}

/// 氏名 + メールアドレス DTO（オーガナイザー・参加者）
#[derive(Debug, Deserialize)]
pub struct PersonDto {
   pub name:  String,
   pub email: String,
}

/// エントリー DTO
///
/// `competition_id` を省略した場合は、リクエストの大会に属するものとみなす。
/// `status` は不明な値を 400 Bad Request で返すため文字列で受け取る。
#[derive(Debug, Deserialize)]
pub struct RegistrationDto {
   pub id:             Uuid,
   pub competition_id: Option<Uuid>,
   pub status:         String,
   pub created_at:     DateTime<Utc>,
   pub registrant:     PersonDto,
}

/// 通知依頼レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct NotifyRegistrationResponse {
   pub outcome: String,
}

// --- DTO → ドメインモデル変換 ---

impl PersonDto {
   fn into_official(self) -> Result<Official, NotifierError> {
      Ok(Official::new(
         PersonName::new(self.name)?,
         Email::new(self.email)?,
      ))
   }

   fn into_registrant(self) -> Result<Registrant, NotifierError> {
      Ok(Registrant::new(
         PersonName::new(self.name)?,
         Email::new(self.email)?,
      ))
   }
}

impl DelegateDto {
   fn into_delegate(self) -> Result<Delegate, NotifierError> {
      let official = PersonDto {
         name:  self.name,
         email: self.email,
      }
      .into_official()?;
      Ok(Delegate::new(official, self.receives_registration_emails))
   }
}

impl CompetitionDto {
   fn into_competition(self) -> Result<Competition, NotifierError> {
      let delegates = self
         .delegates
         .into_iter()
         .map(DelegateDto::into_delegate)
         .collect::<Result<Vec<_>, _>>()?;
      let organizers = self
         .organizers
         .into_iter()
         .map(PersonDto::into_official)
         .collect::<Result<Vec<_>, _>>()?;

      Ok(Competition::new(
         CompetitionId::from_uuid(self.id),
         CompetitionName::new(self.name)?,
         delegates,
         organizers,
      )?)
   }
}

impl RegistrationDto {
   fn into_registration(self, default_competition_id: Uuid) -> Result<Registration, NotifierError> {
      let status = RegistrationStatus::from_str(&self.status).map_err(|_| {
         NotifierError::BadRequest(format!("不明なエントリー状態です: {}", self.status))
      })?;

      Ok(Registration::new(
         RegistrationId::from_uuid(self.id),
         CompetitionId::from_uuid(self.competition_id.unwrap_or(default_competition_id)),
         self.registrant.into_registrant()?,
         status,
         self.created_at,
      ))
   }
}

impl NotifyRegistrationRequest {
   /// イベント種別と通知コンテキストに変換する
   fn into_domain(self) -> Result<(NotificationEventType, RegistrationContext), NotifierError> {
      let event_type = NotificationEventType::from_str(&self.event_type).map_err(|_| {
         NotifierError::BadRequest(format!("不明な通知イベント種別です: {}", self.event_type))
      })?;

      let competition_id = self.competition.id;
      let competition = self.competition.into_competition()?;
      let registration = self.registration.into_registration(competition_id)?;
      let competition_registrations = self
         .competition_registrations
         .into_iter()
         .map(|r| r.into_registration(competition_id))
         .collect::<Result<Vec<_>, _>>()?;

      let ctx = RegistrationContext::new(competition, registration, competition_registrations)?;
      Ok((event_type, ctx))
   }
}

// --- ハンドラ ---

/// POST /internal/notifications/registrations
///
/// 通知先を選定してメールを送信する。送信失敗は 200 + `outcome: "failed"` で返す。
pub async fn notify_registration(
   State(state): State<Arc<NotificationState>>,
   Json(req): Json<NotifyRegistrationRequest>,
) -> Result<impl IntoResponse, NotifierError> {
   let (event_type, ctx) = req.into_domain()?;

   let outcome: NotificationOutcome = state.service.notify(event_type, &ctx).await;

   Ok(Json(ApiResponse::new(NotifyRegistrationResponse {
      outcome: outcome.to_string(),
   })))
}

#[cfg(test)]
mod tests {
   use axum::{
      Router,
      body::Body,
      http::{Method, Request, StatusCode},
      routing::post,
   };
   use pretty_assertions::assert_eq;
   use regmail_infra::mock::MockNotificationSender;
   use regmail_shared::ErrorResponse;
   use serde_json::{Value, json};
   use tower::ServiceExt;

   use super::*;
   use crate::usecase::{NotificationLinks, TemplateRenderer};

   const COMPETITION_ID: &str = "0190a0b4-7c2e-7d3f-8a1b-2c3d4e5f6a7b";

   // --- ヘルパー ---

   fn create_test_app(sender: MockNotificationSender) -> Router {
      let service = NotificationService::new(
         Arc::new(sender),
         TemplateRenderer::new().unwrap(),
         NotificationLinks::new("http://localhost:3000"),
         "notifications@regmail.example.com".to_string(),
      );
      let state = Arc::new(NotificationState { service });

      Router::new()
         .route(
            "/internal/notifications/registrations",
            post(notify_registration),
         )
         .with_state(state)
   }

   fn make_payload(event_type: &str) -> Value {
      json!({
         "event_type": event_type,
         "competition": {
            "id": COMPETITION_ID,
            "name": "Kanto Open 2026",
            "delegates": [
               { "name": "Daichi Mori", "email": "daichi@example.com", "receives_registration_emails": true },
               { "name": "Emi Kato", "email": "emi@example.com", "receives_registration_emails": false }
            ],
            "organizers": []
         },
         "registration": {
            "id": "0190a0b4-9d8c-7b6a-8f5e-4d3c2b1a0f9e",
            "status": "new",
            "created_at": "2026-03-01T09:00:00Z",
            "registrant": { "name": "Ken Ito", "email": "ken@example.com" }
         },
         "competition_registrations": [
            {
               "id": "0190a0b4-0000-7000-8000-000000000001",
               "competition_id": COMPETITION_ID,
               "status": "pending",
               "created_at": "2026-02-28T09:00:00Z",
               "registrant": { "name": "Mai Abe", "email": "mai@example.com" }
            }
         ]
      })
   }

   fn post_request(payload: &Value) -> Request<Body> {
      Request::builder()
         .method(Method::POST)
         .uri("/internal/notifications/registrations")
         .header("content-type", "application/json")
         .body(Body::from(serde_json::to_string(payload).unwrap()))
         .unwrap()
   }

   async fn response_body<T: serde::de::DeserializeOwned>(
      response: axum::http::Response<Body>,
   ) -> T {
      let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      serde_json::from_slice(&bytes).unwrap()
   }

   // --- テスト ---

   #[tokio::test]
   async fn test_運営者向け新規エントリー通知_200でsentが返る() {
      // Given
      let sender = MockNotificationSender::new();
      let sut = create_test_app(sender.clone());

      // When
      let response = sut
         .oneshot(post_request(&make_payload("organizer_new_registration")))
         .await
         .unwrap();

      // Then
      assert_eq!(response.status(), StatusCode::OK);
      let body: ApiResponse<NotifyRegistrationResponse> = response_body(response).await;
      assert_eq!(body.data.outcome, "sent");

      let sent = sender.sent_emails();
      assert_eq!(sent.len(), 1);
      assert_eq!(sent[0].to, vec!["daichi@example.com".to_string()]);
      assert_eq!(sent[0].reply_to, vec!["ken@example.com".to_string()]);
   }

   #[tokio::test]
   async fn test_参加者向け新規エントリー通知_待機リストに他のエントリーを含める() {
      // Given
      let sender = MockNotificationSender::new();
      let sut = create_test_app(sender.clone());

      // When
      let response = sut
         .oneshot(post_request(&make_payload("registrant_new_registration")))
         .await
         .unwrap();

      // Then
      assert_eq!(response.status(), StatusCode::OK);
      let sent = sender.sent_emails();
      assert_eq!(sent.len(), 1);
      assert!(
         sent[0]
            .text_body
            .contains("the waiting list currently holds 2 people.")
      );
   }

   #[tokio::test]
   async fn test_全デリゲートが受信拒否_200でsuppressedが返る() {
      // Given
      let sender = MockNotificationSender::new();
      let sut = create_test_app(sender.clone());
      let mut payload = make_payload("organizer_new_registration");
      payload["competition"]["delegates"][0]["receives_registration_emails"] = json!(false);

      // When
      let response = sut.oneshot(post_request(&payload)).await.unwrap();

      // Then
      assert_eq!(response.status(), StatusCode::OK);
      let body: ApiResponse<NotifyRegistrationResponse> = response_body(response).await;
      assert_eq!(body.data.outcome, "suppressed");
      assert!(sender.sent_emails().is_empty());
   }

   #[tokio::test]
   async fn test_送信失敗_200でfailedが返る() {
      // Given
      let sut = create_test_app(MockNotificationSender::failing());

      // When
      let response = sut
         .oneshot(post_request(&make_payload("registrant_pending_registration")))
         .await
         .unwrap();

      // Then
      assert_eq!(response.status(), StatusCode::OK);
      let body: ApiResponse<NotifyRegistrationResponse> = response_body(response).await;
      assert_eq!(body.data.outcome, "failed");
   }

   #[tokio::test]
   async fn test_不正なリクエスト_400でproblem_detailsが返る() {
      let cases = [
         // 不明なイベント種別
         (
            "/event_type",
            json!("registrant_cancelled_registration"),
            "https://regmail.example.com/errors/bad-request",
         ),
         // 不明なエントリー状態
         (
            "/registration/status",
            json!("waiting"),
            "https://regmail.example.com/errors/bad-request",
         ),
         // 同じ大会の他のエントリーの不明な状態
         (
            "/competition_registrations/0/status",
            json!("cancelled"),
            "https://regmail.example.com/errors/bad-request",
         ),
         // 大会名が空
         (
            "/competition/name",
            json!("   "),
            "https://regmail.example.com/errors/validation-error",
         ),
         // メールアドレス不正
         (
            "/registration/registrant/email",
            json!("not-an-email"),
            "https://regmail.example.com/errors/validation-error",
         ),
         // デリゲートなし
         (
            "/competition/delegates",
            json!([]),
            "https://regmail.example.com/errors/validation-error",
         ),
         // 別の大会のエントリー
         (
            "/competition_registrations/0/competition_id",
            json!("0190a0b4-ffff-7fff-8fff-ffffffffffff"),
            "https://regmail.example.com/errors/validation-error",
         ),
      ];

      for (pointer, value, expected_type) in cases {
         // Given
         let sender = MockNotificationSender::new();
         let sut = create_test_app(sender.clone());
         let mut payload = make_payload("organizer_new_registration");
         *payload.pointer_mut(pointer).unwrap() = value;

         // When
         let response = sut.oneshot(post_request(&payload)).await.unwrap();

         // Then
         assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{pointer}");
         let body: ErrorResponse = response_body(response).await;
         assert_eq!(body.error_type, expected_type);
         assert_eq!(body.status, 400);
         assert!(sender.sent_emails().is_empty());
      }
   }
}
