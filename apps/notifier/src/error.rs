//! # Notifier エラー定義
//!
//! Notifier 固有のエラーと、HTTP レスポンスへの変換を定義する。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use regmail_domain::DomainError;
use regmail_shared::ErrorResponse;
use thiserror::Error;

/// Notifier で発生するエラー
#[derive(Debug, Error)]
pub enum NotifierError {
   /// 不正なリクエスト
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// ドメインモデルの構築に失敗
   #[error("ドメインエラー: {0}")]
   Domain(#[from] DomainError),
}

impl IntoResponse for NotifierError {
   fn into_response(self) -> Response {
      let body = match &self {
         NotifierError::BadRequest(msg) => ErrorResponse::bad_request(msg.clone()),
         NotifierError::Domain(DomainError::Validation(msg)) => {
            ErrorResponse::validation_error(msg.clone())
         }
      };

      let status =
         StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

      (status, Json(body)).into_response()
   }
}
