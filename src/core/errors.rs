//! # Application Error Handling System
//!
//! 사용자 CRUD 서비스의 통합 에러 타입입니다.
//! 모든 계층이 `Result<T, AppError>`를 반환하고, HTTP 경계에서
//! [`actix_web::ResponseError`] 구현이 에러를 응답 본문으로 변환합니다.
//!
//! ## 응답 규칙
//!
//! 기존 클라이언트는 상태 코드가 아니라 본문 텍스트로 성공/실패를 구분합니다.
//! 따라서 모든 에러는 `200 OK`와 함께 메시지 원문을 `text/plain`으로 돌려줍니다.
//! 각 에러의 의미상 상태 코드는 [`AppError::semantic_status`]로 조회할 수 있으며
//! 로그 레벨 결정에 사용됩니다.
//!
//! | AppError | 본문 | 의미상 상태 |
//! |----------|------|-------------|
//! | `InvalidInput` | 전달된 메시지 (`invalid parameter id` 등) | 400 |
//! | `ZeroId` | `Id shouldn't be zero` | 400 |
//! | `DuplicateEmail` | `email already present - could not create user` | 409 |
//! | `NotFound` | 전달된 메시지 | 404 |
//! | `StorageFailure` | 저장소 에러 메시지 원문 | 500 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn delete(&self, id: i64) -> AppResult<()> {
//!     if id == 0 {
//!         return Err(AppError::ZeroId);
//!     }
//!     if !self.user_repo.delete(id).await? {
//!         return Err(AppError::NotFound(format!("user {} not found", id)));
//!     }
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 입력 해석 실패, 비즈니스 규칙 위반, 저장소 실패를 구분합니다.
/// 메시지 원문이 곧 클라이언트와의 계약이므로 `Display` 출력에 접두어를 붙이지 않습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 쿼리 파라미터나 요청 본문을 해석할 수 없음
    #[error("{0}")]
    InvalidInput(String),

    /// 생성/수정/삭제 요청의 ID가 0
    #[error("Id shouldn't be zero")]
    ZeroId,

    /// 이메일 형식이 잘못되었거나 이미 사용 중
    #[error("email already present - could not create user")]
    DuplicateEmail,

    /// 요청한 사용자가 존재하지 않음
    #[error("{0}")]
    NotFound(String),

    /// MongoDB, Redis 등 저장 계층에서 발생한 에러
    ///
    /// 드라이버 메시지를 가공하지 않고 그대로 전달합니다.
    #[error("{0}")]
    StorageFailure(String),
}

impl AppError {
    /// 에러 종류에 대응하는 HTTP 상태 코드
    ///
    /// 실제 응답은 항상 200이며, 이 값은 로깅과 운영 지표에만 쓰입니다.
    pub fn semantic_status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::ZeroId => StatusCode::BAD_REQUEST,
            AppError::DuplicateEmail => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StorageFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트 요청 때문에 발생한 에러인지 여부
    pub fn is_client_error(&self) -> bool {
        self.semantic_status().is_client_error()
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::StorageFailure(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
