//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 요청을 해석하고 서비스를 호출한 뒤, 결과나 에러를 응답 본문으로 변환합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (curl, 기존 API 클라이언트)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 입력 해석, 응답 변환        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - ID/이메일 검증, 저장소 위임           ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - MongoDB / 메모리                ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환합니다.
//! `?`로 전파된 에러는 `AppError::error_response()`가 메시지 본문으로 변환합니다.
//!
//! ```rust,ignore
//! #[get("/user")]
//! pub async fn get_user_by_id(
//!     req: HttpRequest,
//!     service: web::Data<dyn UserServices>,
//! ) -> Result<HttpResponse, AppError> {
//!     let id = parse_id_query(&req)?;
//!     let user = service.fetch_user_details_by_id(id).await?;
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```
//!
//! ## 로깅
//!
//! 거절된 요청은 의미상 상태 코드와 함께 기록됩니다.
//! 클라이언트 입력 문제는 `warn`, 저장소 실패는 `error` 레벨입니다.

pub mod users;
