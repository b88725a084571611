//! # Core Module
//!
//! 모든 계층이 공유하는 기반 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 입력 해석, 비즈니스 규칙, 저장소 실패를 구분하는 태그형 에러
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 메시지 본문 응답
//!
//! 서비스 인스턴스는 전역 레지스트리 없이 `main`에서 생성해
//! `web::Data<dyn UserServices>`로 핸들러에 주입합니다.

pub mod errors;

pub use errors::*;
