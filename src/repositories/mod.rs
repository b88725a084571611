//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`users::UserRepository`] 트레이트에만 의존하며,
//! 실제 저장소는 `STORAGE_BACKEND` 설정에 따라 `main`에서 선택됩니다.
//!
//! # Features
//!
//! - MongoDB 영구 저장 + 선택적 Redis 캐싱
//! - 개발/테스트용 메모리 저장소

pub mod users;
