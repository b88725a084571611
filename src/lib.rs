//! 사용자 CRUD 서비스
//!
//! 사용자 레코드의 생성, 조회, 수정, 삭제, 목록 조회를 제공하는 HTTP 서비스입니다.
//! 입력 검증과 에러 보고 규칙은 기존 클라이언트와의 호환을 유지합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 클라이언트 지정 ID 기반 CRUD
//! - **이메일 검증**: 형식 검사 + 중복 검사
//! - **MongoDB**: 사용자 데이터 영구 저장
//! - **Redis**: 선택적 ID 조회 캐시
//! - **명시적 DI**: 서비스를 `web::Data<dyn UserServices>`로 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /user, /users, /insert, /update, /delete
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 해석/응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소 (또는 메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_crud_service::repositories::users::InMemoryUserRepository;
//! use user_crud_service::services::users::{UserService, UserServices};
//!
//! let service: Arc<dyn UserServices> =
//!     Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
//!
//! if service.email_validation("gopi@gmail.com").await? {
//!     service.insert_user_details(user).await?;
//! }
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
