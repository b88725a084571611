//! # Domain Layer
//!
//! 사용자 CRUD 서비스의 도메인 모델입니다.
//!
//! - [`entities`]: 저장소에 보관되는 엔티티 (`User`)
//! - [`dto`]: HTTP 경계에서만 쓰이는 요청 구조

pub mod entities;
pub mod dto;

pub use entities::users::User;
