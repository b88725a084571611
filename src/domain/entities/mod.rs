//! # Domain Entities
//!
//! 저장소에 영구 저장되는 도메인 엔티티 모듈입니다.
//! 현재는 [`users::User`] 하나만 존재합니다.

pub mod users;
