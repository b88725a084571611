//! 사용자 관리 서비스 모듈
//!
//! 사용자 레코드의 조회, 이메일 검증, 생성, 수정, 삭제 규칙을 구현합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::{UserService, UserServices};
//!
//! let user_service: Arc<dyn UserServices> = Arc::new(UserService::new(user_repo));
//! let users = user_service.fetch_all_user_details().await?;
//! ```

pub mod user_service;

pub use user_service::{UserService, UserServices};
