//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 명시적으로 생성되어 핸들러에 주입됩니다. 전역 싱글톤은 사용하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_repo);
//! ```

pub mod users;
