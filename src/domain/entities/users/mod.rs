//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(1, "gopi", "gopi@gmail.com", "1234567899", 23);
//! assert_eq!(user.id, 1);
//! ```

pub mod user;

pub use user::User;
