//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 사용하는 요청 데이터 구조를 정의하는 모듈입니다.
//!
//! ```text
//! dto/
//! └── users/
//!     └── request/
//!         └── user_id_query.rs   # ?id= 쿼리 파라미터
//! ```

pub mod users;
