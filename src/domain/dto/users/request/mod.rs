//! # 사용자 관련 요청 DTO 모듈
//!
//! 쿼리 문자열로 들어오는 사용자 요청 데이터를 정의합니다.
//! 본문으로 들어오는 생성/수정 요청은 [`User`](crate::domain::entities::users::User)
//! 엔티티를 그대로 사용합니다. 기존 클라이언트가 엔티티와 같은 JSON 형식을 보내기 때문입니다.

pub mod user_id_query;

pub use user_id_query::{UserIdQuery, INVALID_ID_MESSAGE};
