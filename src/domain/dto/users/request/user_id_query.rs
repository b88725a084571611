//! 사용자 식별자 쿼리 DTO
//!
//! `GET /user?id=2`, `DELETE /delete?id=2` 처럼 쿼리 문자열로 전달되는
//! 사용자 ID를 해석합니다.

use crate::core::errors::{AppError, AppResult};

/// 정수로 해석되지 않는 ID에 대해 클라이언트에 돌려주는 메시지
pub const INVALID_ID_MESSAGE: &str = "invalid parameter id";

/// `?id=` 쿼리 파라미터
///
/// 정수 변환은 [`UserIdQuery::parse_id`]에서 수행하므로 원본 문자열을 그대로 받습니다.
/// 파라미터가 없거나 정수가 아니면 같은 메시지로 거절합니다.
/// `?id=2&id=3`처럼 여러 번 주어지면 첫 번째 값만 사용합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdQuery {
    pub id: Option<String>,
}

impl UserIdQuery {
    /// 디코딩된 쿼리 쌍에서 첫 번째 `id` 값을 꺼냅니다
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let id = pairs
            .into_iter()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value);

        Self { id }
    }

    pub fn parse_id(&self) -> AppResult<i64> {
        self.id
            .as_deref()
            .and_then(|raw| raw.parse::<i64>().ok())
            .ok_or_else(|| AppError::InvalidInput(INVALID_ID_MESSAGE.to_string()))
    }
}
