//! # 사용자 리포지토리 포트
//!
//! 서비스 계층이 의존하는 저장소 인터페이스입니다.
//! 구현체는 MongoDB([`MongoUserRepository`](super::mongo_user_repo::MongoUserRepository))와
//! 메모리([`InMemoryUserRepository`](super::memory_user_repo::InMemoryUserRepository)) 두 가지입니다.
//!
//! 모든 메서드는 저장소 자체의 실패만 `Err`로 보고합니다.
//! "찾지 못함"은 `None`/`false`로 돌려주고, 의미 부여는 서비스 계층이 담당합니다.

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::users::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ID로 사용자 조회
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// 저장 순서대로 전체 사용자 조회
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// 이메일이 정확히 일치하는 사용자 조회
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 새 사용자 저장. 같은 ID가 이미 있으면 `StorageFailure`
    async fn insert(&self, user: User) -> AppResult<()>;

    /// 같은 ID의 레코드를 통째로 교체. 대상이 없으면 `Ok(false)`
    async fn replace(&self, user: User) -> AppResult<bool>;

    /// ID로 삭제. 대상이 없으면 `Ok(false)`
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
