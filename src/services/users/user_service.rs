//! # 사용자 관리 서비스 구현
//!
//! 사용자 레코드의 비즈니스 규칙을 담당합니다.
//! HTTP에 대해서는 알지 못하며, 핸들러는 [`UserServices`] 트레이트를 통해서만 접근합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │  • ID 검증 (0 금지)                            │
//! │  • 이메일 검증 (형식 + 중복)                     │
//! │  • 없는 레코드 → NotFound                       │
//! └──────────────────────┬───────────────────────┘
//!                        │ Arc<dyn UserRepository>
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │   MongoUserRepository / InMemoryUserRepository │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## 검증 책임 분담
//!
//! 핸들러는 저장소 호출 전에 ID와 이메일을 먼저 검사합니다.
//! 서비스도 0 ID를 다시 거절하므로, 핸들러를 거치지 않는 호출자도 같은 규칙을 적용받습니다.

use std::sync::Arc;
use async_trait::async_trait;
use validator::ValidateEmail;
use crate::{
    core::errors::{AppError, AppResult},
    domain::entities::users::User,
    repositories::users::UserRepository,
};

/// 핸들러가 의존하는 사용자 서비스 기능
///
/// `main`에서 구현체를 `Arc`로 만들어 `web::Data<dyn UserServices>`로 주입합니다.
/// 테스트에서는 `MockUserServices`로 대체됩니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserServices: Send + Sync {
    /// ID로 사용자 조회. 없으면 `NotFound`
    async fn fetch_user_details_by_id(&self, id: i64) -> AppResult<User>;

    /// 저장 순서대로 전체 사용자 조회
    async fn fetch_all_user_details(&self) -> AppResult<Vec<User>>;

    /// 이메일이 올바른 형식이고 아직 사용되지 않았으면 `true`
    ///
    /// 검증 실패는 에러가 아니라 `Ok(false)`입니다. 저장소 실패만 `Err`를 반환합니다.
    async fn email_validation(&self, email: &str) -> AppResult<bool>;

    /// 새 사용자 저장
    async fn insert_user_details(&self, user: User) -> AppResult<()>;

    /// 같은 ID의 사용자 레코드를 통째로 교체
    async fn update_user_details(&self, user: User) -> AppResult<()>;

    /// ID로 사용자 삭제
    async fn delete_user_details_by_id(&self, id: i64) -> AppResult<()>;
}

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소 구현과 무관하게 동일한 규칙을 적용합니다.
///
/// ## 에러 처리 전략
///
/// - **ZeroId**: 생성/수정/삭제 대상 ID가 0
/// - **NotFound**: 조회/수정/삭제 대상이 없음
/// - **StorageFailure**: 저장소에서 올라온 에러 (메시지 원문 유지)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
/// let service = UserService::new(repo);
///
/// if service.email_validation("gopi@gmail.com").await? {
///     service.insert_user_details(user).await?;
/// }
/// ```
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    fn not_found(id: i64) -> AppError {
        AppError::NotFound(format!("user with id {} not found", id))
    }

    fn ensure_id(id: i64) -> AppResult<()> {
        if id == 0 {
            return Err(AppError::ZeroId);
        }
        Ok(())
    }
}

#[async_trait]
impl UserServices for UserService {
    async fn fetch_user_details_by_id(&self, id: i64) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    async fn fetch_all_user_details(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all().await
    }

    async fn email_validation(&self, email: &str) -> AppResult<bool> {
        if !email.validate_email() {
            log::debug!("Rejected malformed email: {}", email);
            return Ok(false);
        }

        let existing = self.user_repo.find_by_email(email).await?;
        Ok(existing.is_none())
    }

    async fn insert_user_details(&self, user: User) -> AppResult<()> {
        Self::ensure_id(user.id)?;

        let start_time = std::time::Instant::now();
        let id = user.id;
        self.user_repo.insert(user).await?;

        log::info!("User {} created in {:?}", id, start_time.elapsed());
        Ok(())
    }

    async fn update_user_details(&self, user: User) -> AppResult<()> {
        Self::ensure_id(user.id)?;

        let id = user.id;
        if !self.user_repo.replace(user).await? {
            return Err(Self::not_found(id));
        }

        log::info!("User {} updated", id);
        Ok(())
    }

    async fn delete_user_details_by_id(&self, id: i64) -> AppResult<()> {
        Self::ensure_id(id)?;

        if !self.user_repo.delete(id).await? {
            return Err(Self::not_found(id));
        }

        log::info!("User {} deleted", id);
        Ok(())
    }
}
