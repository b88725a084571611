//! 메모리 기반 사용자 리포지토리
//!
//! 로컬 개발(`STORAGE_BACKEND=memory`)과 테스트용 구현입니다.
//! 삽입 순서를 유지하므로 전체 조회 결과가 저장 순서와 같습니다.

use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;
use super::user_repo::UserRepository;

#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 데이터를 가진 저장소 생성
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: User) -> AppResult<()> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.id == user.id) {
            return Err(AppError::StorageFailure(format!(
                "user with id {} already exists",
                user.id
            )));
        }

        log::debug!("Inserted user {} into memory store", user.id);
        users.push(user);
        Ok(())
    }

    async fn replace(&self, user: User) -> AppResult<bool> {
        let mut users = self.users.write().await;

        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                *existing = user;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() != before)
    }
}
