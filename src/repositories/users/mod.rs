//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository) 트레이트와 두 가지 구현체를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let user_repo = InMemoryUserRepository::new();
//! user_repo.insert(user).await?;
//! let found = user_repo.find_by_email("gopi@gmail.com").await?;
//! ```

pub mod user_repo;
pub mod mongo_user_repo;
pub mod memory_user_repo;

pub use user_repo::UserRepository;
pub use mongo_user_repo::MongoUserRepository;
pub use memory_user_repo::InMemoryUserRepository;
