//! # MongoDB 사용자 리포지토리
//!
//! 사용자 레코드를 MongoDB 컬렉션에 저장합니다.
//! 클라이언트가 지정한 `Id`를 문서의 `_id`로 사용하므로 ID 중복은
//! 드라이버의 duplicate key 에러로 보고됩니다.
//!
//! ## 특징
//!
//! - **Read-through 캐시**: Redis가 설정된 경우 ID 조회 결과를 캐싱
//! - **캐시 무효화**: 교체/삭제 시 세대 카운터(`user:gen:{id}`)를 올리고 해당 키 제거
//! - **세대 검사**: 조회 전에 읽은 세대가 그대로일 때만 캐시에 기록하므로,
//!   조회와 교체가 겹쳐도 교체 이전 문서가 캐시에 다시 들어가지 않음
//!   (세대 키는 만료시키지 않음)
//! - **장애 격리**: 캐시 실패는 경고 로그만 남기고 요청을 실패시키지 않음
//! - **이메일 유니크 인덱스**: 동시 요청 간 중복 이메일 저장을 저장소 수준에서 차단

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info, warn};
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use serde::{Deserialize, Serialize};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppResult,
    db::Database,
    domain::entities::users::User,
};
use super::user_repo::UserRepository;

/// MongoDB에 저장되는 사용자 문서
///
/// API의 `PascalCase` 키와 달리 저장소에서는 소문자 필드명을 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: i64,
    name: String,
    email: String,
    phone: String,
    age: i32,
}

impl From<User> for UserDocument {
    fn from(user: User) -> Self {
        let User { id, name, email, phone, age } = user;
        Self { id, name, email, phone, age }
    }
}

impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        let UserDocument { id, name, email, phone, age } = document;
        Self { id, name, email, phone, age }
    }
}

pub struct MongoUserRepository {
    collection: Collection<UserDocument>,

    cache: Option<Arc<RedisClient>>,
}

impl MongoUserRepository {
    pub fn new(db: &Database, collection_name: &str, cache: Option<Arc<RedisClient>>) -> Self {
        info!(
            "MongoUserRepository 초기화: {}.{} (캐시 {})",
            db.database_name(),
            collection_name,
            if cache.is_some() { "사용" } else { "미사용" }
        );

        Self {
            collection: db.get_database().collection(collection_name),
            cache,
        }
    }

    fn cache_key(id: i64) -> String {
        format!("user:id:{}", id)
    }

    fn generation_key(id: i64) -> String {
        format!("user:gen:{}", id)
    }

    async fn cached(&self, id: i64) -> Option<User> {
        let cache = self.cache.as_ref()?;

        match cache.get::<User>(&Self::cache_key(id)).await {
            Ok(user) => user,
            Err(e) => {
                warn!("캐시 조회 실패 (user {}): {}", id, e);
                None
            }
        }
    }

    /// 캐시에 기록할 수 있을 때만 현재 세대를 돌려줍니다
    async fn cache_generation(&self, id: i64) -> Option<u64> {
        let cache = self.cache.as_ref()?;

        match cache.generation(&Self::generation_key(id)).await {
            Ok(generation) => Some(generation),
            Err(e) => {
                warn!("캐시 세대 조회 실패 (user {}): {}", id, e);
                None
            }
        }
    }

    async fn store_in_cache(&self, user: &User, generation: u64) {
        if let Some(cache) = &self.cache {
            let result = cache
                .set_if_generation(
                    &Self::cache_key(user.id),
                    &Self::generation_key(user.id),
                    generation,
                    user,
                    cache.ttl_seconds(),
                )
                .await;

            match result {
                Ok(true) => {}
                Ok(false) => debug!("동시 쓰기로 캐시 저장 생략 (user {})", user.id),
                Err(e) => warn!("캐시 저장 실패 (user {}): {}", user.id, e),
            }
        }
    }

    async fn invalidate_cache(&self, id: i64) {
        if let Some(cache) = &self.cache {
            if let Err(e) = cache.bump_generation(&Self::generation_key(id)).await {
                warn!("캐시 세대 갱신 실패 (user {}): {}", id, e);
            }
            if let Err(e) = cache.del(&Self::cache_key(id)).await {
                warn!("캐시 무효화 실패 (user {}): {}", id, e);
            }
        }
    }

    /// 이메일 유니크 인덱스 생성
    ///
    /// 이미 같은 정의의 인덱스가 있으면 MongoDB가 그대로 성공을 반환합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection.create_index(email_index).await?;

        info!("✅ 사용자 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        if let Some(cached) = self.cached(id).await {
            return Ok(Some(cached));
        }

        // 문서 조회 전에 세대를 읽어야 이후 교체를 감지할 수 있음
        let generation = self.cache_generation(id).await;

        let user = self.collection
            .find_one(doc! { "_id": id })
            .await?
            .map(User::from);

        if let (Some(user), Some(generation)) = (&user, generation) {
            self.store_in_cache(user, generation).await;
        }

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let documents: Vec<UserDocument> = self.collection
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = self.collection
            .find_one(doc! { "email": email })
            .await?
            .map(User::from);

        Ok(user)
    }

    async fn insert(&self, user: User) -> AppResult<()> {
        self.collection
            .insert_one(UserDocument::from(user))
            .await?;

        Ok(())
    }

    async fn replace(&self, user: User) -> AppResult<bool> {
        let id = user.id;
        let result = self.collection
            .replace_one(doc! { "_id": id }, UserDocument::from(user))
            .await?;

        if result.matched_count > 0 {
            self.invalidate_cache(id).await;
        }

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = self.collection
            .delete_one(doc! { "_id": id })
            .await?;

        if result.deleted_count > 0 {
            self.invalidate_cache(id).await;
        }

        Ok(result.deleted_count > 0)
    }
}
