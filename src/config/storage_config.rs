//! 저장소 설정
//!
//! 저장소 백엔드 선택과 MongoDB, Redis 연결 정보를 환경 변수에서 읽어옵니다.

use std::env;
use super::server_config::parse_env_or;

/// 사용자 레코드를 보관할 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// MongoDB 컬렉션 (기본값)
    MongoDb,
    /// 프로세스 메모리. 재시작하면 데이터가 사라집니다
    Memory,
}

impl StorageBackend {
    pub fn current() -> Self {
        Self::from_str(&env::var("STORAGE_BACKEND").unwrap_or_default())
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }
}

/// MongoDB 연결 설정
///
/// * `MONGODB_URI` - 연결 문자열 (기본값: `mongodb://localhost:27017`)
/// * `DATABASE_NAME` - 데이터베이스 이름 (기본값: `user_crud_dev`)
/// * `USER_COLLECTION` - 사용자 컬렉션 이름 (기본값: `users`)
#[derive(Debug, Clone, PartialEq)]
pub struct MongoConfig {
    pub uri: String,
    pub database_name: String,
    pub collection_name: String,
}

impl MongoConfig {
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "user_crud_dev".to_string()),
            collection_name: env::var("USER_COLLECTION")
                .unwrap_or_else(|_| "users".to_string()),
        }
    }
}

/// Redis 캐시 설정
///
/// `REDIS_URL`이 설정된 경우에만 캐시가 활성화됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    pub redis_url: String,
    pub ttl_seconds: u64,
}

impl CacheConfig {
    pub fn from_env() -> Option<Self> {
        let redis_url = env::var("REDIS_URL").ok().filter(|url| !url.trim().is_empty())?;

        Some(Self {
            redis_url,
            ttl_seconds: parse_env_or("CACHE_TTL_SECONDS", 600),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_from_string() {
        assert_eq!(StorageBackend::from_str("memory"), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str(" In-Memory "), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str("mongodb"), StorageBackend::MongoDb);
        assert_eq!(StorageBackend::from_str(""), StorageBackend::MongoDb);
    }

    #[test]
    fn test_mongo_config_defaults() {
        let config = MongoConfig::from_env();

        if env::var("MONGODB_URI").is_err() {
            assert_eq!(config.uri, "mongodb://localhost:27017");
        }
        if env::var("USER_COLLECTION").is_err() {
            assert_eq!(config.collection_name, "users");
        }
    }
}
