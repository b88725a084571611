//! 캐싱 계층 모듈
//!
//! MongoDB 사용자 조회 앞단의 read-through 캐시로 Redis를 사용합니다.
//! 캐시는 선택 사항이며 `REDIS_URL`이 설정된 경우에만 연결합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::connect(&cache_config).await?;
//! let generation = cache.generation("user:gen:2").await?;
//! cache.set_if_generation("user:id:2", "user:gen:2", generation, &user, cache.ttl_seconds()).await?;
//!
//! let cached: Option<User> = cache.get("user:id:2").await?;
//! cache.bump_generation("user:gen:2").await?;
//! cache.del("user:id:2").await?;
//! ```

pub mod redis;
