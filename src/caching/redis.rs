//! Redis 캐시 클라이언트
//!
//! 값을 JSON 문자열로 직렬화해 저장하는 얇은 래퍼입니다.
//! 멀티플렉스 연결을 사용하므로 요청마다 새 TCP 연결을 만들지 않습니다.

use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use log::info;
use crate::config::CacheConfig;

/// `KEYS[2]`의 세대 값이 `ARGV[1]`과 같을 때만 `KEYS[1]`에 값을 기록
const SET_IF_GENERATION_SCRIPT: &str = r"
local current = redis.call('GET', KEYS[2])
if (current or '0') == ARGV[1] then
    redis.call('SET', KEYS[1], ARGV[2], 'EX', ARGV[3])
    return 1
end
return 0
";

#[derive(Clone)]
pub struct RedisClient {
    client: Client,
    ttl_seconds: u64,
}

impl RedisClient {
    pub async fn connect(config: &CacheConfig) -> Result<Self, redis::RedisError> {
        let client = Client::open(config.redis_url.as_str())?;

        // 연결 테스트 - PING 명령으로 서버 가용성 확인
        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        info!("✅ Redis 연결 성공 (TTL {}초)", config.ttl_seconds);

        Ok(Self {
            client,
            ttl_seconds: config.ttl_seconds,
        })
    }

    /// 설정된 기본 TTL (초)
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(key).await
    }

    /// 세대 카운터 조회. 키가 없으면 0
    pub async fn generation(&self, key: &str) -> Result<u64, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<u64> = conn.get(key).await?;
        Ok(value.unwrap_or(0))
    }

    pub async fn bump_generation(&self, key: &str) -> Result<u64, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.incr(key, 1u64).await
    }

    /// 조회 시점의 세대가 그대로일 때만 값을 저장합니다
    ///
    /// 그 사이 쓰기가 있었다면 저장하지 않고 `false`를 반환합니다.
    pub async fn set_if_generation<T: Serialize>(
        &self,
        key: &str,
        generation_key: &str,
        generation: u64,
        value: &T,
        seconds: u64,
    ) -> Result<bool, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;

        let script = redis::Script::new(SET_IF_GENERATION_SCRIPT);
        let stored: i32 = script
            .key(key)
            .key(generation_key)
            .arg(generation)
            .arg(json)
            .arg(seconds)
            .invoke_async(&mut conn)
            .await?;

        Ok(stored == 1)
    }
}
