//! 사용자 CRUD 서비스 메인 애플리케이션
//!
//! 설정된 저장소(MongoDB 또는 메모리)를 초기화하고
//! Actix-web 기반 HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_crud_service::caching::redis::RedisClient;
use user_crud_service::config::{
    CacheConfig, CorsConfig, Environment, MongoConfig, RateLimitConfig, ServerConfig, StorageBackend,
};
use user_crud_service::db::Database;
use user_crud_service::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserRepository};
use user_crud_service::routes::configure_all_routes;
use user_crud_service::services::users::{UserService, UserServices};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    let environment = Environment::current();
    info!("🚀 사용자 CRUD 서비스 시작중... ({:?})", environment);

    let user_repo = initialize_repository().await?;
    let user_service: Arc<dyn UserServices> = Arc::new(UserService::new(user_repo));

    start_http_server(user_service, &environment).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 적용합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: Arc<dyn UserServices>, environment: &Environment) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("잘못된 Rate Limiting 설정 (0 값은 허용되지 않습니다)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let cors_config = CorsConfig::from_env(environment);
    let service_data = web::Data::from(user_service);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(service_data.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 실행되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ()),
        _ => dotenv().map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("프로필 '{}' 환경 파일 로드 실패: {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 설정된 백엔드에 맞는 사용자 리포지토리를 생성합니다
///
/// MongoDB 백엔드는 연결 확인과 인덱스 생성까지 마친 뒤 반환합니다.
/// `REDIS_URL`이 있으면 캐시를 붙이며, Redis 연결 실패는 캐시 없이 계속 진행합니다.
///
/// # Errors
///
/// * MongoDB 연결 또는 인덱스 생성 실패
async fn initialize_repository() -> io::Result<Arc<dyn UserRepository>> {
    match StorageBackend::current() {
        StorageBackend::Memory => {
            info!("💾 메모리 저장소 사용 (재시작 시 데이터 초기화)");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let mongo_config = MongoConfig::from_env();
            let database = Database::connect(&mongo_config)
                .await
                .map_err(|e| io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?;

            let cache = initialize_cache().await;
            let repo = MongoUserRepository::new(&database, &mongo_config.collection_name, cache);
            repo.create_indexes()
                .await
                .map_err(|e| io::Error::other(format!("인덱스 생성 실패: {}", e)))?;

            Ok(Arc::new(repo))
        }
    }
}

async fn initialize_cache() -> Option<Arc<RedisClient>> {
    let cache_config = CacheConfig::from_env()?;

    match RedisClient::connect(&cache_config).await {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            error!("Redis 연결 실패, 캐시 없이 진행합니다: {}", e);
            None
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 운영 환경에서는 `CORS_ALLOWED_ORIGINS`에 지정된 Origin만 허용하고,
/// 그 외 환경에서는 모든 Origin을 허용합니다.
fn configure_cors(config: &CorsConfig) -> Cors {
    let cors = if config.allow_any_origin {
        Cors::default().allow_any_origin()
    } else {
        config
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
