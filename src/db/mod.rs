//! MongoDB 연결 관리
//!
//! 서비스 시작 시 한 번 연결하고 `ping` 명령으로 서버 가용성을 확인합니다.
//! `mongodb::Client`는 내부적으로 커넥션 풀을 가지므로 복제해서 공유합니다.

use mongodb::{bson::doc, options::ClientOptions, Client};
use log::info;
use crate::config::MongoConfig;

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    pub async fn connect(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // 애플리케이션 이름 설정 (서버 측 모니터링에서 식별용)
        client_options.app_name = Some("user_crud_service".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
