//! 애플리케이션 설정 모듈
//!
//! 모든 설정은 환경 변수에서 읽습니다. `main`이 실행 프로필에 맞는
//! `.env` 파일을 먼저 로드하므로, 파일과 실제 환경 변수 모두 사용할 수 있습니다.
//!
//! - [`server_config`]: 실행 환경, 바인드 주소, 워커 수, CORS, Rate Limiting
//! - [`storage_config`]: 저장소 백엔드, MongoDB, Redis 캐시

pub mod server_config;
pub mod storage_config;

pub use server_config::*;
pub use storage_config::*;
