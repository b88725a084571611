//! 사용자 도메인 DTO

pub mod request;
