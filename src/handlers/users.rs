//! # User Management HTTP Handlers
//!
//! 사용자 CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 핸들러는 같은 절차를 따릅니다.
//!
//! 1. 입력 추출: 조회/삭제는 쿼리 문자열의 `id`, 생성/수정은 JSON 본문 전체
//! 2. 해석 실패: `invalid parameter id` 또는 JSON 디코더 메시지로 즉시 응답
//! 3. `Id == 0` (생성/수정/삭제): `Id shouldn't be zero`로 즉시 응답
//! 4. 생성/수정: 이메일 검증이 `false`면 `email already present - could not create user`
//! 5. 서비스 호출 결과를 텍스트 또는 JSON으로 응답
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 입력 | 성공 응답 |
//! |--------|------|------|-----------|
//! | `GET` | `/user?id={int}` | 쿼리 id | JSON User |
//! | `GET` | `/users` | 없음 | JSON User 배열 |
//! | `POST` | `/insert` | JSON User | `User created` |
//! | `PUT` | `/update` | JSON User | `User updated` |
//! | `DELETE` | `/delete?id={int}` | 쿼리 id | `User deleted successfully` |
//!
//! ## 상태 코드
//!
//! 기존 클라이언트와의 호환을 위해 실패도 `200 OK`로 응답하며, 본문이 결과를 나타냅니다.
//! 에러 본문 변환은 [`AppError`]의 `ResponseError` 구현이 담당합니다.
//!
//! ## 의존성 주입
//!
//! 서비스는 `web::Data<dyn UserServices>`로 주입됩니다.
//!
//! ```rust,ignore
//! let service: Arc<dyn UserServices> = Arc::new(UserService::new(user_repo));
//!
//! App::new()
//!     .app_data(web::Data::from(service))
//!     .configure(configure_user_routes)
//! ```

use actix_web::{web, HttpRequest, HttpResponse, get, post, put, delete};
use log::{error, info, warn};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::{UserIdQuery, INVALID_ID_MESSAGE};
use crate::domain::entities::users::User;
use crate::services::users::UserServices;

/// 생성/수정 요청 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteMode {
    Create,
    Update,
}

impl WriteMode {
    fn success_message(self) -> &'static str {
        match self {
            WriteMode::Create => "User created",
            WriteMode::Update => "User updated",
        }
    }
}

/// 사용자 단건 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /user?id={id}`
///
/// # 응답
///
/// ```json
/// {"Id":2,"Name":"gopi","Email":"gopi@gmail.com","Phone":"1234567899","Age":23}
/// ```
///
/// `id`가 정수가 아니면 서비스를 호출하지 않고 `invalid parameter id`로 응답합니다.
#[get("/user")]
pub async fn get_user_by_id(
    req: HttpRequest,
    service: web::Data<dyn UserServices>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id_query(&req).map_err(|e| rejected("GET /user", e))?;

    let user = service
        .fetch_user_details_by_id(id)
        .await
        .map_err(|e| rejected("GET /user", e))?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 목록 조회 핸들러
///
/// `GET /users`
///
/// 사용자가 없으면 빈 배열 `[]`을 반환합니다.
#[get("/users")]
pub async fn get_users(
    service: web::Data<dyn UserServices>,
) -> Result<HttpResponse, AppError> {
    let users = service
        .fetch_all_user_details()
        .await
        .map_err(|e| rejected("GET /users", e))?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /insert`
///
/// # 요청 본문
///
/// ```json
/// {"Id":1,"Name":"gopi","Email":"gopi@gmail.com","Phone":"1234567899","Age":23}
/// ```
///
/// # 응답
///
/// - 성공: `User created`
/// - `Id`가 0: `Id shouldn't be zero`
/// - 이메일 검증 실패: `email already present - could not create user`
/// - 그 외: 서비스 에러 메시지 원문
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/insert \
///   -d '{"Id":1,"Name":"gopi","Email":"gopi@gmail.com","Phone":"1234567899","Age":23}'
/// ```
#[post("/insert")]
pub async fn post_user(
    body: web::Bytes,
    service: web::Data<dyn UserServices>,
) -> Result<HttpResponse, AppError> {
    let message = write_user(service.get_ref(), &body, WriteMode::Create)
        .await
        .map_err(|e| rejected("POST /insert", e))?;

    Ok(text(message))
}

/// 사용자 수정 핸들러
///
/// `PUT /update`
///
/// 레코드 전체를 교체하며 생성과 같은 검증을 거칩니다.
#[put("/update")]
pub async fn update_user(
    body: web::Bytes,
    service: web::Data<dyn UserServices>,
) -> Result<HttpResponse, AppError> {
    let message = write_user(service.get_ref(), &body, WriteMode::Update)
        .await
        .map_err(|e| rejected("PUT /update", e))?;

    Ok(text(message))
}

/// 사용자 삭제 핸들러
///
/// `DELETE /delete?id={id}`
///
/// 물리 삭제이며 복구할 수 없습니다.
#[delete("/delete")]
pub async fn delete_user(
    req: HttpRequest,
    service: web::Data<dyn UserServices>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id_query(&req)
        .and_then(non_zero)
        .map_err(|e| rejected("DELETE /delete", e))?;

    service
        .delete_user_details_by_id(id)
        .await
        .map_err(|e| rejected("DELETE /delete", e))?;

    info!("User {} deleted via API", id);
    Ok(text("User deleted successfully"))
}

async fn write_user(
    service: &dyn UserServices,
    body: &[u8],
    mode: WriteMode,
) -> AppResult<&'static str> {
    let user: User = serde_json::from_slice(body)
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    non_zero(user.id)?;

    if !service.email_validation(&user.email).await? {
        return Err(AppError::DuplicateEmail);
    }

    match mode {
        WriteMode::Create => service.insert_user_details(user).await?,
        WriteMode::Update => service.update_user_details(user).await?,
    }

    Ok(mode.success_message())
}

fn parse_id_query(req: &HttpRequest) -> AppResult<i64> {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map_err(|_| AppError::InvalidInput(INVALID_ID_MESSAGE.to_string()))?
        .into_inner();

    UserIdQuery::from_pairs(pairs).parse_id()
}

fn non_zero(id: i64) -> AppResult<i64> {
    if id == 0 {
        return Err(AppError::ZeroId);
    }
    Ok(id)
}

fn text(message: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(message)
}

/// 거절된 요청을 기록하고 에러를 그대로 돌려줍니다
fn rejected(route: &str, e: AppError) -> AppError {
    if e.is_client_error() {
        warn!("{} rejected ({}): {}", route, e.semantic_status(), e);
    } else {
        error!("{} failed ({}): {}", route, e.semantic_status(), e);
    }
    e
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{test, App};
    use actix_web::http::StatusCode;
    use mockall::predicate::eq;
    use crate::routes::configure_user_routes;
    use crate::services::users::user_service::MockUserServices;
    use super::*;

    fn gopi(id: i64, email: &str) -> User {
        User::new(id, "gopi", email, "1234567899", 23)
    }

    async fn call(service: MockUserServices, req: test::TestRequest) -> String {
        let service: Arc<dyn UserServices> = Arc::new(service);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(service))
                .configure(configure_user_routes),
        )
        .await;

        let body = test::call_and_read_body(&app, req.to_request()).await;
        String::from_utf8(body.to_vec()).unwrap()
    }

    fn post_json(uri: &str, user: &User) -> test::TestRequest {
        test::TestRequest::post().uri(uri).set_json(user)
    }

    fn put_json(uri: &str, user: &User) -> test::TestRequest {
        test::TestRequest::put().uri(uri).set_json(user)
    }

    // GET /user

    #[actix_web::test]
    async fn test_get_user_by_id_success() {
        let mut service = MockUserServices::new();
        service
            .expect_fetch_user_details_by_id()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(gopi(2, "gopi@gmail.com")));

        let body = call(service, test::TestRequest::get().uri("/user?id=2")).await;

        assert_eq!(
            body,
            r#"{"Id":2,"Name":"gopi","Email":"gopi@gmail.com","Phone":"1234567899","Age":23}"#
        );
    }

    #[actix_web::test]
    async fn test_get_user_by_id_invalid_id() {
        for uri in ["/user?id=1a", "/user?id=", "/user"] {
            let mut service = MockUserServices::new();
            service.expect_fetch_user_details_by_id().never();

            let body = call(service, test::TestRequest::get().uri(uri)).await;

            assert_eq!(body, "invalid parameter id", "uri: {}", uri);
        }
    }

    #[actix_web::test]
    async fn test_get_user_by_id_repeated_parameter_uses_first() {
        let mut service = MockUserServices::new();
        service
            .expect_fetch_user_details_by_id()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(gopi(2, "gopi@gmail.com")));

        let body = call(service, test::TestRequest::get().uri("/user?id=2&id=3")).await;

        assert_eq!(
            body,
            r#"{"Id":2,"Name":"gopi","Email":"gopi@gmail.com","Phone":"1234567899","Age":23}"#
        );
    }

    #[actix_web::test]
    async fn test_get_user_by_id_service_error() {
        let mut service = MockUserServices::new();
        service
            .expect_fetch_user_details_by_id()
            .with(eq(2))
            .returning(|_| Err(AppError::StorageFailure("internal error".to_string())));

        let body = call(service, test::TestRequest::get().uri("/user?id=2")).await;

        assert_eq!(body, "internal error");
    }

    #[actix_web::test]
    async fn test_error_responses_keep_ok_status() {
        let service: Arc<dyn UserServices> = Arc::new(MockUserServices::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(service))
                .configure(configure_user_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/user?id=abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    // GET /users

    #[actix_web::test]
    async fn test_get_users_success() {
        let mut service = MockUserServices::new();
        service
            .expect_fetch_all_user_details()
            .times(1)
            .returning(|| Ok(vec![gopi(2, "gopi@gmail.com")]));

        let body = call(service, test::TestRequest::get().uri("/users")).await;

        assert_eq!(
            body,
            r#"[{"Id":2,"Name":"gopi","Email":"gopi@gmail.com","Phone":"1234567899","Age":23}]"#
        );
    }

    #[actix_web::test]
    async fn test_get_users_empty() {
        let mut service = MockUserServices::new();
        service.expect_fetch_all_user_details().returning(|| Ok(vec![]));

        let body = call(service, test::TestRequest::get().uri("/users")).await;

        assert_eq!(body, "[]");
    }

    #[actix_web::test]
    async fn test_get_users_service_error() {
        let mut service = MockUserServices::new();
        service
            .expect_fetch_all_user_details()
            .returning(|| Err(AppError::StorageFailure("error generated".to_string())));

        let body = call(service, test::TestRequest::get().uri("/users")).await;

        assert_eq!(body, "error generated");
    }

    // POST /insert

    #[actix_web::test]
    async fn test_post_user_success() {
        let mut service = MockUserServices::new();
        service
            .expect_email_validation()
            .withf(|email: &str| email == "gopi@gmail.com")
            .times(1)
            .returning(|_| Ok(true));
        service
            .expect_insert_user_details()
            .with(eq(gopi(1, "gopi@gmail.com")))
            .times(1)
            .returning(|_| Ok(()));

        let body = call(service, post_json("/insert", &gopi(1, "gopi@gmail.com"))).await;

        assert_eq!(body, "User created");
    }

    #[actix_web::test]
    async fn test_post_user_zero_id() {
        let mut service = MockUserServices::new();
        service.expect_email_validation().never();
        service.expect_insert_user_details().never();

        let body = call(service, post_json("/insert", &gopi(0, "gopi@gmail.com"))).await;

        assert_eq!(body, "Id shouldn't be zero");
    }

    #[actix_web::test]
    async fn test_post_user_email_already_present() {
        let mut service = MockUserServices::new();
        service
            .expect_email_validation()
            .withf(|email: &str| email == "gopi12@gmail.com")
            .times(1)
            .returning(|_| Ok(false));
        service.expect_insert_user_details().never();

        let body = call(service, post_json("/insert", &gopi(1, "gopi12@gmail.com"))).await;

        assert_eq!(body, "email already present - could not create user");
    }

    #[actix_web::test]
    async fn test_post_user_email_validation_error() {
        let mut service = MockUserServices::new();
        service
            .expect_email_validation()
            .returning(|_| Err(AppError::StorageFailure("connection refused".to_string())));
        service.expect_insert_user_details().never();

        let body = call(service, post_json("/insert", &gopi(1, "gopi@gmail.com"))).await;

        assert_eq!(body, "connection refused");
    }

    #[actix_web::test]
    async fn test_post_user_insert_error() {
        let mut service = MockUserServices::new();
        service.expect_email_validation().returning(|_| Ok(true));
        service
            .expect_insert_user_details()
            .returning(|_| Err(AppError::StorageFailure("error generated".to_string())));

        let body = call(service, post_json("/insert", &gopi(1, "gopi@gmail.com"))).await;

        assert_eq!(body, "error generated");
    }

    #[actix_web::test]
    async fn test_post_user_malformed_body() {
        let mut service = MockUserServices::new();
        service.expect_email_validation().never();
        service.expect_insert_user_details().never();

        let req = test::TestRequest::post()
            .uri("/insert")
            .set_payload(r#"{"Id":"one""#);
        let body = call(service, req).await;

        let expected = serde_json::from_str::<User>(r#"{"Id":"one""#)
            .unwrap_err()
            .to_string();
        assert_eq!(body, expected);
    }

    #[actix_web::test]
    async fn test_post_user_missing_id_is_zero() {
        let mut service = MockUserServices::new();
        service.expect_email_validation().never();

        let req = test::TestRequest::post()
            .uri("/insert")
            .set_payload(r#"{"Name":"gopi","Email":"gopi@gmail.com"}"#);
        let body = call(service, req).await;

        assert_eq!(body, "Id shouldn't be zero");
    }

    #[actix_web::test]
    async fn test_post_user_lowercase_keys() {
        let mut service = MockUserServices::new();
        service
            .expect_email_validation()
            .withf(|email: &str| email == "gopi@gmail.com")
            .returning(|_| Ok(true));
        service
            .expect_insert_user_details()
            .with(eq(User::new(1, "gopi", "gopi@gmail.com", "1", 23)))
            .times(1)
            .returning(|_| Ok(()));

        let req = test::TestRequest::post()
            .uri("/insert")
            .set_payload(r#"{"id":1,"name":"gopi","email":"gopi@gmail.com","phone":"1","age":23}"#);
        let body = call(service, req).await;

        assert_eq!(body, "User created");
    }

    // PUT /update

    #[actix_web::test]
    async fn test_update_user_success() {
        let mut service = MockUserServices::new();
        service
            .expect_email_validation()
            .withf(|email: &str| email == "gopi@gmail.com")
            .times(1)
            .returning(|_| Ok(true));
        service
            .expect_update_user_details()
            .with(eq(gopi(1, "gopi@gmail.com")))
            .times(1)
            .returning(|_| Ok(()));

        let body = call(service, put_json("/update", &gopi(1, "gopi@gmail.com"))).await;

        assert_eq!(body, "User updated");
    }

    #[actix_web::test]
    async fn test_update_user_zero_id() {
        let mut service = MockUserServices::new();
        service.expect_email_validation().never();
        service.expect_update_user_details().never();

        let body = call(service, put_json("/update", &gopi(0, "gopi@gmail.com"))).await;

        assert_eq!(body, "Id shouldn't be zero");
    }

    #[actix_web::test]
    async fn test_update_user_email_already_present() {
        let mut service = MockUserServices::new();
        service
            .expect_email_validation()
            .withf(|email: &str| email == "gopi12@gmail.com")
            .returning(|_| Ok(false));
        service.expect_update_user_details().never();

        let body = call(service, put_json("/update", &gopi(1, "gopi12@gmail.com"))).await;

        assert_eq!(body, "email already present - could not create user");
    }

    #[actix_web::test]
    async fn test_update_user_not_found() {
        let mut service = MockUserServices::new();
        service.expect_email_validation().returning(|_| Ok(true));
        service
            .expect_update_user_details()
            .returning(|_| Err(AppError::NotFound("user with id 1 not found".to_string())));

        let body = call(service, put_json("/update", &gopi(1, "gopi@gmail.com"))).await;

        assert_eq!(body, "user with id 1 not found");
    }

    // DELETE /delete

    #[actix_web::test]
    async fn test_delete_user_success() {
        let mut service = MockUserServices::new();
        service
            .expect_delete_user_details_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        let body = call(service, test::TestRequest::delete().uri("/delete?id=1")).await;

        assert_eq!(body, "User deleted successfully");
    }

    #[actix_web::test]
    async fn test_delete_user_zero_id() {
        let mut service = MockUserServices::new();
        service.expect_delete_user_details_by_id().never();

        let body = call(service, test::TestRequest::delete().uri("/delete?id=0")).await;

        assert_eq!(body, "Id shouldn't be zero");
    }

    #[actix_web::test]
    async fn test_delete_user_invalid_id() {
        let mut service = MockUserServices::new();
        service.expect_delete_user_details_by_id().never();

        let body = call(service, test::TestRequest::delete().uri("/delete?id=x1")).await;

        assert_eq!(body, "invalid parameter id");
    }

    #[actix_web::test]
    async fn test_delete_user_repeated_parameter_uses_first() {
        let mut service = MockUserServices::new();
        service
            .expect_delete_user_details_by_id()
            .with(eq(4))
            .times(1)
            .returning(|_| Ok(()));

        let body = call(service, test::TestRequest::delete().uri("/delete?id=4&id=0")).await;

        assert_eq!(body, "User deleted successfully");
    }

    #[actix_web::test]
    async fn test_delete_user_service_error() {
        let mut service = MockUserServices::new();
        service
            .expect_delete_user_details_by_id()
            .with(eq(1))
            .returning(|_| Err(AppError::StorageFailure("error generated".to_string())));

        let body = call(service, test::TestRequest::delete().uri("/delete?id=1")).await;

        assert_eq!(body, "error generated");
    }
}
