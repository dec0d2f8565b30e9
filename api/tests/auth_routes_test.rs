//! Integration tests for the registration and login endpoints

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use kc_api::create_app;
use kc_core::domain::entities::UserRole;
use kc_core::repositories::UserRepository;

#[actix_web::test]
async fn test_register_returns_token_and_user_view() {
    let ctx = common::context(common::test_config());
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(common::register_body("amaka@kaycribs.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;

    assert_eq!(body["user"]["name"], "Amaka Nwosu");
    assert_eq!(body["user"]["email"], "amaka@kaycribs.com");
    assert_eq!(body["user"]["role"], "buyer");
    assert!(body["user"].get("password").is_none());

    let identity = ctx.tokens.verify(body["token"].as_str().unwrap()).unwrap();
    assert_eq!(identity.user_id.to_string(), body["user"]["id"]);
    assert_eq!(identity.role, UserRole::Buyer);
}

#[actix_web::test]
async fn test_register_duplicate_email() {
    let ctx = common::context(common::test_config());
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    for expected in [StatusCode::OK, StatusCode::BAD_REQUEST] {
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(common::register_body("twice@kaycribs.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);

        if expected == StatusCode::BAD_REQUEST {
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "User already exists");
        }
    }

    assert_eq!(ctx.users.len().await, 1);
}

#[actix_web::test]
async fn test_register_role_defaults_to_buyer_and_seller_keeps_id_number() {
    let ctx = common::context(common::test_config());
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "firstName": "Ibe",
            "lastName": "Uche",
            "email": "ibe@kaycribs.com",
            "password": "pw"
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["user"]["role"], "buyer");

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "firstName": "Seyi",
            "lastName": "Bello",
            "email": "seyi@kaycribs.com",
            "password": "pw",
            "role": "seller",
            "idNumber": "NIN-4455"
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["user"]["role"], "seller");
    assert!(body["user"].get("idNumber").is_none());

    let seller = ctx.users.find_by_email("seyi@kaycribs.com").await.unwrap().unwrap();
    assert_eq!(seller.id_number.as_deref(), Some("NIN-4455"));
}

#[actix_web::test]
async fn test_register_invalid_body_is_bad_request() {
    let ctx = common::context(common::test_config());
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    // Missing password
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "firstName": "A", "lastName": "B", "email": "a@b.c" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");

    // Empty email
    let mut payload = common::register_body("");
    payload["email"] = json!("");
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email is required");

    // Malformed JSON
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_login_success_and_failures() {
    let ctx = common::context(common::test_config());
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(common::register_body("login@kaycribs.com"))
        .to_request();
    test::call_service(&app, req).await;

    // Correct credentials
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "login@kaycribs.com", "password": "correct-horse" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(ctx.tokens.verify(body["token"].as_str().unwrap()).is_ok());
    assert_eq!(body["user"]["email"], "login@kaycribs.com");

    // Wrong password
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "login@kaycribs.com", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid credentials");
    assert!(body.get("token").is_none());

    // Unknown email
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "nobody@kaycribs.com", "password": "pw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User does not exist");
}

#[actix_web::test]
async fn test_store_failure_is_internal_error_with_message() {
    let ctx = common::context(common::test_config());
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    ctx.users.fail_with("connection pool cleared").await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(common::register_body("down@kaycribs.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "connection pool cleared");

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "down@kaycribs.com", "password": "pw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
