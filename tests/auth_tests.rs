use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::{TestApp, ADMIN_EMAIL, ADMIN_PASSWORD};

#[actix_web::test]
async fn test_login_success() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({
            "email": ADMIN_EMAIL,
            "password": ADMIN_PASSWORD
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["token"].is_string());
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], ADMIN_EMAIL);
    assert_eq!(body["user"]["role"], "admin");
    // The password hash must never leave the server
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[actix_web::test]
async fn test_login_invalid_credentials() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({
            "email": ADMIN_EMAIL,
            "password": "wrong_password"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("Invalid"));
}

#[actix_web::test]
async fn test_login_unknown_email_same_error_as_bad_password() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({
            "email": "nobody@example.com",
            "password": ADMIN_PASSWORD
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid credentials");
}

#[actix_web::test]
async fn test_current_user_with_token() {
    let test_app = TestApp::new().await;
    let token = test_app.login_as_admin().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/auth/user")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], ADMIN_EMAIL);
}

#[actix_web::test]
async fn test_current_user_without_token() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/auth/user").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_logout_destroys_session() {
    let test_app = TestApp::new().await;
    let token = test_app.login_as_admin().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/logout")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // The token must be unusable afterwards
    let req = test::TestRequest::get()
        .uri("/api/auth/user")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_register_creates_member_account() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "email": "new@example.com",
            "password": "long-enough-pw",
            "firstName": "New",
            "lastName": "User"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["role"], "member");
    assert!(body["token"].is_string());
}

#[actix_web::test]
async fn test_register_duplicate_email_rejected() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let payload = json!({
        "email": "dup@example.com",
        "password": "long-enough-pw",
        "firstName": "Dup",
        "lastName": "User"
    });

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_register_short_password_rejected() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({
            "email": "short@example.com",
            "password": "short",
            "firstName": "Short",
            "lastName": "Password"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["errors"].is_array());
}

#[actix_web::test]
async fn test_expired_sessions_rejected_and_swept_on_login() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let admin_id: String = sqlx::query_scalar("SELECT id FROM users WHERE email = ?")
        .bind(ADMIN_EMAIL)
        .fetch_one(&test_app.pool)
        .await
        .unwrap();

    sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES (?, ?, ?)")
        .bind("stale-token")
        .bind(&admin_id)
        .bind(chrono::Utc::now() - chrono::Duration::hours(1))
        .execute(&test_app.pool)
        .await
        .unwrap();

    // An expired token never authenticates
    let req = test::TestRequest::get()
        .uri("/api/auth/user")
        .insert_header(("Authorization", "Bearer stale-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // The next login sweeps the stale row from the table
    test_app.login_as_admin().await;
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE token = ?")
        .bind("stale-token")
        .fetch_one(&test_app.pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[actix_web::test]
async fn test_registered_member_is_not_admin() {
    let test_app = TestApp::new().await;
    let token = test_app.register_member("member@example.com").await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/admin/projects")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
