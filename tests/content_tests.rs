use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::TestApp;

#[actix_web::test]
async fn test_content_starts_empty() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/content").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({}));
}

#[actix_web::test]
async fn test_update_content_requires_admin() {
    let test_app = TestApp::new().await;
    let member_token = test_app.register_member("editor@example.com").await;
    let app = test::init_service(test_app.create_app()).await;

    let payload = json!({
        "section": "hero",
        "field": "headline",
        "content": "Hello"
    });

    let req = test::TestRequest::post()
        .uri("/api/content")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/content")
        .insert_header(("Authorization", format!("Bearer {}", member_token)))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_content_overrides_grouped_by_section() {
    let test_app = TestApp::new().await;
    let token = test_app.login_as_admin().await;
    let app = test::init_service(test_app.create_app()).await;

    for (section, field, content) in [
        ("hero", "headline", "Building things"),
        ("hero", "subtitle", "One crate at a time"),
        ("about", "bio", "Rust developer"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/content")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({
                "section": section,
                "field": field,
                "content": content
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/api/content").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;

    assert_eq!(
        body,
        json!({
            "hero": {
                "headline": "Building things",
                "subtitle": "One crate at a time"
            },
            "about": {
                "bio": "Rust developer"
            }
        })
    );
}

#[actix_web::test]
async fn test_content_upsert_overwrites_existing_value() {
    let test_app = TestApp::new().await;
    let token = test_app.login_as_admin().await;
    let app = test::init_service(test_app.create_app()).await;

    for content in ["First draft", "Final copy"] {
        let req = test::TestRequest::post()
            .uri("/api/content")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({
                "section": "hero",
                "field": "headline",
                "content": content
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/api/content").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["hero"]["headline"], "Final copy");
}

#[actix_web::test]
async fn test_content_image_stored_as_plain_field() {
    let test_app = TestApp::new().await;
    let token = test_app.login_as_admin().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/content/image")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "section": "hero",
            "field": "background",
            "imageUrl": "/uploads/bg-123.png"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/content").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["hero"]["background"], "/uploads/bg-123.png");
}

#[actix_web::test]
async fn test_blank_section_rejected() {
    let test_app = TestApp::new().await;
    let token = test_app.login_as_admin().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/content")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "section": "  ",
            "field": "headline",
            "content": "Orphaned"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
