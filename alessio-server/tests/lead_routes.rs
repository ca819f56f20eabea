//! Newsletter, review and reservation writes

mod common;

use std::sync::Arc;

use axum::body::Body;
use common::{FakeStore, app_with, degraded_app, json_body, post_json, send};
use http::{Request, StatusCode};
use serde_json::json;

fn reservation(guests: i64) -> String {
    json!({
        "name": "Giulia Rossi",
        "email": "giulia@example.com",
        "phone": "+39 055 123 4567",
        "guests": guests,
        "date": "2025-06-01",
        "time": "20:30",
        "notes": "Window table"
    })
    .to_string()
}

#[tokio::test]
async fn newsletter_signup_is_stored() {
    let store = Arc::new(FakeStore::new());
    let (status, body) = post_json(
        app_with(store.clone()),
        "/api/newsletter",
        r#"{"email": "ciao@alessio.it", "name": "Anna"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));

    let docs = store.documents("newsletter");
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["email"], json!("ciao@alessio.it"));
    assert!(docs[0]["created_at"].is_i64());
    assert!(docs[0]["updated_at"].is_i64());
}

#[tokio::test]
async fn newsletter_write_failure_still_acknowledges() {
    let store = Arc::new(FakeStore::failing_writes());
    let (status, body) = post_json(
        app_with(store.clone()),
        "/api/newsletter",
        r#"{"email": "ciao@alessio.it"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));
    assert_eq!(store.calls(), vec!["insert newsletter"]);
}

#[tokio::test]
async fn writes_without_store_still_acknowledge() {
    let (status, body) = post_json(degraded_app(), "/api/reservations", reservation(4)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));

    let (status, _) = post_json(
        degraded_app(),
        "/api/reviews",
        r#"{"name": "Marco", "rating": 5, "comment": "Perfetto"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn posted_review_is_read_back() {
    let store = Arc::new(FakeStore::new());
    let (status, _) = post_json(
        app_with(store.clone()),
        "/api/reviews",
        r#"{"name": "Marco", "rating": 5, "comment": "Perfetto", "source": "Google"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = common::get(app_with(store), "/api/reviews").await;
    assert_eq!(
        body,
        json!([{
            "name": "Marco",
            "rating": 5,
            "comment": "Perfetto",
            "source": "Google",
            "avatar": null
        }])
    );
}

#[tokio::test]
async fn reservation_is_stored_with_defaults_applied() {
    let store = Arc::new(FakeStore::new());
    let (status, _) = post_json(
        app_with(store.clone()),
        "/api/reservations",
        r#"{"name": "Giulia", "phone": "055 123", "guests": 2, "date": "2025-06-01", "time": "19:00"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let docs = store.documents("reservation");
    assert_eq!(docs[0]["guests"], json!(2));
    assert_eq!(docs[0]["email"], json!(null));
    assert_eq!(docs[0]["notes"], json!(null));
}

#[tokio::test]
async fn out_of_range_values_are_rejected_before_the_store() {
    let cases = [
        (
            "/api/reviews",
            json!({"name": "Marco", "rating": 6, "comment": "Troppo buono"}).to_string(),
            "rating",
            1002,
        ),
        ("/api/reservations", reservation(0), "guests", 2001),
        ("/api/reservations", reservation(21), "guests", 2001),
        (
            "/api/newsletter",
            json!({"email": "not-an-email"}).to_string(),
            "email",
            2002,
        ),
    ];

    for (uri, payload, field, code) in cases {
        let store = Arc::new(FakeStore::new());
        let (status, body) = post_json(app_with(store.clone()), uri, payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} {field}");
        assert_eq!(body["code"], json!(code));
        assert_eq!(body["details"]["fields"], json!([field]));
        assert!(store.calls().is_empty(), "{uri} must not reach the store");
    }
}

#[tokio::test]
async fn missing_fields_are_all_named() {
    let store = Arc::new(FakeStore::new());
    let (status, body) = post_json(
        app_with(store.clone()),
        "/api/reservations",
        r#"{"name": "Giulia", "guests": 2}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["record"], json!("reservation"));
    assert_eq!(body["details"]["fields"], json!(["date", "phone", "time"]));
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn wrong_types_are_rejected() {
    let (status, body) = post_json(
        degraded_app(),
        "/api/reviews",
        r#"{"name": "Marco", "rating": "five", "comment": "Buono"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["fields"], json!(["rating"]));
}

#[tokio::test]
async fn malformed_json_is_an_invalid_request() {
    let store = Arc::new(FakeStore::new());
    let (status, body) = post_json(app_with(store.clone()), "/api/newsletter", "{\"email\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!(5));
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn non_object_body_is_rejected() {
    let (status, body) = post_json(degraded_app(), "/api/newsletter", "[1, 2, 3]").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!(2002));
    assert_eq!(body["details"]["fields"], json!([]));
}

#[tokio::test]
async fn body_without_content_type_is_still_parsed() {
    let store = Arc::new(FakeStore::new());
    let request = Request::post("/api/newsletter")
        .body(Body::from(r#"{"email": "ciao@alessio.it"}"#))
        .unwrap();

    let response = send(app_with(store.clone()), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"ok": true}));
    assert_eq!(store.documents("newsletter").len(), 1);
}

#[tokio::test]
async fn numeric_strings_are_stored_as_numbers() {
    let store = Arc::new(FakeStore::new());
    let (status, _) = post_json(
        app_with(store.clone()),
        "/api/reservations",
        r#"{"name": "Giulia", "phone": "055 123", "guests": "4", "date": "2025-06-01", "time": "19:00"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.documents("reservation")[0]["guests"], json!(4));

    let (status, _) = post_json(
        app_with(store.clone()),
        "/api/reviews",
        r#"{"name": "Marco", "rating": 5.0, "comment": "Perfetto"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.documents("review")[0]["rating"], json!(5));
}

#[tokio::test]
async fn bare_host_email_domains_are_rejected() {
    let mut booking: serde_json::Value = serde_json::from_str(&reservation(2)).unwrap();
    booking["email"] = json!("anna@localhost");

    let cases = [
        ("/api/newsletter", json!({"email": "anna@localhost"}), 2002),
        ("/api/reservations", booking, 2001),
    ];

    for (uri, payload, code) in cases {
        let store = Arc::new(FakeStore::new());
        let (status, body) = post_json(app_with(store.clone()), uri, payload.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["code"], json!(code));
        assert_eq!(body["details"]["fields"], json!(["email"]));
        assert!(store.calls().is_empty());
    }
}
