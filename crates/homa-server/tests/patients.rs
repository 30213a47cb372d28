mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn create_get_list() {
    let app = common::app();
    let token = app.staff_token("desk@clinic.in").await;
    let id = app.create_patient(&token, "Lakshmi Iyer").await;

    let res = app.call(Method::GET, &format!("/patients/{id}"), Some(&token), None).await;
    assert_eq!(res.status, StatusCode::OK);
    let patient = res.json();
    assert_eq!(patient["name"], "Lakshmi Iyer");
    assert_eq!(patient["sex"], "female");
    assert_eq!(patient["age"], 48);

    app.create_patient(&token, "Suresh Pillai").await;
    let list = app.call(Method::GET, "/patients", Some(&token), None).await.json();
    let names: Vec<_> = list.as_array().unwrap().iter().map(|p| p["name"].clone()).collect();
    assert_eq!(names, [json!("Suresh Pillai"), json!("Lakshmi Iyer")]);
}

#[tokio::test]
async fn create_validates() {
    let app = common::app();
    let token = app.staff_token("desk@clinic.in").await;

    let missing = app
        .call(Method::POST, "/patients", Some(&token), Some(json!({ "name": "No Age" })))
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.json()["error"], "Name, age, and sex are required");

    let bad_phone = app
        .call(
            Method::POST,
            "/patients",
            Some(&token),
            Some(json!({ "name": "A", "age": 30, "sex": "male", "phone": "12345" })),
        )
        .await;
    assert_eq!(bad_phone.status, StatusCode::BAD_REQUEST);

    let bad_age = app
        .call(
            Method::POST,
            "/patients",
            Some(&token),
            Some(json!({ "name": "A", "age": 151, "sex": "male" })),
        )
        .await;
    assert_eq!(bad_age.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_age.json()["error"], "Age must be between 0 and 150");

    let not_json = app
        .call(Method::POST, "/patients", Some(&token), Some(json!("just a string")))
        .await;
    assert_eq!(not_json.status, StatusCode::BAD_REQUEST);
    assert!(not_json.json()["error"].is_string());
}

#[tokio::test]
async fn partial_update() {
    let app = common::app();
    let token = app.staff_token("desk@clinic.in").await;
    let id = app.create_patient(&token, "Lakshmi Iyer").await;

    let res = app
        .call(
            Method::PUT,
            &format!("/patients/{id}"),
            Some(&token),
            Some(json!({ "age": 49, "phone": "" })),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    let patient = res.json();
    assert_eq!(patient["age"], 49);
    assert_eq!(patient["name"], "Lakshmi Iyer");
    assert!(patient["phone"].is_null());

    let empty = app
        .call(Method::PUT, &format!("/patients/{id}"), Some(&token), Some(json!({})))
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);

    let missing = app
        .call(
            Method::PUT,
            &format!("/patients/{}", Uuid::new_v4()),
            Some(&token),
            Some(json!({ "age": 50 })),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_missing() {
    let app = common::app();
    let token = app.staff_token("desk@clinic.in").await;
    let id = app.create_patient(&token, "Lakshmi Iyer").await;

    let res = app.call(Method::DELETE, &format!("/patients/{id}"), Some(&token), None).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    let again = app.call(Method::DELETE, &format!("/patients/{id}"), Some(&token), None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.json()["error"], "patient not found");

    let get = app.call(Method::GET, &format!("/patients/{id}"), Some(&token), None).await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_id_gets_a_json_error() {
    let app = common::app();
    let token = app.staff_token("desk@clinic.in").await;

    for (method, uri) in [
        (Method::GET, "/patients/not-a-uuid"),
        (Method::DELETE, "/patients/not-a-uuid"),
        (Method::GET, "/assessments/not-a-uuid"),
        (Method::GET, "/assessments/not-a-uuid/report"),
    ] {
        let res = app.call(method, uri, Some(&token), None).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(res.content_type.as_deref(), Some("application/json"), "{uri}");
        assert!(res.json()["error"].is_string(), "{uri}");
    }
}
