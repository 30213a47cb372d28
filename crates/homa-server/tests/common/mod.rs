#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use homa_auth::jwt::{TokenIssuer, DEFAULT_TOKEN_TTL};
use homa_server::state::AppState;
use homa_storage::Store;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub fn app() -> TestApp {
    let state = AppState::new(
        Store::in_memory().unwrap(),
        TokenIssuer::new(b"server-test-secret", DEFAULT_TOKEN_TTL),
    );
    TestApp {
        router: homa_server::router(state.clone()),
        state,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.bytes.clone()).unwrap()
    }
}

impl TestApp {
    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = response.into_body().collect().await.unwrap().to_bytes().to_vec();
        TestResponse {
            status,
            content_type,
            bytes,
        }
    }

    /// Sign up a staff member and return their token.
    pub async fn staff_token(&self, email: &str) -> String {
        let res = self
            .call(
                Method::POST,
                "/auth/signup",
                None,
                Some(json!({
                    "name": "Front Desk",
                    "email": email,
                    "password": "password123",
                })),
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "{}", res.text());
        res.json()["token"].as_str().unwrap().to_string()
    }

    pub async fn create_patient(&self, token: &str, name: &str) -> String {
        let res = self
            .call(
                Method::POST,
                "/patients",
                Some(token),
                Some(json!({ "name": name, "age": 48, "sex": "female", "phone": "9876543210" })),
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "{}", res.text());
        res.json()["id"].as_str().unwrap().to_string()
    }
}
