//! Per-identity document storage over HTTP

use reqwest::StatusCode;
use serde_json::{Value, json};
use tempfile::TempDir;

mod common;

use common::{ALICE_TOKEN, BOB_TOKEN};

#[tokio::test]
async fn test_fetch_without_document() {
    let server = common::TestServer::start().await;

    let response = server.get("/users", ALICE_TOKEN).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "status": "error", "message": "User data not found" })
    );
}

#[tokio::test]
async fn test_store_then_fetch_then_overwrite() {
    let server = common::TestServer::start().await;

    let response = server
        .post("/users", ALICE_TOKEN)
        .json(&json!({ "name": "A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stored: Value = response.json().await.unwrap();
    assert_eq!(
        stored,
        json!({ "status": "success", "user_id": "uid-alice", "data": { "name": "A" } })
    );

    let fetched: Value = server
        .get("/users", ALICE_TOKEN)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        fetched,
        json!({ "status": "success", "data": { "name": "A" } })
    );

    server
        .post("/users", ALICE_TOKEN)
        .json(&json!({ "name": "B" }))
        .send()
        .await
        .unwrap();

    let fetched: Value = server
        .get("/users", ALICE_TOKEN)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["data"], json!({ "name": "B" }));
}

#[tokio::test]
async fn test_documents_are_per_identity() {
    let server = common::TestServer::start().await;

    server
        .post("/users", ALICE_TOKEN)
        .json(&json!({ "secret": "alice" }))
        .send()
        .await
        .unwrap();

    let bob: Value = server
        .get("/users", BOB_TOKEN)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(bob["status"], "error");
}

#[tokio::test]
async fn test_non_object_body_rejected() {
    let server = common::TestServer::start().await;

    let response = server
        .post("/users", ALICE_TOKEN)
        .json(&json!(["not", "an", "object"]))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    let fetched: Value = server
        .get("/users", ALICE_TOKEN)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["status"], "error");
}

#[tokio::test]
async fn test_local_backend_survives_restart() {
    let temp = TempDir::new().unwrap();
    let mut config = common::test_config();
    config.storage.backend = "local".into();
    config.storage.local_path = Some(temp.path().to_string_lossy().into_owned());

    {
        let server = common::TestServer::start_with(config.clone()).await;
        let response = server
            .post("/users", ALICE_TOKEN)
            .json(&json!({ "theme": "dark" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let server = common::TestServer::start_with(config).await;
    let fetched: Value = server
        .get("/users", ALICE_TOKEN)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        fetched,
        json!({ "status": "success", "data": { "theme": "dark" } })
    );
}
