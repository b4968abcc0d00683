mod common;

use common::TestApp;
use serde_json::Value;

#[tokio::test]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn health_check_reports_ok() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "house-service");

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn root_serves_greeting() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.text().await.unwrap().contains("House Hunter"));

    app.cleanup().await;
}
