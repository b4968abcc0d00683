mod common;

use common::{sample_house, TestApp};
use serde_json::Value;

async fn dashboard(app: &TestApp, token: &str) -> Value {
    let response = app
        .client
        .get(format!("{}/owner-dashboard", app.address))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    response.json().await.unwrap()
}

#[tokio::test]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn dashboard_starts_empty() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("a@x.com", "p1").await;

    let body = dashboard(&app, &token).await;
    assert_eq!(body["houses"], serde_json::json!([]));

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn created_house_round_trips_through_dashboard() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("a@x.com", "p1").await;

    let fields = sample_house();
    let response = app
        .client
        .post(format!("{}/add-house", app.address))
        .header("Authorization", format!("Bearer {}", token))
        .json(&fields)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let body = dashboard(&app, &token).await;
    let houses = body["houses"].as_array().unwrap();
    assert_eq!(houses.len(), 1);

    // Returned fields equal the submitted ones; id and owner are added.
    let house = &houses[0];
    for (key, value) in fields.as_object().unwrap() {
        assert_eq!(&house[key], value, "field {} should round-trip", key);
    }
    assert!(house["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(house["owner"].as_str().is_some_and(|id| !id.is_empty()));

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn edit_house_replaces_fields() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("a@x.com", "p1").await;

    let response = app
        .client
        .post(format!("{}/add-house", app.address))
        .header("Authorization", format!("Bearer {}", token))
        .json(&sample_house())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.unwrap();
    let house_id = created["id"].as_str().unwrap();

    let mut fields = sample_house();
    fields["rent"] = serde_json::json!(1500.0);
    fields["city"] = serde_json::json!("Chattogram");

    let response = app
        .client
        .put(format!("{}/edit-house/{}", app.address, house_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&fields)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body = dashboard(&app, &token).await;
    let house = &body["houses"][0];
    assert_eq!(house["rent"], 1500.0);
    assert_eq!(house["city"], "Chattogram");

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn delete_house_removes_listing() {
    let app = TestApp::spawn().await;
    let token = app.register_and_login("a@x.com", "p1").await;

    let response = app
        .client
        .post(format!("{}/add-house", app.address))
        .header("Authorization", format!("Bearer {}", token))
        .json(&sample_house())
        .send()
        .await
        .unwrap();
    let created: Value = response.json().await.unwrap();
    let house_id = created["id"].as_str().unwrap();

    let response = app
        .client
        .delete(format!("{}/delete-house/{}", app.address, house_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body = dashboard(&app, &token).await;
    assert_eq!(body["houses"], serde_json::json!([]));

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB at MONGODB_URI"]
async fn listings_are_invisible_and_untouchable_across_owners() {
    let app = TestApp::spawn().await;
    let token_a = app.register_and_login("a@x.com", "p1").await;
    let token_b = app.register_and_login("b@x.com", "p2").await;

    let response = app
        .client
        .post(format!("{}/add-house", app.address))
        .header("Authorization", format!("Bearer {}", token_a))
        .json(&sample_house())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.unwrap();
    let house_id = created["id"].as_str().unwrap();

    // B never sees A's listing.
    let body = dashboard(&app, &token_b).await;
    assert_eq!(body["houses"], serde_json::json!([]));

    // B's edit against A's id reports success but is a no-op.
    let mut fields = sample_house();
    fields["rent"] = serde_json::json!(1.0);
    let response = app
        .client
        .put(format!("{}/edit-house/{}", app.address, house_id))
        .header("Authorization", format!("Bearer {}", token_b))
        .json(&fields)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    // B's delete against A's id likewise.
    let response = app
        .client
        .delete(format!("{}/delete-house/{}", app.address, house_id))
        .header("Authorization", format!("Bearer {}", token_b))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    // A's listing survives, rent untouched.
    let body = dashboard(&app, &token_a).await;
    let houses = body["houses"].as_array().unwrap();
    assert_eq!(houses.len(), 1);
    assert_eq!(houses[0]["rent"], 1200.0);

    app.cleanup().await;
}
