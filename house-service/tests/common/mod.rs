use house_service::config::HouseConfig;
use house_service::services::MongoDb;
use house_service::startup::Application;
use serde_json::{json, Value};
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        if std::env::var("MONGODB_URI").is_err() {
            std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");
        }

        let db_name = format!("house_test_{}", Uuid::new_v4().simple());

        let mut config = HouseConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
            client,
        }
    }

    pub async fn register(&self, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/register", self.address))
            .json(&json!({
                "fullName": "Test User",
                "role": "owner",
                "phoneNumber": "555-0100",
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute register request")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/login", self.address))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute login request")
    }

    /// Register a fresh account and return a valid bearer token for it.
    pub async fn register_and_login(&self, email: &str, password: &str) -> String {
        let response = self.register(email, password).await;
        assert_eq!(response.status(), 201, "registration should succeed");

        let response = self.login(email, password).await;
        assert_eq!(response.status(), 200, "login should succeed");

        let body: Value = response.json().await.expect("login body should be JSON");
        body["token"]
            .as_str()
            .expect("login body should contain a token")
            .to_string()
    }

    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}

pub fn sample_house() -> Value {
    json!({
        "name": "Lakeview Flat",
        "address": "12 Shore Rd",
        "city": "Dhaka",
        "bedrooms": 2,
        "bathrooms": 1,
        "roomSize": "900 sqft",
        "picture": "https://example.com/p.jpg",
        "availabilityDate": "2026-09-01",
        "rent": 1200.0,
        "phoneNumber": "555-0101",
        "description": "Bright corner unit"
    })
}
