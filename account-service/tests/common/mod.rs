pub mod db;

use std::sync::Arc;

use account_service::domain::user::service::UserService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::InMemoryUserRepository;
use auth::Authenticator;
use auth::PasswordHasher;
use serde_json::json;
use serde_json::Value;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    /// Spawn the application with ownership checks disabled.
    pub async fn spawn() -> Self {
        Self::spawn_with_ownership(false).await
    }

    /// Spawn the application in a background task and return TestApp
    pub async fn spawn_with_ownership(enforce_ownership: bool) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // Cheap Argon2 parameters keep the suite fast
        let hasher = PasswordHasher::with_params(1024, 1, 1).expect("Invalid Argon2 parameters");
        let authenticator = Arc::new(Authenticator::with_hasher(
            JWT_SECRET,
            chrono::Duration::hours(24),
            hasher,
        ));

        let user_repo = Arc::new(InMemoryUserRepository::new());
        let user_service = Arc::new(
            UserService::new(user_repo, Arc::clone(&authenticator))
                .with_ownership_enforced(enforce_ownership),
        );

        let router = create_router(user_service, Arc::clone(&authenticator));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request with the token as the raw Authorization value
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(&format!("{}{}", self.address, path))
            .header(reqwest::header::AUTHORIZATION, token)
    }

    /// Helper to make DELETE request with the token as the raw Authorization value
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(&format!("{}{}", self.address, path))
            .header(reqwest::header::AUTHORIZATION, token)
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Register an account and return the response body.
    pub async fn signup(&self, email: &str, password: &str) -> Value {
        let response = self
            .post("/signup")
            .json(&json!({
                "email": email,
                "fname": "Ada",
                "lname": "Lovelace",
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }

    /// Log in and return the issued token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Token missing from login response")
            .to_string()
    }

    /// Register then log in, returning the token.
    pub async fn signup_and_login(&self, email: &str, password: &str) -> String {
        self.signup(email, password).await;
        self.login(email, password).await
    }
}
