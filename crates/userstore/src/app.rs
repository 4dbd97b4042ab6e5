use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        users::{create_user, delete_user, get_user},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let user_routes = Router::new()
        .route("/users", post(create_user))
        .route("/users/{userId}", get(get_user).delete(delete_user))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .merge(user_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashSet,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
    };

    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, Response, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use userstore_core::storage::{RepositoryError, Result, UserRepository};
    use userstore_core::user::User;
    use uuid::Uuid;

    fn test_app(state: AppState) -> Router {
        create_app(state, Duration::from_secs(10))
    }

    fn create_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/users")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(user_id: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("/users/{user_id}"))
            .body(Body::empty())
            .unwrap()
    }

    fn delete_request(user_id: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(format!("/users/{user_id}"))
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body(response: Response<Body>) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    /// Repository whose every operation fails with the given error.
    struct FailingRepository(RepositoryError);

    #[async_trait]
    impl UserRepository for FailingRepository {
        async fn put_user(&self, _user: &User) -> Result<()> {
            Err(self.0.clone())
        }

        async fn get_user(&self, _user_id: &str) -> Result<Option<User>> {
            Err(self.0.clone())
        }

        async fn delete_user(&self, _user_id: &str) -> Result<()> {
            Err(self.0.clone())
        }
    }

    /// Repository that counts writes and stores nothing.
    #[derive(Default)]
    struct RecordingRepository {
        puts: AtomicUsize,
    }

    #[async_trait]
    impl UserRepository for RecordingRepository {
        async fn put_user(&self, _user: &User) -> Result<()> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn get_user(&self, _user_id: &str) -> Result<Option<User>> {
            Ok(None)
        }

        async fn delete_user(&self, _user_id: &str) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_livez() {
        let app = test_app(AppState::default());

        let response = app
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_user_lifecycle() {
        let app = test_app(AppState::default());

        // Create
        let response = app
            .clone()
            .oneshot(create_request(
                r#"{"name":"Ada","email":"ada@example.com"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let created = json_body(response).await;
        assert_eq!(created["message"], "User created successfully");
        let user_id = created["user_id"].as_str().unwrap().to_string();
        assert!(Uuid::parse_str(&user_id).is_ok());

        // Get
        let response = app.clone().oneshot(get_request(&user_id)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({
                "user_id": user_id,
                "name": "Ada",
                "email": "ada@example.com"
            })
        );

        // Delete
        let response = app.clone().oneshot(delete_request(&user_id)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["message"], "User deleted");

        // Get after delete
        let response = app.oneshot(get_request(&user_id)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["message"], "User not found");
    }

    #[tokio::test]
    async fn test_get_unknown_user_is_not_found() {
        let app = test_app(AppState::default());

        let response = app.oneshot(get_request("never-created")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"message": "User not found"})
        );
    }

    #[tokio::test]
    async fn test_delete_twice_succeeds() {
        let app = test_app(AppState::default());

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(delete_request("never-created"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(json_body(response).await["message"], "User deleted");
        }
    }

    #[tokio::test]
    async fn test_create_missing_email_is_bad_request() {
        let app = test_app(AppState::default());

        let response = app
            .oneshot(create_request(r#"{"name":"Ada"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["message"],
            "Missing required field: email"
        );
    }

    #[tokio::test]
    async fn test_rejected_create_stores_nothing() {
        let repo = Arc::new(RecordingRepository::default());
        let app = test_app(AppState::with_repository(repo.clone()));

        for body in [
            r#"{"email":"ada@example.com"}"#,
            r#"{"name":"Ada"}"#,
            "{not json",
        ] {
            let response = app.clone().oneshot(create_request(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        }

        assert_eq!(repo.puts.load(Ordering::SeqCst), 0);

        let response = app
            .oneshot(create_request(
                r#"{"name":"Ada","email":"ada@example.com"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(repo.puts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_create_invalid_json_is_bad_request() {
        let app = test_app(AppState::default());

        let response = app.oneshot(create_request("{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let message = json_body(response).await["message"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(message.starts_with("Malformed request body"));
    }

    #[tokio::test]
    async fn test_create_non_string_name_is_bad_request() {
        let app = test_app(AppState::default());

        let response = app
            .oneshot(create_request(r#"{"name":42,"email":"ada@example.com"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_ignores_caller_supplied_id() {
        let app = test_app(AppState::default());

        let response = app
            .oneshot(create_request(
                r#"{"user_id":"mine","name":"Ada","email":"ada@example.com"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_ne!(json_body(response).await["user_id"], "mine");
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let app = test_app(AppState::default());

        let requests = (0..32).map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let body = format!(r#"{{"name":"user{i}","email":"same@example.com"}}"#);
                let response = app.oneshot(create_request(&body)).await.unwrap();
                json_body(response).await["user_id"]
                    .as_str()
                    .unwrap()
                    .to_string()
            })
        });

        let mut ids = HashSet::new();
        for handle in requests.collect::<Vec<_>>() {
            ids.insert(handle.await.unwrap());
        }

        assert_eq!(ids.len(), 32);
    }

    #[tokio::test]
    async fn test_storage_fault_on_create_is_server_error() {
        let state = AppState::with_repository(Arc::new(FailingRepository(
            RepositoryError::QueryFailed("Throughput exceeded".to_string()),
        )));
        let app = test_app(state);

        let response = app
            .oneshot(create_request(
                r#"{"name":"Ada","email":"ada@example.com"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await["message"],
            "Query failed: Throughput exceeded"
        );
    }

    #[tokio::test]
    async fn test_storage_fault_on_get_is_not_reported_as_missing() {
        let state = AppState::with_repository(Arc::new(FailingRepository(
            RepositoryError::ConnectionFailed("Failed to reach DynamoDB".to_string()),
        )));
        let app = test_app(state);

        let response = app.oneshot(get_request("any")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_storage_fault_on_delete_is_server_error() {
        let state = AppState::with_repository(Arc::new(FailingRepository(
            RepositoryError::QueryFailed("Table not found".to_string()),
        )));
        let app = test_app(state);

        let response = app.oneshot(delete_request("any")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
