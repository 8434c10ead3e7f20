use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};

use shared::protocol::{RegisterRequest, RegisterResponse};

use crate::application::registration::{register_user, RegistrationError};
use crate::infrastructure::AppState;

pub fn register_routes() -> Router<AppState> {
    Router::new().route("/register", post(register))
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> impl IntoResponse {
    match register_user::execute(&state, request).await {
        Ok(accepted) => (
            StatusCode::OK,
            Json(RegisterResponse {
                message: "User created successfully".to_string(),
                uid: Some(accepted.uid),
            }),
        ),
        Err(err) => {
            let status = if err.is_validation() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (
                status,
                Json(RegisterResponse {
                    message: err.to_string(),
                    uid: None,
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt as _;

    use shared::protocol::AuthErrorCode;

    use crate::application::ports::{IdentityProvider, ProfileStore, ProviderError, StoreError};
    use crate::domain::ProfileRecord;

    #[derive(Default)]
    struct FakeIdentity {
        accounts: Mutex<HashMap<String, String>>, // email -> uid
        claims: Mutex<HashMap<String, String>>,   // uid -> role
        next_uid: AtomicU64,
    }

    #[async_trait]
    impl IdentityProvider for FakeIdentity {
        async fn create_account(
            &self,
            email: &str,
            _password: &str,
        ) -> Result<String, ProviderError> {
            let mut accounts = self.accounts.lock().unwrap();
            if accounts.contains_key(email) {
                return Err(ProviderError::new(AuthErrorCode::EmailExists, "EMAIL_EXISTS"));
            }
            let uid = format!("uid-{}", self.next_uid.fetch_add(1, Ordering::SeqCst));
            accounts.insert(email.to_string(), uid.clone());
            Ok(uid)
        }

        async fn set_role_claim(&self, uid: &str, role: &str) -> Result<(), ProviderError> {
            self.claims
                .lock()
                .unwrap()
                .insert(uid.to_string(), role.to_string());
            Ok(())
        }

        async fn delete_account(&self, uid: &str) -> Result<(), ProviderError> {
            self.accounts.lock().unwrap().retain(|_, v| v != uid);
            self.claims.lock().unwrap().remove(uid);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeProfiles {
        documents: Mutex<HashMap<String, ProfileRecord>>,
        fail_writes: bool,
    }

    #[async_trait]
    impl ProfileStore for FakeProfiles {
        async fn put(
            &self,
            _collection: &str,
            key: &str,
            profile: &ProfileRecord,
        ) -> Result<(), StoreError> {
            if self.fail_writes {
                return Err(StoreError("document store unavailable".into()));
            }
            self.documents
                .lock()
                .unwrap()
                .insert(key.to_string(), profile.clone());
            Ok(())
        }
    }

    fn app(identity: Arc<FakeIdentity>, profiles: Arc<FakeProfiles>) -> Router {
        register_routes().with_state(AppState {
            identity,
            profiles,
            users_collection: "users".into(),
        })
    }

    fn post_register(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/register")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn missing_fields_return_400_with_contract_message() {
        let identity = Arc::new(FakeIdentity::default());
        let app = app(identity.clone(), Arc::new(FakeProfiles::default()));

        let response = app
            .oneshot(post_register(json!({
                "email": "",
                "displayName": "Dr. Doe",
                "password": "secret1"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["message"], "Missing required fields");
        assert!(identity.accounts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn absent_field_returns_400_with_contract_message() {
        let identity = Arc::new(FakeIdentity::default());
        let app = app(identity.clone(), Arc::new(FakeProfiles::default()));

        // No password key at all, not an empty one.
        let response = app
            .oneshot(post_register(json!({
                "email": "doc@example.com",
                "displayName": "Dr. Doe"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["message"], "Missing required fields");
        assert!(identity.accounts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_email_returns_400() {
        let app = app(
            Arc::new(FakeIdentity::default()),
            Arc::new(FakeProfiles::default()),
        );

        let response = app
            .oneshot(post_register(json!({
                "email": "not-an-email",
                "displayName": "Dr. Doe",
                "password": "secret1"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["message"], "Invalid email format");
    }

    #[tokio::test]
    async fn weak_password_returns_400() {
        let app = app(
            Arc::new(FakeIdentity::default()),
            Arc::new(FakeProfiles::default()),
        );

        let response = app
            .oneshot(post_register(json!({
                "email": "doc@example.com",
                "displayName": "Dr. Doe",
                "password": "ab1"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["message"], "Password must be at least 6 characters long");
    }

    #[tokio::test]
    async fn successful_registration_returns_uid_and_writes_profile() {
        let identity = Arc::new(FakeIdentity::default());
        let profiles = Arc::new(FakeProfiles::default());
        let app = app(identity.clone(), profiles.clone());

        let response = app
            .oneshot(post_register(json!({
                "email": "doc@example.com",
                "displayName": "Dr. Doe",
                "password": "secret1",
                "role": "doctor"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["message"], "User created successfully");
        let uid = body["uid"].as_str().unwrap().to_string();

        let documents = profiles.documents.lock().unwrap();
        let profile = documents.get(&uid).expect("profile written");
        assert_eq!(profile.role, "doctor");
        assert_eq!(profile.name, "Dr. Doe");
        assert_eq!(profile.email, "doc@example.com");
        assert!(profile.is_active);

        assert_eq!(
            identity.claims.lock().unwrap().get(&uid).map(String::as_str),
            Some("doctor")
        );
    }

    #[tokio::test]
    async fn duplicate_email_returns_500_and_no_second_profile() {
        let identity = Arc::new(FakeIdentity::default());
        let profiles = Arc::new(FakeProfiles::default());

        let body = json!({
            "email": "doc@example.com",
            "displayName": "Dr. Doe",
            "password": "secret1"
        });

        let first = app(identity.clone(), profiles.clone())
            .oneshot(post_register(body.clone()))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app(identity.clone(), profiles.clone())
            .oneshot(post_register(body))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let second_body = response_json(second).await;
        assert_eq!(second_body["message"], "EMAIL_EXISTS");

        assert_eq!(profiles.documents.lock().unwrap().len(), 1);
        assert_eq!(identity.accounts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn profile_write_failure_returns_500_and_removes_the_account() {
        let identity = Arc::new(FakeIdentity::default());
        let profiles = Arc::new(FakeProfiles {
            fail_writes: true,
            ..Default::default()
        });
        let app = app(identity.clone(), profiles);

        let response = app
            .oneshot(post_register(json!({
                "email": "doc@example.com",
                "displayName": "Dr. Doe",
                "password": "secret1"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // Compensating deletion: the half-registered account is gone,
        // so the same email can register again later.
        assert!(identity.accounts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn role_defaults_to_user_when_absent() {
        let identity = Arc::new(FakeIdentity::default());
        let profiles = Arc::new(FakeProfiles::default());
        let app = app(identity.clone(), profiles.clone());

        let response = app
            .oneshot(post_register(json!({
                "email": "pat@example.com",
                "displayName": "Pat",
                "password": "secret1"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        let uid = body["uid"].as_str().unwrap().to_string();

        assert_eq!(
            profiles.documents.lock().unwrap().get(&uid).unwrap().role,
            "user"
        );
        assert_eq!(
            identity.claims.lock().unwrap().get(&uid).map(String::as_str),
            Some("user")
        );
    }
}
