// directory-api/tests/employees_api.rs
// Router tests against the in-memory store

use std::time::{Duration, Instant};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use directory_api::api::create_router;
use directory_api::db::{EmployeeStore, MemoryEmployeeStore, StoreError, create_pool};
use directory_api::{AppState, Config};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shared::Employee;
use tower::ServiceExt;

fn ada() -> Value {
    json!({
        "id": "EMP123456",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@x.io",
        "department": "Développement",
        "position": "Lead Developer",
        "status": "active",
        "hireDate": "2024-01-02",
        "salary": 50000
    })
}

/// Store whose every call fails as if the pool timed out
struct DownStore;

#[async_trait]
impl EmployeeStore for DownStore {
    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        Err(StoreError::Unavailable("pool timed out".into()))
    }

    async fn insert(&self, _employee: &Employee) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("pool timed out".into()))
    }
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_ok_on_both_prefixes() {
    let app = create_router(AppState::new(MemoryEmployeeStore::new()));

    for uri in ["/health", "/api/health"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!({ "status": "ok" }));
    }
}

#[tokio::test]
async fn test_health_does_not_touch_store() {
    let app = create_router(AppState::new(DownStore));
    let (status, _) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_list_empty_store() {
    let app = create_router(AppState::new(MemoryEmployeeStore::new()));
    let (status, body) = send(&app, get("/employees")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_then_list() {
    let store = MemoryEmployeeStore::new();
    let app = create_router(AppState::new(store.clone()));

    let (status, body) = send(&app, post_json("/employees", &ada())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Employé créé");
    assert!(body["id"].is_u64());

    let (status, body) = send(&app, get("/api/employees")).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "EMP123456");
    assert_eq!(rows[0]["firstName"], "Ada");
    assert_eq!(rows[0]["hireDate"], "2024-01-02");
    assert_eq!(rows[0]["salary"].as_f64(), Some(50000.0));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_create_missing_salary_is_rejected() {
    let store = MemoryEmployeeStore::new();
    let app = create_router(AppState::new(store.clone()));

    let mut payload = ada();
    payload.as_object_mut().unwrap().remove("salary");

    let (status, body) = send(&app, post_json("/employees", &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Données employé manquantes");
    assert_eq!(body["details"]["fields"], json!(["salary"]));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_empty_string_counts_as_missing() {
    let app = create_router(AppState::new(MemoryEmployeeStore::new()));

    let mut payload = ada();
    payload["email"] = json!("");

    let (status, body) = send(&app, post_json("/employees", &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["fields"], json!(["email"]));
}

#[tokio::test]
async fn test_create_invalid_status() {
    let app = create_router(AppState::new(MemoryEmployeeStore::new()));

    let mut payload = ada();
    payload["status"] = json!("retired");

    let (status, body) = send(&app, post_json("/employees", &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Statut employé invalide");
}

#[tokio::test]
async fn test_create_duplicate_id_conflicts() {
    let store = MemoryEmployeeStore::new();
    let app = create_router(AppState::new(store.clone()));

    let (status, _) = send(&app, post_json("/employees", &ada())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, post_json("/employees", &ada())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Employé déjà existant");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = create_router(AppState::new(MemoryEmployeeStore::new()));

    let request = Request::builder()
        .method("POST")
        .uri("/employees")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"id\": "))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_store_down_is_generic_500() {
    let app = create_router(AppState::new(DownStore));

    let (status, body) = send(&app, get("/employees")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Erreur serveur");
    assert!(body.get("details").is_none());

    let (status, body) = send(&app, post_json("/employees", &ada())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Erreur serveur");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = create_router(AppState::new(MemoryEmployeeStore::new()));
    let (status, body) = send(&app, get("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Ressource introuvable");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = create_router(AppState::new(MemoryEmployeeStore::new()));
    let response = app.oneshot(get("/health")).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_concrete_payload_round_trip() {
    let app = create_router(AppState::new(MemoryEmployeeStore::new()));
    let payload = json!({
        "id": "EMP999901",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@x.com",
        "phone": "",
        "department": "Développement",
        "position": "Lead Developer",
        "status": "active",
        "hireDate": "2024-01-01",
        "salary": 60000,
        "avatar": null
    });

    let (status, body) = send(&app, post_json("/api/employees", &payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_u64());

    let (_, body) = send(&app, get("/api/employees")).await;
    let row = &body.as_array().unwrap()[0];
    assert_eq!(row["id"], "EMP999901");
    assert_eq!(row["firstName"], "Ada");
    assert_eq!(row["email"], "ada@x.com");
    assert_eq!(row["department"], "Développement");
    assert_eq!(row["status"], "active");
    assert_eq!(row["hireDate"], "2024-01-01");
    assert_eq!(row["salary"].as_f64(), Some(60000.0));
    assert!(row["phone"].is_null());
    assert!(row["avatar"].is_null());
}

#[tokio::test]
async fn test_oversized_field_is_bad_request() {
    let store = MemoryEmployeeStore::new();
    let app = create_router(AppState::new(store.clone()));

    let mut payload = ada();
    payload["firstName"] = json!("A".repeat(101));

    let (status, body) = send(&app, post_json("/employees", &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Champ employé trop long");
    assert_eq!(body["details"]["fields"], json!(["firstName"]));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_salary_beyond_two_decimals_is_bad_request() {
    let store = MemoryEmployeeStore::new();
    let app = create_router(AppState::new(store.clone()));

    let mut payload = ada();
    payload["salary"] = json!("50000.125");

    let (status, body) = send(&app, post_json("/employees", &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Salaire invalide");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_unsupported_method_is_json_405() {
    let app = create_router(AppState::new(MemoryEmployeeStore::new()));

    for uri in ["/employees", "/api/employees", "/health"] {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        assert_eq!(body["error"], "Méthode non autorisée");
        assert_eq!(body["code"], 6);
    }
}

#[tokio::test]
async fn test_unreachable_database_fails_within_acquire_timeout() {
    // Reserve a local port and release it so nothing listens there
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut config = Config::from_lookup(|name| match name {
        "DB_HOST" => Some("127.0.0.1".to_string()),
        "DB_PORT" => Some(port.to_string()),
        "DB_NAME" => Some("directory".to_string()),
        "DB_USER" => Some("directory".to_string()),
        "DB_PASSWORD" => Some("directory".to_string()),
        "DB_SSL_DISABLED" => Some("true".to_string()),
        _ => None,
    });
    config.database.pool_size = 1;
    config.database.acquire_timeout = Duration::from_millis(200);

    let pool = create_pool(&config.database);
    let app = create_router(AppState::from_pool(pool.clone()));

    let started = Instant::now();
    let (status, body) = tokio::time::timeout(Duration::from_secs(10), send(&app, get("/employees")))
        .await
        .expect("request must not hang past the acquire timeout");
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Erreur serveur");
    assert!(started.elapsed() < Duration::from_secs(10));

    // Liveness does not depend on the database
    let (status, _) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);

    pool.close().await;
}
