//! Integration tests for the API client against a mock backend.

use rust_decimal::Decimal;
use secondserve_core::dto::{FoodItemDto, FoodRequestDto};
use secondserve_core::{ApiClient, ApiError, SessionStore, UserRole};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn auth_response_json() -> serde_json::Value {
    serde_json::json!({
        "token": "tok-xyz",
        "userType": "HOTEL_MANAGER",
        "userId": 7,
        "name": "Grand Plaza",
        "email": "manager@grandplaza.test"
    })
}

fn client(server: &MockServer) -> ApiClient {
    ApiClient::with_base_url(server.uri(), SessionStore::new())
}

fn logged_in_client(server: &MockServer) -> ApiClient {
    let store = SessionStore::new();
    store.create(secondserve_core::Session {
        token: "tok-xyz".to_string(),
        user_id: 7,
        role: UserRole::HotelManager,
        display_name: "Grand Plaza".to_string(),
        email: None,
        organization_name: None,
    });
    ApiClient::with_base_url(server.uri(), store)
}

/// Protected call without a session fails locally: the error is
/// AuthenticationMissing and the mock server records zero requests.
#[tokio::test]
async fn test_protected_call_without_session_makes_no_network_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/hotels/dashboard-stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let api = client(&server);
    let result = api.dashboard_stats().await;

    assert_eq!(result.unwrap_err(), ApiError::AuthenticationMissing);
}

/// Approving a request without a session leaves the store absent and the
/// wire untouched.
#[tokio::test]
async fn test_approve_without_session_fails_preflight() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let api = client(&server);
    let result = api.approve_food_request(41).await;

    assert_eq!(result.unwrap_err(), ApiError::AuthenticationMissing);
    assert!(api.session().get().is_none());
}

/// Login with valid manager credentials stores a HOTEL_MANAGER session.
#[tokio::test]
async fn test_login_creates_manager_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_response_json()))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let session = api
        .login("manager@grandplaza.test", "hunter2", UserRole::HotelManager)
        .await
        .unwrap();

    assert_eq!(session.role, UserRole::HotelManager);
    assert!(!session.token.is_empty());
    let stored = api.session().get().unwrap();
    assert_eq!(stored.role, UserRole::HotelManager);
    assert_eq!(api.session().hotel_id(), Some(7));
}

/// Empty credentials fail validation before any round trip.
#[tokio::test]
async fn test_login_empty_credentials_fail_fast() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let api = client(&server);
    let result = api.login("  ", "pw", UserRole::Ngo).await;
    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

/// Authenticated calls carry the bearer token from the session store.
#[tokio::test]
async fn test_auth_header_attached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/food-items/hotel/7/pending"))
        .and(header("authorization", "Bearer tok-xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = logged_in_client(&server);
    let items = api.pending_food_items(7).await.unwrap();
    assert!(items.is_empty());
}

/// 2xx bodies with unknown extra fields still parse into the DTO.
#[tokio::test]
async fn test_unknown_fields_do_not_fail_parse() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/food-items/hotel/7/today"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": 3,
            "foodName": "Bread",
            "quantity": 1.25,
            "unit": "kg",
            "createdDate": "2026-08-25T08:00:00",
            "brandNewServerField": ["ignored"]
        }])))
        .mount(&server)
        .await;

    let api = logged_in_client(&server);
    let items: Vec<FoodItemDto> = api.todays_food_items(7).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].food_name.as_deref(), Some("Bread"));
    assert_eq!(items[0].quantity, Some(Decimal::new(125, 2)));
}

/// A 2xx body that does not match the expected shape is a parsing error,
/// distinct from a server-reported failure.
#[tokio::test]
async fn test_malformed_success_body_is_parsing_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/hotels/dashboard-stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let api = logged_in_client(&server);
    let result = api.dashboard_stats().await;
    assert!(matches!(result, Err(ApiError::Parsing { .. })));
}

/// Non-2xx responses carry the exact status code and the raw body.
#[tokio::test]
async fn test_application_error_passes_status_and_body_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/hotels/dashboard-stats"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(r#"{"error":"internal"}"#),
        )
        .mount(&server)
        .await;

    let api = logged_in_client(&server);
    let err = api.dashboard_stats().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Application {
            status: 500,
            body: r#"{"error":"internal"}"#.to_string(),
        }
    );
}

/// Transport failure resolves to a connection error instead of panicking.
#[tokio::test]
async fn test_unreachable_server_is_connection_error() {
    // Nothing listens on this port; the connect is refused immediately.
    let store = SessionStore::new();
    store.create(secondserve_core::Session {
        token: "tok".to_string(),
        user_id: 1,
        role: UserRole::Ngo,
        display_name: String::new(),
        email: None,
        organization_name: None,
    });
    let api = ApiClient::with_base_url("http://127.0.0.1:1", store);

    let result = api.ngo_food_requests(1).await;
    assert!(matches!(result, Err(ApiError::Connection { .. })));
}

/// Pending-request listing uses the PENDING status filter.
#[tokio::test]
async fn test_pending_requests_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/food-requests/hotel/7"))
        .and(query_param("status", "PENDING"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": 41,
            "ngoName": "Hope Kitchen",
            "foodItemName": "Rice",
            "requestedQuantity": 3.5,
            "requestStatus": "PENDING"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let api = logged_in_client(&server);
    let requests: Vec<FoodRequestDto> = api.pending_hotel_food_requests(7).await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, Some(41));
    assert_eq!(requests[0].request_status.as_deref(), Some("PENDING"));
}

/// State-transition endpoints tolerate empty 200 bodies.
#[tokio::test]
async fn test_approve_food_request_empty_body_ok() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/food-requests/41/approve"))
        .and(header("authorization", "Bearer tok-xyz"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = logged_in_client(&server);
    api.approve_food_request(41).await.unwrap();
}

/// Logging a food item posts the payload and parses the 201 echo.
#[tokio::test]
async fn test_log_food_item_created() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/food-items"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 99,
            "foodName": "Soup",
            "quantity": 4,
            "unit": "kg",
            "isAvailable": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = logged_in_client(&server);
    let item = FoodItemDto {
        food_name: Some("Soup".to_string()),
        quantity: Some(Decimal::new(4, 0)),
        unit: Some("kg".to_string()),
        ..FoodItemDto::default()
    };
    let created = api.log_food_item(&item).await.unwrap();
    assert_eq!(created.id, Some(99));
    assert_eq!(created.is_available, Some(false));
}

/// Logout drops the session; a second logout stays a no-op.
#[tokio::test]
async fn test_logout_clears_session() {
    let server = MockServer::start().await;
    let api = logged_in_client(&server);

    api.logout();
    assert!(api.session().get().is_none());
    api.logout();
    assert!(api.session().get().is_none());
}
