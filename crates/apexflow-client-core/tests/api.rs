use apexflow_client_core::{
    storage::{KeyValueStorage as _, MemoryStorage},
    Client, ClientConfig, SessionStore,
};
use apexflow_shared::{
    errors::{ApiError, NotLoggedInError},
    req_args::{
        api::{
            logistics::ShippingReqArgs, order::ListReqArgs, user::UpdateProfileReqArgs,
        },
        LoginReqArgs,
    },
    token::AuthToken,
    uac::{Permission, UserInfo},
};
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, MockServer, Request, ResponseTemplate,
};

const CONTEXT_PATH: &str = "/ApexFlow";

struct TestApp {
    server: MockServer,
    client: Client,
    storage: MemoryStorage,
}

impl TestApp {
    async fn spawn() -> Self {
        let server = MockServer::start().await;
        let storage = MemoryStorage::new();
        let config = ClientConfig::new(format!("{}{CONTEXT_PATH}", server.uri()));
        let client = Client::new(&config, SessionStore::new(storage.clone())).unwrap();
        Self {
            server,
            client,
            storage,
        }
    }

    async fn spawn_with_token(token: &str) -> Self {
        let result = Self::spawn().await;
        result
            .client
            .begin_guest_session(AuthToken::try_from(token).unwrap())
            .unwrap();
        result
    }

    async fn received(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap()
    }
}

fn api_path(endpoint: &str) -> String {
    format!("{CONTEXT_PATH}/api{endpoint}")
}

fn ok_envelope(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "message": "ok",
        "timestamp": 1_700_000_000_000u64,
        "data": data,
    }))
}

#[tokio::test]
async fn request_without_token_has_no_authorization_header() {
    // Arrange
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .and(path(api_path("/orders/list")))
        .respond_with(ok_envelope(json!({"total": 0, "list": []})))
        .expect(1)
        .mount(&app.server)
        .await;

    // Act
    let actual = app
        .client
        .list_orders(ListReqArgs::default(), || {})
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(actual, json!({"total": 0, "list": []}));
    let requests = app.received().await;
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn stored_token_is_sent_as_bearer() {
    let app = TestApp::spawn_with_token("xyz").await;
    Mock::given(method("GET"))
        .and(path(api_path("/orders/7")))
        .and(header("authorization", "Bearer xyz"))
        .respond_with(ok_envelope(json!({"id": 7})))
        .expect(1)
        .mount(&app.server)
        .await;

    let actual = app.client.get_order(7, || {}).await.unwrap().unwrap();

    assert_eq!(actual["id"], 7);
}

#[tokio::test]
async fn get_arguments_go_in_the_query() {
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .and(path(api_path("/orders/list")))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "10000"))
        .respond_with(ok_envelope(json!([])))
        .expect(1)
        .mount(&app.server)
        .await;

    let actual = app.client.get_all_orders_for_analysis(|| {}).await.unwrap();

    assert!(actual.is_ok(), "{actual:?}");
}

#[tokio::test]
async fn put_arguments_go_in_the_body() {
    let app = TestApp::spawn_with_token("xyz").await;
    Mock::given(method("PUT"))
        .and(path(api_path("/logistics/3/shipping")))
        .and(body_json(json!({"expressCompany": "SF", "trackingNumber": "SF123"})))
        .respond_with(ok_envelope(json!(null)))
        .expect(1)
        .mount(&app.server)
        .await;
    let args = ShippingReqArgs {
        express_company: "SF".into(),
        tracking_number: "SF123".into(),
        sender_address: None,
    };

    let actual = app.client.ship(3, args, || {}).await.unwrap();

    assert!(actual.is_ok(), "{actual:?}");
}

#[tokio::test]
async fn rejected_envelope_becomes_api_error() {
    // Arrange
    let app = TestApp::spawn_with_token("xyz").await;
    Mock::given(method("GET"))
        .and(path(api_path("/income/statistics")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "no access",
            "errorCode": "FORBIDDEN",
        })))
        .mount(&app.server)
        .await;

    // Act
    let actual = app.client.income_stats(|| {}).await.unwrap().unwrap_err();

    // Assert
    let api_error = actual.downcast_ref::<ApiError>().unwrap();
    assert_eq!(api_error.to_string(), "no access");
    assert_eq!(api_error.error_code(), Some("FORBIDDEN"));
}

#[tokio::test]
async fn permissions_without_token_are_refused_locally() {
    let app = TestApp::spawn().await;

    let actual = app.client.refresh_permissions(|| {}).await.unwrap().unwrap_err();

    assert!(actual.downcast_ref::<NotLoggedInError>().is_some(), "{actual:?}");
    assert!(app.received().await.is_empty());
}

#[tokio::test]
async fn ui_is_notified_even_when_request_is_refused() {
    let app = TestApp::spawn().await;
    let (tx, rx) = std::sync::mpsc::channel();

    let _ = app
        .client
        .refresh_permissions(move || tx.send(()).unwrap())
        .await;

    assert!(rx.try_recv().is_ok());
}

#[tokio::test]
async fn login_stores_token_identity_and_permissions() {
    // Arrange
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/login")))
        .and(body_json(json!({"username": "alice", "password": "pw"})))
        .respond_with(ok_envelope(json!({
            "token": "tok-1",
            "user": {"id": 1, "username": "alice", "realName": "Alice", "isAdmin": false},
        })))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/user/permissions")))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ok_envelope(json!({
            "isAdmin": false,
            "canManageOrder": true,
            "canManageIncome": false,
        })))
        .expect(1)
        .mount(&app.server)
        .await;
    let args = LoginReqArgs::new("alice", "pw".to_string().into());

    // Act
    let actual = app.client.login(args, || {}).await.unwrap().unwrap();

    // Assert
    assert_eq!(actual.real_name.as_deref(), Some("Alice"));
    let state = app.client.session_state();
    assert!(state.is_logged_in());
    assert!(state.has_permission(Permission::ManageOrder));
    assert!(!state.has_permission(Permission::ManageIncome));
    assert_eq!(state.user_role_text(), "Order Manager");
    assert_eq!(app.storage.get("token").unwrap().as_deref(), Some("tok-1"));
    assert!(app.storage.get("userInfo").unwrap().is_some());
    assert!(app.storage.get("permissions").unwrap().is_some());
}

#[tokio::test]
async fn login_is_undone_when_permissions_fail() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/login")))
        .respond_with(ok_envelope(json!({
            "token": "tok-1",
            "user": {"id": 1, "username": "alice"},
        })))
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/user/permissions")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.server)
        .await;
    let args = LoginReqArgs::new("alice", "pw".to_string().into());

    let actual = app.client.login(args, || {}).await.unwrap();

    assert!(actual.is_err());
    assert!(app.client.session_state().token().is_none());
    assert!(app.storage.is_empty());
}

#[tokio::test]
async fn failed_login_leaves_session_alone() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/login")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "bad credentials",
        })))
        .mount(&app.server)
        .await;
    let args = LoginReqArgs::new("alice", "wrong".to_string().into());

    let actual = app.client.login(args, || {}).await.unwrap().unwrap_err();

    assert_eq!(actual.root_cause().to_string(), "bad credentials");
    assert!(!app.client.is_logged_in());
}

#[tokio::test]
async fn unauthorized_with_token_clears_session() {
    let app = TestApp::spawn_with_token("expired").await;
    Mock::given(method("GET"))
        .and(path(api_path("/logistics/stats")))
        .respond_with(ResponseTemplate::new(401))
        .mount(&app.server)
        .await;

    let actual = app.client.logistics_stats(|| {}).await.unwrap();

    assert!(actual.is_err());
    assert!(!app.client.is_logged_in());
    assert!(app.storage.is_empty());
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let app = TestApp::spawn_with_token("xyz").await;
    Mock::given(method("DELETE"))
        .and(path(api_path("/review/5")))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&app.server)
        .await;

    let actual = app.client.delete_review(5, || {}).await.unwrap().unwrap_err();

    assert!(actual.to_string().contains("500"), "{actual}");
    // Token is kept, only a 401 invalidates it
    assert!(app.client.is_logged_in());
}

#[tokio::test]
async fn logout_clears_session_even_when_server_fails() {
    let app = TestApp::spawn_with_token("xyz").await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/logout")))
        .and(header("authorization", "Bearer xyz"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&app.server)
        .await;

    let actual = app.client.logout(|| {}).await.unwrap();

    assert!(actual.is_err());
    assert!(!app.client.is_logged_in());
    assert!(app.storage.is_empty());
}

#[tokio::test]
async fn refresh_permissions_keeps_identity() {
    let app = TestApp::spawn_with_token("xyz").await;
    Mock::given(method("GET"))
        .and(path(api_path("/user/permissions")))
        .respond_with(ok_envelope(json!({"isAdmin": true})))
        .mount(&app.server)
        .await;

    let actual = app.client.refresh_permissions(|| {}).await.unwrap().unwrap();

    assert!(actual.contains(Permission::Admin));
    let state = app.client.session_state();
    assert!(state.is_admin());
    assert_eq!(state.user_info(), Some(&UserInfo::guest()));
}

#[tokio::test]
async fn update_profile_replaces_stored_name() {
    let app = TestApp::spawn_with_token("xyz").await;
    Mock::given(method("PUT"))
        .and(path(api_path("/user/profile")))
        .and(body_json(json!({"realName": "Bob"})))
        .respond_with(ok_envelope(json!(null)))
        .expect(1)
        .mount(&app.server)
        .await;
    let args = UpdateProfileReqArgs {
        real_name: Some("Bob".into()),
        ..Default::default()
    };

    let actual = app.client.update_profile(args, || {}).await.unwrap().unwrap();

    assert_eq!(actual.real_name.as_deref(), Some("Bob"));
    assert_eq!(app.client.session_state().display_name(), "Bob");
}

#[tokio::test]
async fn stale_unauthorized_keeps_newer_login() {
    // Arrange
    let app = TestApp::spawn_with_token("old").await;
    Mock::given(method("GET"))
        .and(path(api_path("/logistics/stats")))
        .and(header("authorization", "Bearer old"))
        .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_millis(500)))
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/login")))
        .respond_with(ok_envelope(json!({
            "token": "new",
            "user": {"id": 2, "username": "bob"},
        })))
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/user/permissions")))
        .and(header("authorization", "Bearer new"))
        .respond_with(ok_envelope(json!({"canManageLogistics": true})))
        .mount(&app.server)
        .await;
    let stale = app.client.logistics_stats(|| {});
    let args = LoginReqArgs::new("bob", "pw".to_string().into());
    app.client.login(args, || {}).await.unwrap().unwrap();

    // Act
    let actual = stale.await.unwrap();

    // Assert
    assert!(actual.is_err());
    let state = app.client.session_state();
    assert!(state.is_logged_in());
    assert_eq!(state.token().map(AuthToken::as_str), Some("new"));
    assert_eq!(app.storage.get("token").unwrap().as_deref(), Some("new"));
}

#[tokio::test]
async fn logout_sends_no_body() {
    let app = TestApp::spawn_with_token("xyz").await;
    Mock::given(method("POST"))
        .and(path(api_path("/auth/logout")))
        .respond_with(ok_envelope(json!(null)))
        .expect(1)
        .mount(&app.server)
        .await;

    let actual = app.client.logout(|| {}).await.unwrap();

    assert!(actual.is_ok(), "{actual:?}");
    let requests = app.received().await;
    assert!(requests[0].body.is_empty(), "{:?}", requests[0].body);
}
