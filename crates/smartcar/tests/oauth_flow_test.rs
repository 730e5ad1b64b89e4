//! Integration tests for the authorization-code flow.
//!
//! These drive the reqwest endpoint against a local mock of the provider's
//! token endpoint.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use smartcar::constants::{CALLBACK_URL_ENV, CLIENT_ID_ENV, CLIENT_SECRET_ENV};
use smartcar::{
    AuthorizationRequestOptions, Clock, ConfigProvider, OAuthClient, OAuthError, Smartcar,
    StaticConfigProvider, SystemClock, TokenLine, TokenRecord, TokenState,
};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn complete_config() -> StaticConfigProvider {
    StaticConfigProvider::new()
        .with(CLIENT_ID_ENV, "test-client")
        .with(CLIENT_SECRET_ENV, "test-secret")
        .with(CALLBACK_URL_ENV, "https://example.com/home")
}

/// Counts every configuration read.
struct CountingConfig {
    inner: StaticConfigProvider,
    lookups: Arc<AtomicUsize>,
}

impl CountingConfig {
    fn new(inner: StaticConfigProvider) -> Self {
        Self {
            inner,
            lookups: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl ConfigProvider for CountingConfig {
    fn lookup(&self, name: &str) -> Option<String> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.lookup(name)
    }
}

fn client_for(server: &MockServer, config: StaticConfigProvider) -> OAuthClient {
    Smartcar::new()
        .with_config(config)
        .with_site(server.uri())
        .build()
        .expect("Failed to build client")
}

fn token_body(access: &str, refresh: &str) -> serde_json::Value {
    serde_json::json!({
        "access_token": access,
        "token_type": "Bearer",
        "expires_in": 7200,
        "refresh_token": refresh,
        "scope": "read_odometer read_vehicle_info"
    })
}

#[test]
fn test_authorization_url_parameters() {
    let client = Smartcar::new()
        .with_config(complete_config())
        .build()
        .unwrap();

    let url = client
        .build_authorization_url(
            &AuthorizationRequestOptions::new().with_scope(["read_odometer", "read_vehicle_info"]),
        )
        .unwrap();

    assert_eq!(
        url,
        "https://auth.smartcar.com/oauth/authorize?response_type=code&client_id=test-client\
         &redirect_uri=https%3A%2F%2Fexample.com%2Fhome&approval_prompt=auto&mode=live\
         &scope=read_odometer%20read_vehicle_info"
    );
    assert!(!url.contains("state="));
    assert!(!url.contains("make="));
    assert!(!url.contains("parameter="));
}

#[test]
fn test_authorization_url_flags_and_optional_values() {
    let client = Smartcar::new()
        .with_config(complete_config())
        .build()
        .unwrap();

    let url = client
        .build_authorization_url(
            &AuthorizationRequestOptions::new()
                .with_force_prompt(true)
                .with_test_mode(true)
                .with_state("user 7")
                .with_make("TESLA"),
        )
        .unwrap();

    assert!(url.contains("approval_prompt=force"));
    assert!(url.contains("mode=test"));
    assert!(url.contains("state=user%207"));
    assert!(url.contains("make=TESLA"));
    assert!(!url.contains("scope="));
}

#[tokio::test]
async fn test_exchange_then_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=auth-code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-1", "refresh-1")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=refresh-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-2", "refresh-2")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, complete_config());

    let record = client.exchange_code("auth-code").await.unwrap();
    assert_eq!(record.access_token(), "access-1");
    assert_eq!(record.refresh_token(), "refresh-1");
    assert_eq!(record.token_type(), "Bearer");
    assert_eq!(record.raw()["scope"], "read_odometer read_vehicle_info");
    assert!(!record.is_expired_or_expiring(SystemClock::new().now(), 60));

    // The host persists the record and hands it back later.
    let stored = serde_json::to_string(&record).unwrap();
    let restored: TokenRecord = serde_json::from_str(&stored).unwrap();

    let refreshed = client.refresh(&restored).await.unwrap();
    assert_eq!(refreshed.access_token(), "access-2");
    assert_eq!(refreshed.refresh_token(), "refresh-2");
}

#[tokio::test]
async fn test_rejected_refresh_invalidates_line() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-1", "refresh-1")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_grant",
            "error_description": "refresh token revoked"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, complete_config());
    let mut line = TokenLine::new();

    line.exchange(&client, "auth-code").await.unwrap();
    assert_eq!(line.state(), TokenState::Active);

    let err = line.refresh(&client).await.unwrap_err();
    let OAuthError::TokenRefresh(rejection) = &err else {
        panic!("expected TokenRefresh, got {err:?}");
    };
    assert_eq!(rejection.error.as_deref(), Some("invalid_grant"));
    assert_eq!(line.state(), TokenState::Invalid);
    assert!(line.record().is_none());
}

#[tokio::test]
async fn test_rejected_code_is_exchange_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_grant",
            "error_description": "code already used"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, complete_config());
    let err = client.exchange_code("used-code").await.unwrap_err();

    let OAuthError::TokenExchange(ref rejection) = err else {
        panic!("expected TokenExchange, got {err:?}");
    };
    assert_eq!(
        rejection.error_description.as_deref(),
        Some("code already used")
    );
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_missing_callback_makes_no_network_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("a", "r")))
        .expect(0)
        .mount(&server)
        .await;

    let config = StaticConfigProvider::new()
        .with(CLIENT_ID_ENV, "test-client")
        .with(CLIENT_SECRET_ENV, "test-secret");
    let client = client_for(&server, config);

    let url = client.build_authorization_url(&AuthorizationRequestOptions::new());
    assert!(matches!(url, Err(OAuthError::Configuration(_))));

    let exchange = client.exchange_code("auth-code").await;
    assert!(matches!(exchange, Err(OAuthError::Configuration(_))));

    // A record from an earlier, correctly configured process.
    let record: TokenRecord = serde_json::from_value(serde_json::json!({
        "access_token": "a",
        "refresh_token": "r",
        "token_type": "Bearer",
        "expires_at": 1_700_000_000
    }))
    .unwrap();
    let refresh = client.refresh(&record).await;
    assert!(matches!(refresh, Err(OAuthError::Configuration(_))));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_use_shares_identity() {
    let config = CountingConfig::new(complete_config());
    let lookups = Arc::clone(&config.lookups);
    let client = Arc::new(
        Smartcar::new()
            .with_config(config)
            .build()
            .unwrap(),
    );

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            client
                .build_authorization_url(&AuthorizationRequestOptions::new())
                .unwrap()
        }));
    }

    let mut urls = Vec::new();
    for handle in handles {
        urls.push(handle.await.unwrap());
    }

    assert!(urls.iter().all(|url| url == &urls[0]));
    assert_eq!(lookups.load(Ordering::SeqCst), 3);
}
