//! Port fakes shared by the OAuth unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use smartcar_domain::constants::{CALLBACK_URL_ENV, CLIENT_ID_ENV, CLIENT_SECRET_ENV};
use smartcar_domain::{AuthorizationParams, ClientIdentity, TokenGrant, TokenResponse};

use super::OAuthClient;
use crate::ports::{Clock, ConfigProvider, EndpointError, TokenEndpointClient};

pub const NOW: i64 = 1_700_000_000;

/// Config provider that counts lookups.
pub struct CountingConfig {
    values: Mutex<HashMap<String, String>>,
    lookups: AtomicUsize,
}

impl CountingConfig {
    pub fn complete() -> Self {
        let values = [
            (CLIENT_ID_ENV, "client-id"),
            (CLIENT_SECRET_ENV, "client-secret"),
            (CALLBACK_URL_ENV, "https://app.test/callback"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            values: Mutex::new(values),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn without(self, name: &str) -> Self {
        self.values.lock().remove(name);
        self
    }

    pub fn with(self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&self, name: &str, value: &str) {
        self.values
            .lock()
            .insert(name.to_string(), value.to_string());
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ConfigProvider for CountingConfig {
    fn lookup(&self, name: &str) -> Option<String> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.values.lock().get(name).cloned()
    }
}

/// Token endpoint that replays queued results and records what it saw.
#[derive(Default)]
pub struct ScriptedEndpoint {
    results: Mutex<VecDeque<Result<TokenResponse, EndpointError>>>,
    grants: Mutex<Vec<TokenGrant>>,
    params: Mutex<Vec<AuthorizationParams>>,
    calls: AtomicUsize,
}

impl ScriptedEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, result: Result<TokenResponse, EndpointError>) -> Self {
        self.results.lock().push_back(result);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn grants(&self) -> Vec<TokenGrant> {
        self.grants.lock().clone()
    }

    pub fn last_params(&self) -> Option<AuthorizationParams> {
        self.params.lock().last().cloned()
    }
}

#[async_trait]
impl TokenEndpointClient for ScriptedEndpoint {
    fn authorize_url(&self, client_id: &str, params: &AuthorizationParams) -> String {
        self.params.lock().push(params.clone());
        let query = params
            .query_pairs(client_id)
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("https://auth.test/oauth/authorize?{query}")
    }

    async fn request_token(
        &self,
        _identity: &ClientIdentity,
        grant: &TokenGrant,
    ) -> Result<TokenResponse, EndpointError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.grants.lock().push(grant.clone());
        self.results
            .lock()
            .pop_front()
            .expect("no scripted response left")
    }
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(NOW, 0).unwrap()
    }
}

pub fn client_with(config: Arc<CountingConfig>, endpoint: Arc<ScriptedEndpoint>) -> OAuthClient {
    OAuthClient::new(config, endpoint, Arc::new(FixedClock))
}

pub fn token_response(value: serde_json::Value) -> TokenResponse {
    serde_json::from_value(value).unwrap()
}
