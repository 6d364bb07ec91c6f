//! HTTP client for the auth (`/auth/v1`) and REST (`/rest/v1`) endpoints.

use super::events::{SessionEvent, SessionEvents, SessionSubscription};
use super::models::{
    ApiError, CreditRow, PasswordCredentials, RefreshRequest, RoleAssignment, Session,
};
use super::store::SessionStore;
use super::AuthBackend;
use crate::backend::utils::config::BackendConfig;
use crate::utils::{Error, ErrorKind, Result};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Tokens this close to expiry are refreshed before use.
const EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    store: SessionStore,
    events: SessionEvents,
}

impl SupabaseClient {
    pub fn new(config: &BackendConfig, store: SessionStore) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs.max(1)))
            .user_agent(concat!("ai-studio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            store,
            events: SessionEvents::new(),
        })
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn with_key(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("apikey", &self.anon_key)
    }

    fn as_user(&self, request: RequestBuilder, session: &Session) -> RequestBuilder {
        self.with_key(request).bearer_auth(&session.access_token)
    }

    /// Signs in with email and password, persisting the new session.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        log::info!("Signing in {email}");
        let request = self
            .with_key(self.http.post(self.auth_url("token")))
            .query(&[("grant_type", "password")])
            .json(&PasswordCredentials { email, password });

        let session: Session = read_json(check(request.send().await?).await?).await?;
        let session = session.stamp_expiry(Utc::now());
        self.persist(&session).await;
        self.events.emit(SessionEvent::signed_in(session.clone()));
        Ok(session)
    }

    /// Registers a new account. Returns a session only when the project
    /// confirms accounts immediately; otherwise the user must confirm by email.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Option<Session>> {
        log::info!("Signing up {email}");
        let request = self
            .with_key(self.http.post(self.auth_url("signup")))
            .json(&PasswordCredentials { email, password });

        let body: serde_json::Value = read_json(check(request.send().await?).await?).await?;
        if body.get("access_token").is_none() {
            return Ok(None);
        }

        let session = serde_json::from_value::<Session>(body)?.stamp_expiry(Utc::now());
        self.persist(&session).await;
        self.events.emit(SessionEvent::signed_in(session.clone()));
        Ok(Some(session))
    }

    async fn refresh(&self, session: &Session) -> Result<Session> {
        let request = self
            .with_key(self.http.post(self.auth_url("token")))
            .query(&[("grant_type", "refresh_token")])
            .json(&RefreshRequest {
                refresh_token: &session.refresh_token,
            });

        let refreshed: Session = read_json(check(request.send().await?).await?).await?;
        Ok(refreshed.stamp_expiry(Utc::now()))
    }

    async fn persist(&self, session: &Session) {
        if let Err(e) = self.store.save(session).await {
            log::error!("Failed to persist session: {e}");
        }
    }

    async fn forget(&self) {
        if let Err(e) = self.store.clear().await {
            log::error!("Failed to remove stored session: {e}");
        }
    }
}

#[async_trait]
impl AuthBackend for SupabaseClient {
    async fn get_session(&self) -> Result<Option<Session>> {
        let Some(session) = self.store.load().await else {
            return Ok(None);
        };

        if !session.is_expired(Utc::now(), Duration::seconds(EXPIRY_MARGIN_SECS)) {
            return Ok(Some(session));
        }

        log::debug!("Session for {} expired, refreshing", session.user_id());
        match self.refresh(&session).await {
            Ok(fresh) => {
                self.persist(&fresh).await;
                self.events.emit(SessionEvent::refreshed(fresh.clone()));
                Ok(Some(fresh))
            }
            // The refresh token was rejected: the session is gone for good.
            Err(e) if matches!(e.kind(), ErrorKind::Status(400..=499)) => {
                log::warn!("Session refresh rejected: {e}");
                self.forget().await;
                self.events.emit(SessionEvent::signed_out());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn subscribe(&self) -> SessionSubscription {
        self.events.subscribe()
    }

    async fn sign_out(&self) -> Result<()> {
        let Some(session) = self.store.load().await else {
            return Ok(());
        };

        let request = self.as_user(self.http.post(self.auth_url("logout")), &session);
        let remote = match request.send().await {
            Ok(response) => check(response).await.map(|_| ()),
            Err(e) => Err(e.into()),
        };

        // Local state goes away whatever the server said.
        self.forget().await;
        self.events.emit(SessionEvent::signed_out());
        remote
    }

    async fn query_role_assignment(
        &self,
        session: &Session,
        role: &str,
    ) -> Result<Option<RoleAssignment>> {
        let request = self
            .as_user(self.http.get(self.rest_url("user_roles")), session)
            .query(&[
                ("select", "role".to_string()),
                ("user_id", format!("eq.{}", session.user_id())),
                ("role", format!("eq.{role}")),
            ]);

        let rows: Vec<RoleAssignment> = read_json(check(request.send().await?).await?).await?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.into_iter().next()),
            n => Err(Error::invalid(format!("Expected one role row, got {n}"))),
        }
    }

    async fn query_credit_balance(&self, session: &Session) -> Result<i64> {
        let request = self
            .as_user(self.http.get(self.rest_url("credits")), session)
            .query(&[
                ("select", "balance".to_string()),
                ("user_id", format!("eq.{}", session.user_id())),
            ]);

        let rows: Vec<CreditRow> = read_json(check(request.send().await?).await?).await?;
        match rows.as_slice() {
            [row] => Ok(row.balance.unwrap_or(0)),
            [] => Err(Error::invalid("No credit row for user")),
            rows => Err(Error::invalid(format!("Expected one credit row, got {}", rows.len()))),
        }
    }
}

/// Turns a non-success response into an [`Error`] carrying the server message.
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiError>(&body)
        .map(|e| e.describe())
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Request failed").to_string());
    Err(Error::status(status.as_u16(), message))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
