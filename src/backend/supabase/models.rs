//! Rows and payloads exchanged with the backend.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated principal as returned by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Contact identifier shown in the UI.
    pub fn display_name(&self) -> &str {
        self.email
            .as_deref()
            .or(self.phone.as_deref())
            .unwrap_or(self.id.as_str())
    }
}

/// Server-issued proof of authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Unix seconds.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Deserialize)]
struct Claims {
    exp: Option<i64>,
}

impl Session {
    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    /// Expiry from `expires_at`, falling back to the access token's `exp` claim.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let secs = self.expires_at.or_else(|| token_expiry(&self.access_token))?;
        Utc.timestamp_opt(secs, 0).single()
    }

    /// True when the token expires within `margin` of `now`. A session with
    /// no known expiry never counts as expired.
    pub fn is_expired(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        self.expires_at().is_some_and(|at| at <= now + margin)
    }

    /// Fills `expires_at` from `expires_in` when the server only sent the latter.
    pub fn stamp_expiry(mut self, now: DateTime<Utc>) -> Self {
        if self.expires_at.is_none()
            && let Some(expires_in) = self.expires_in
        {
            self.expires_at = Some(now.timestamp() + expires_in);
        }
        self
    }
}

/// Reads `exp` from a JWT payload without verifying the signature.
pub fn token_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice::<Claims>(&bytes).ok()?.exp
}

/// Row of `user_roles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role: String,
}

/// Row of `credits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditRow {
    #[serde(default)]
    pub balance: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PasswordCredentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Error body of the auth and REST endpoints. Field names differ by
/// service and version so all of them are optional.
#[derive(Debug, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiError {
    pub fn describe(&self) -> String {
        self.error_description
            .as_ref()
            .or(self.msg.as_ref())
            .or(self.message.as_ref())
            .or(self.error.as_ref())
            .cloned()
            .unwrap_or_else(|| "Unknown backend error".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn token_with_exp(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"u1","exp":{exp}}}"#));
        format!("{header}.{payload}.signature")
    }

    fn session(expires_at: Option<i64>, token: String) -> Session {
        Session {
            access_token: token,
            refresh_token: "refresh".to_string(),
            token_type: "bearer".to_string(),
            expires_in: Some(3600),
            expires_at,
            user: User {
                id: "u1".to_string(),
                email: Some("a@b.co".to_string()),
                phone: None,
                created_at: None,
            },
        }
    }

    #[test]
    fn reads_exp_claim_from_token() {
        assert_eq!(token_expiry(&token_with_exp(1_700_000_000)), Some(1_700_000_000));
        assert_eq!(token_expiry("garbage"), None);
    }

    #[test]
    fn expiry_prefers_explicit_field() {
        let s = session(Some(100), token_with_exp(200));
        assert_eq!(s.expires_at().unwrap().timestamp(), 100);

        let s = session(None, token_with_exp(200));
        assert_eq!(s.expires_at().unwrap().timestamp(), 200);
    }

    #[test]
    fn expiry_respects_margin() {
        let now = Utc.timestamp_opt(1_000, 0).unwrap();
        let s = session(Some(1_030), "opaque".to_string());
        assert!(s.is_expired(now, Duration::seconds(60)));
        assert!(!s.is_expired(now, Duration::seconds(10)));

        let unknown = session(None, "opaque".to_string());
        assert!(!unknown.is_expired(now, Duration::seconds(60)));
    }

    #[test]
    fn stamp_fills_missing_expiry() {
        let now = Utc.timestamp_opt(1_000, 0).unwrap();
        let s = session(None, "opaque".to_string()).stamp_expiry(now);
        assert_eq!(s.expires_at, Some(4_600));
    }

    #[test]
    fn session_parses_auth_response() {
        let json = r#"{
            "access_token": "a", "refresh_token": "r", "token_type": "bearer",
            "expires_in": 3600, "expires_at": 1700003600,
            "user": { "id": "abc", "email": "x@y.z", "aud": "authenticated" }
        }"#;
        let s: Session = serde_json::from_str(json).unwrap();
        assert_eq!(s.user_id(), "abc");
        assert_eq!(s.user.display_name(), "x@y.z");
    }

    #[test]
    fn api_error_prefers_description() {
        let err: ApiError =
            serde_json::from_str(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#)
                .unwrap();
        assert_eq!(err.describe(), "Invalid login credentials");
        assert_eq!(ApiError::default().describe(), "Unknown backend error");
    }

    #[test]
    fn api_error_ignores_numeric_code() {
        let err: ApiError =
            serde_json::from_str(r#"{"code":400,"error_code":"email_not_confirmed","msg":"Email not confirmed"}"#)
                .unwrap();
        assert_eq!(err.describe(), "Email not confirmed");
    }
}
