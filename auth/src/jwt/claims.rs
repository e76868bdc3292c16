use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Bearer token claims for an authenticated account.
///
/// The payload is derived from the persisted account record at the moment
/// of issuance and carries exactly the account identity plus the standard
/// issued-at/expiry fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account identifier)
    pub sub: String,

    /// Account email address
    pub email: String,

    /// Roles granted to the account
    pub roles: Vec<String>,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an account with a day-based lifetime.
    ///
    /// # Arguments
    /// * `account_id` - Unique account identifier
    /// * `email` - Account email address
    /// * `roles` - Roles granted to the account
    /// * `ttl_days` - Days until the token expires
    pub fn for_account(
        account_id: impl ToString,
        email: impl ToString,
        roles: Vec<String>,
        ttl_days: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::days(ttl_days);

        Self {
            sub: account_id.to_string(),
            email: email.to_string(),
            roles,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
