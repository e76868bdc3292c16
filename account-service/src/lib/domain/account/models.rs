use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::account::errors::AccountIdError;
use crate::account::errors::EmailError;

/// Account aggregate entity.
///
/// The only type in the crate that carries the password hash. It never
/// crosses the service boundary; callers receive [`AccountProfile`].
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub roles: Vec<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an account ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AccountIdError> {
        Uuid::parse_str(s)
            .map(AccountId)
            .map_err(|e| AccountIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a validated email address from an already-canonical string.
    ///
    /// Used when rehydrating persisted records; signup input goes through
    /// [`EmailAddress::normalized`] instead.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Normalize raw signup input (trim, lowercase) and validate it.
    ///
    /// Uniqueness of accounts is case-insensitive; every address is stored
    /// and compared in this canonical form.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn normalized(raw: &str) -> Result<Self, EmailError> {
        Self::new(raw.trim().to_lowercase())
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Account view returned to callers.
///
/// Identical to [`Account`] minus the password hash; the field does not
/// exist here, so a stored hash cannot leak through any response path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    pub id: AccountId,
    pub name: String,
    pub email: EmailAddress,
    pub roles: Vec<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountProfile {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            roles: account.roles.clone(),
            image: account.image.clone(),
            created_at: account.created_at,
        }
    }
}

/// Command to register a new account with domain types
#[derive(Debug)]
pub struct SignupCommand {
    pub name: String,
    pub email: EmailAddress,
    pub password: String,
    pub role: String,
    pub image: Option<String>,
}

impl SignupCommand {
    /// Construct a new signup command.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Normalized email address
    /// * `password` - Plain text password (hashed by the service)
    /// * `role` - Initial role granted to the account
    /// * `image` - Optional profile image reference
    pub fn new(
        name: String,
        email: EmailAddress,
        password: String,
        role: String,
        image: Option<String>,
    ) -> Self {
        Self {
            name,
            email,
            password,
            role,
            image,
        }
    }
}

/// A fresh bearer token together with the account it authenticates.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub token: String,
    pub account: AccountProfile,
}
