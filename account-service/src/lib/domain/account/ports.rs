use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::AccountProfile;
use crate::account::models::AuthenticatedAccount;
use crate::account::models::SignupCommand;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account and issue its first token.
    ///
    /// # Arguments
    /// * `command` - Validated command with normalized email
    ///
    /// # Returns
    /// Fresh token and the created account profile
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered (case-insensitive)
    /// * `CreateFailed` - Persistence returned no record
    /// * `Password` - Password was empty or hashing failed
    /// * `Token` - Token signing failed
    /// * `DatabaseError` - Repository operation failed
    async fn signup(&self, command: SignupCommand) -> Result<AuthenticatedAccount, AccountError>;

    /// Verify credentials and issue a token.
    ///
    /// The email is looked up as supplied; normalization happens at signup
    /// only.
    ///
    /// # Arguments
    /// * `email` - Email address as supplied by the caller
    /// * `password` - Plaintext password candidate
    ///
    /// # Errors
    /// * `NotFound` - No account with this email
    /// * `InvalidCredentials` - Password does not match
    /// * `DatabaseError` - Repository operation failed
    async fn login(&self, email: &str, password: &str)
        -> Result<AuthenticatedAccount, AccountError>;

    /// Retrieve an account profile by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Repository operation failed
    async fn get_account(&self, id: &AccountId) -> Result<AccountProfile, AccountError>;
}

/// Persistence port for the account aggregate (the user directory).
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Returns
    /// The created account, or `None` if the store yielded no record
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Unique constraint on email violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, account: Account) -> Result<Option<Account>, AccountError>;

    /// Retrieve an account by identifier.
    ///
    /// # Returns
    /// Optional account (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;

    /// Retrieve an account by email address.
    ///
    /// # Returns
    /// Optional account (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;
}
