use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use chrono::Utc;

use super::errors::AccountError;
use super::models::Account;
use super::models::AccountId;
use super::models::AccountProfile;
use super::models::AuthenticatedAccount;
use super::models::SignupCommand;
use super::ports::AccountRepository;
use super::ports::AccountServicePort;

/// Domain service implementation for account operations.
///
/// Orchestrates signup, login, and profile retrieval over the repository
/// port and the authenticator. Stateless per call; the authenticator and
/// token lifetime are read-only after construction.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    authenticator: Arc<Authenticator>,
    token_ttl_days: i64,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    /// * `token_ttl_days` - Lifetime of issued tokens in days
    pub fn new(repository: Arc<AR>, authenticator: Arc<Authenticator>, token_ttl_days: i64) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl_days,
        }
    }

    /// Build token claims from a persisted account record.
    ///
    /// Claims are derived only from the record at the moment of issuance.
    fn claims_for(&self, account: &Account) -> Claims {
        Claims::for_account(
            account.id,
            account.email.as_str(),
            account.roles.clone(),
            self.token_ttl_days,
        )
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn signup(&self, command: SignupCommand) -> Result<AuthenticatedAccount, AccountError> {
        // Duplicate check against the canonical email form. The existence
        // check and the insert are separate calls; the unique index on
        // email is the backstop for concurrent signups.
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            tracing::debug!(email = %command.email, "Signup rejected, email taken");
            return Err(AccountError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;

        let account = Account {
            id: AccountId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            roles: vec![command.role],
            image: command.image,
            created_at: Utc::now(),
        };

        let created = self
            .repository
            .create(account)
            .await?
            .ok_or(AccountError::CreateFailed)?;

        let claims = self.claims_for(&created);
        let token = self.authenticator.issue_token(&claims)?;

        tracing::info!(account_id = %created.id, "Account created");

        Ok(AuthenticatedAccount {
            token,
            account: AccountProfile::from(&created),
        })
    }

    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedAccount, AccountError> {
        // Lookup by the email exactly as supplied.
        let account = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AccountError::NotFound(email.to_string()))?;

        let claims = self.claims_for(&account);

        let result = self
            .authenticator
            .authenticate(password, &account.password_hash, &claims)
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => AccountError::InvalidCredentials,
                auth::AuthenticationError::PasswordError(err) => AccountError::Password(err),
                auth::AuthenticationError::JwtError(err) => AccountError::Token(err),
            })?;

        Ok(AuthenticatedAccount {
            token: result.access_token,
            account: AccountProfile::from(&account),
        })
    }

    async fn get_account(&self, id: &AccountId) -> Result<AccountProfile, AccountError> {
        let account = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AccountError::NotFound(id.to_string()))?;

        Ok(AccountProfile::from(&account))
    }
}
