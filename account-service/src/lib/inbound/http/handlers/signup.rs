use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::EmailError;
use crate::account::models::AccountProfile;
use crate::account::models::EmailAddress;
use crate::account::models::AuthenticatedAccount;
use crate::account::models::SignupCommand;
use crate::inbound::http::router::AppState;

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequestBody>,
) -> Result<ApiSuccess<SignupResponseData>, ApiError> {
    state
        .account_service
        .signup(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref authenticated| {
            ApiSuccess::new(StatusCode::CREATED, "Signup successful", authenticated.into())
        })
}

/// HTTP request body for signup (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequestBody {
    name: String,
    email: String,
    password: String,
    role: String,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseSignupRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl SignupRequestBody {
    fn try_into_command(self) -> Result<SignupCommand, ParseSignupRequestError> {
        // Email is trimmed and lowercased here; the rest of the pipeline
        // only ever sees the canonical form.
        let email = EmailAddress::normalized(&self.email)?;
        Ok(SignupCommand::new(
            self.name,
            email,
            self.password,
            self.role,
            self.image,
        ))
    }
}

impl From<ParseSignupRequestError> for ApiError {
    fn from(err: ParseSignupRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupResponseData {
    pub token: String,
    pub user: AccountData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub roles: Vec<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&AccountProfile> for AccountData {
    fn from(profile: &AccountProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            name: profile.name.clone(),
            email: profile.email.as_str().to_string(),
            roles: profile.roles.clone(),
            image: profile.image.clone(),
            created_at: profile.created_at,
        }
    }
}

impl From<&AuthenticatedAccount> for SignupResponseData {
    fn from(authenticated: &AuthenticatedAccount) -> Self {
        Self {
            token: authenticated.token.clone(),
            user: AccountData::from(&authenticated.account),
        }
    }
}
