//! Authentication infrastructure library
//!
//! Provides the building blocks the account service authenticates with:
//! - Password hashing (Argon2id, configurable work factor)
//! - JWT token issuance and validation
//! - An authentication coordinator combining the two
//!
//! The library performs no I/O: hashing and token handling are pure over
//! their inputs apart from salt generation. Configuration (signing key,
//! Argon2 cost parameters) is injected at construction and immutable
//! afterwards.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{JwtHandler, Claims};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let claims = Claims::for_account("user123", "ann@x.com", vec!["user".into()], 365);
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//!
//! // Signup: hash password for storage
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token
//! let claims = Claims::for_account("user123", "ann@x.com", vec!["user".into()], 365);
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Validate token on protected routes
//! let decoded: Claims = auth.validate_token(&result.access_token).unwrap();
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
