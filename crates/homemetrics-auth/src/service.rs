//! Authentication service: registration and login.

use homemetrics_core::error::{HomeError, HomeResult};
use homemetrics_core::models::user::{AuthResponse, CreateUser, LoginInput};
use homemetrics_core::repository::UserRepository;
use tracing::info;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::token;

/// Authentication service.
///
/// Generic over the user repository so that the auth layer has no
/// dependency on the store crate.
pub struct AuthService<U: UserRepository> {
    user_repo: U,
    config: AuthConfig,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(user_repo: U, config: AuthConfig) -> Self {
        Self { user_repo, config }
    }

    /// Create an account and sign the caller in.
    pub async fn register(&self, input: CreateUser) -> HomeResult<AuthResponse> {
        input.validate()?;

        let user = self.user_repo.create(input).await?;
        let token = token::issue_token(&user, &self.config)?;

        Ok(AuthResponse { token, user })
    }

    /// Check a username/password pair and issue a token.
    ///
    /// An unknown username and a wrong password fail identically.
    pub async fn login(&self, input: LoginInput) -> HomeResult<AuthResponse> {
        let user = match self.user_repo.get_by_username(&input.username).await {
            Ok(u) => u,
            Err(HomeError::NotFound { .. }) => return Err(AuthError::InvalidCredentials.into()),
            Err(e) => return Err(e),
        };

        // Secrets are stored as supplied and compared verbatim.
        if user.password != input.password {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = token::issue_token(&user, &self.config)?;
        info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(AuthResponse { token, user })
    }
}
