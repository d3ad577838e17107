//! Main authentication service implementation

use std::sync::Arc;

use ec_shared::validation::validators;
use tracing::{debug, info};

use crate::domain::entities::user::User;
use crate::domain::value_objects::{AccessToken, LoginCredentials, RegisterUser, UserProfile};
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Registration and login against the credential store
pub struct AuthService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    /// User repository for credential storage
    user_repository: Arc<U>,
    /// One-way password hashing
    password_hasher: Arc<H>,
    /// Token service for JWT issuing
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, H> AuthService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        password_hasher: Arc<H>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_service,
            config,
        }
    }

    /// Register a new identity
    ///
    /// Email, name and address are stored trimmed; the password is hashed as
    /// submitted. The returned profile never carries the hash.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - First failing rule among email, email format,
    ///   password, password length, name
    /// * `AuthError::UserAlreadyExists` - Email already registered
    /// * `DomainError::Storage` - Credential store failure
    pub async fn register(&self, input: RegisterUser) -> DomainResult<UserProfile> {
        let email = input.email.trim();
        let name = input.name.trim();
        self.validate_registration(email, &input.password, name)?;

        if self.user_repository.exists_by_email(email).await? {
            info!("Registration rejected: email already registered");
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.password_hasher.hash(&input.password).await?;
        let user = User::new(
            email.to_string(),
            password_hash,
            name.to_string(),
            input.address.trim().to_string(),
        );
        let user = self.user_repository.create(user).await?;

        info!(user_id = %user.id, "User registered");
        Ok(user.into())
    }

    fn validate_registration(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<(), ValidationError> {
        if !validators::not_blank(email) {
            return Err(ValidationError::required("Email"));
        }
        if !validators::is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !validators::not_blank(password) {
            return Err(ValidationError::required("Password"));
        }
        if !validators::min_len(password, self.config.min_password_length) {
            return Err(ValidationError::TooShort {
                field: "Password".to_string(),
                min: self.config.min_password_length,
            });
        }
        if !validators::not_blank(name) {
            return Err(ValidationError::required("Name"));
        }
        Ok(())
    }

    /// Exchange email and password for an access token
    ///
    /// An unknown email and a wrong password produce the same
    /// `AuthError::InvalidCredentials`.
    pub async fn login(&self, credentials: LoginCredentials) -> DomainResult<AccessToken> {
        let email = credentials.email.trim();
        if !validators::not_blank(email) {
            return Err(ValidationError::required("Email").into());
        }
        if !validators::is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if !validators::not_blank(&credentials.password) {
            return Err(ValidationError::required("Password").into());
        }

        let Some(user) = self.user_repository.find_by_email(email).await? else {
            debug!("Login failed: no matching identity");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self
            .password_hasher
            .verify(&credentials.password, &user.password_hash)
            .await?
        {
            debug!(user_id = %user.id, "Login failed: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue_token(user.id)?;
        info!(user_id = %user.id, "User logged in");
        Ok(token)
    }
}
