use crate::application::configuration::app::AppConfiguration;
use crate::application::configuration::dto::{DurationInSeconds, HiddenString};
use crate::domain::crypto::{Hasher, HashingScheme, SchemeAwareHasher};
use crate::domain::jwt::Claims;
use crate::domain::repository::{RepositoryError, UserRepository};
use crate::domain::user::{PasswordHandler, User, normalize_email};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    InvalidCredentials,
    UserNotFound,
    TokenExpired,
    InvalidToken,
    TokenEncodingFailed,
    InternalError(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::UserNotFound => write!(f, "User not found"),
            AuthError::TokenExpired => write!(f, "Token expired"),
            AuthError::InvalidToken => write!(f, "Invalid token"),
            AuthError::TokenEncodingFailed => write!(f, "Token encoding failed"),
            AuthError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

#[derive(Debug, Clone)]
pub struct Token {
    pub value: String,
    pub expires_at: usize,
}

#[derive(Clone)]
pub struct AuthService {
    user_repository: Arc<dyn UserRepository>,
    hashing_scheme: HashingScheme,
    secret: HiddenString,
    token_duration: DurationInSeconds,
}

impl AuthService {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        hashing_scheme: HashingScheme,
        secret: HiddenString,
        token_duration: DurationInSeconds,
    ) -> Self {
        Self {
            user_repository,
            hashing_scheme,
            secret,
            token_duration,
        }
    }

    /// Unknown email and wrong password both end up as `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> Result<Token, AuthError> {
        let mut user = self
            .user_repository
            .get_by_email(&normalize_email(email))
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => AuthError::InvalidCredentials,
                e => AuthError::InternalError(e.to_string()),
            })?;

        let hasher = SchemeAwareHasher::with_scheme(self.hashing_scheme);

        if !user.verify_password(&hasher, password) {
            return Err(AuthError::InvalidCredentials);
        }

        if hasher.is_password_outdated(&user.password) {
            self.rehash_password(&mut user, &hasher, password).await;
        }

        self.issue_token(user.id)
    }

    pub fn issue_token(&self, user_id: i64) -> Result<Token, AuthError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.token_duration.to_signed());
        let claims = Claims::new(user_id, now.timestamp() as usize, exp.timestamp() as usize);

        let value = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("Failed to encode token: {:?}", e);
            AuthError::TokenEncodingFailed
        })?;

        Ok(Token {
            value,
            expires_at: claims.exp,
        })
    }

    pub fn verify_token(&self, token: &str) -> Result<i64, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => {
                tracing::debug!("Rejected token: {:?}", e);
                AuthError::InvalidToken
            }
        })?;

        Ok(decoded.claims.user_id)
    }

    /// Resolves a bearer token to the stored user it was issued for.
    pub async fn authenticate(&self, token: &str) -> Result<User, AuthError> {
        let user_id = self.verify_token(token)?;

        self.user_repository
            .get_by_id(user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => AuthError::UserNotFound,
                e => AuthError::InternalError(e.to_string()),
            })
    }

    async fn rehash_password(&self, user: &mut User, hasher: &SchemeAwareHasher, password: &str) {
        match hasher.hash_password(password) {
            Ok(new_password) => {
                user.set_password(new_password);
                match self
                    .user_repository
                    .update_password(user.id, &user.password)
                    .await
                {
                    Ok(_) => tracing::debug!("Password updated for {}({})", &user.email, user.id),
                    Err(e) => tracing::error!("Could not update password hash {:?}", e),
                }
            }
            Err(e) => tracing::error!("Could not update password hash {:?}", e),
        }
    }
}

pub fn create_auth_service(
    config: &AppConfiguration,
    user_repository: Arc<dyn UserRepository>,
) -> AuthService {
    AuthService::new(
        user_repository,
        config.password_hashing_scheme(),
        config.secret().clone(),
        config.token_duration_in_seconds(),
    )
}
