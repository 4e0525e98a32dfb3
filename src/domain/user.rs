use crate::domain::crypto::{BCRYPT_MAX_PASSWORD_BYTES, Hasher};
use crate::domain::error::CryptoError;
use crate::domain::validation::Rule;
use sqlx::FromRow;

pub const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(255), Rule::Email];
pub const PASSWORD_RULES: &[Rule] = &[
    Rule::Required,
    Rule::MinLength(8),
    Rule::MaxBytes(BCRYPT_MAX_PASSWORD_BYTES),
];
pub const NAME_RULES: &[Rule] = &[Rule::Required, Rule::MinLength(2), Rule::MaxLength(255)];

#[derive(FromRow, Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub name: String,
}

/// A user that has not been stored yet, the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl NewUser {
    pub fn new(email: &str, password: String, name: &str) -> Self {
        NewUser {
            email: normalize_email(email),
            password,
            name: name.trim().to_string(),
        }
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub trait PasswordHandler {
    fn password(&self) -> &str;
    fn set_password(&mut self, password: String);

    fn hash_password(&mut self, hasher: &impl Hasher) -> Result<(), CryptoError> {
        let hashed = hasher.hash_password(self.password())?;
        self.set_password(hashed);

        Ok(())
    }

    fn verify_password(&self, hasher: &impl Hasher, password: &str) -> bool {
        hasher.verify_password(password, self.password())
    }
}

impl PasswordHandler for User {
    fn password(&self) -> &str {
        &self.password
    }

    fn set_password(&mut self, password: String) {
        self.password = password;
    }
}

impl PasswordHandler for NewUser {
    fn password(&self) -> &str {
        &self.password
    }

    fn set_password(&mut self, password: String) {
        self.password = password;
    }
}
