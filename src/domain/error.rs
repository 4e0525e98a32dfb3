use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: String) -> Self {
        ValidationError { field, message }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ValidationError {}

#[derive(Debug, Clone, PartialEq)]
pub enum CryptoError {
    SchemeNotSupported { scheme: String },
    EncryptionFailed,
    PasswordTooLong { max_bytes: usize },
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::SchemeNotSupported { scheme } => {
                write!(f, "Password hashing scheme not supported: {}", scheme)
            }
            CryptoError::EncryptionFailed => write!(f, "Password encryption failed"),
            CryptoError::PasswordTooLong { max_bytes } => {
                write!(f, "Password longer than {} bytes", max_bytes)
            }
        }
    }
}

impl Error for CryptoError {}
