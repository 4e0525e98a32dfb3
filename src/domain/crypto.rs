use crate::domain::error::CryptoError;
use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use bcrypt::DEFAULT_COST;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Bcrypt only reads this many bytes of input, anything after them is ignored.
pub const BCRYPT_MAX_PASSWORD_BYTES: usize = 72;

pub trait Hasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, CryptoError>;
    fn verify_password(&self, password: &str, hash: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum HashingScheme {
    Argon2,
    Bcrypt,
    BcryptLow,
}

impl fmt::Display for HashingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HashingScheme::Argon2 => "argon2",
            HashingScheme::Bcrypt => "bcrypt",
            HashingScheme::BcryptLow => "bcrypt_low",
        };

        write!(f, "{}", name)
    }
}

impl FromStr for HashingScheme {
    type Err = CryptoError;

    fn from_str(scheme: &str) -> Result<Self, Self::Err> {
        match scheme {
            "argon2" => Ok(HashingScheme::Argon2),
            "bcrypt" => Ok(HashingScheme::Bcrypt),
            "bcrypt_low" => Ok(HashingScheme::BcryptLow),
            _ => Err(CryptoError::SchemeNotSupported {
                scheme: scheme.to_string(),
            }),
        }
    }
}

/// Hashes with the current scheme and prefixes the result with its name
/// (`bcrypt_low.$2b$04$...`), so hashes made under an older scheme still verify.
pub struct SchemeAwareHasher {
    algorithms: HashMap<HashingScheme, Box<dyn Hasher>>,
    pub current_scheme: HashingScheme,
}

impl SchemeAwareHasher {
    pub fn with_scheme(scheme: HashingScheme) -> Self {
        let mut hashers: HashMap<HashingScheme, Box<dyn Hasher>> = HashMap::new();
        hashers.insert(HashingScheme::Argon2, Box::new(Argon2Hasher::new()));
        hashers.insert(HashingScheme::Bcrypt, Box::new(BcryptHasher::new()));
        hashers.insert(HashingScheme::BcryptLow, Box::new(BcryptHasher::low_cost()));

        SchemeAwareHasher {
            algorithms: hashers,
            current_scheme: scheme,
        }
    }

    pub fn is_password_outdated(&self, hash: &str) -> bool {
        match split_hash(hash) {
            Some((scheme, _)) => scheme != self.current_scheme,
            None => true,
        }
    }
}

impl Default for SchemeAwareHasher {
    fn default() -> Self {
        SchemeAwareHasher::with_scheme(HashingScheme::BcryptLow)
    }
}

impl Hasher for SchemeAwareHasher {
    fn hash_password(&self, password: &str) -> Result<String, CryptoError> {
        let hasher = self
            .algorithms
            .get(&self.current_scheme)
            .ok_or(CryptoError::EncryptionFailed)?;

        let hashed_password = hasher.hash_password(password)?;

        Ok(format!("{}.{}", self.current_scheme, hashed_password))
    }

    fn verify_password(&self, password: &str, hash: &str) -> bool {
        split_hash(hash).is_some_and(|(scheme, password_hash)| {
            self.algorithms
                .get(&scheme)
                .is_some_and(|hasher| hasher.verify_password(password, password_hash))
        })
    }
}

fn split_hash(hash: &str) -> Option<(HashingScheme, &str)> {
    let (scheme, password_hash) = hash.split_once('.')?;

    HashingScheme::from_str(scheme)
        .ok()
        .map(|scheme| (scheme, password_hash))
}

pub struct Argon2Hasher {}

impl Argon2Hasher {
    pub fn new() -> Self {
        Argon2Hasher {}
    }

    fn argon2() -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default())
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Argon2Hasher::new()
    }
}

impl Hasher for Argon2Hasher {
    fn hash_password(&self, password: &str) -> Result<String, CryptoError> {
        let salt = SaltString::generate(&mut OsRng);

        Self::argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| CryptoError::EncryptionFailed)
            .map(|hash| hash.to_string())
    }

    fn verify_password(&self, password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed_hash) => Self::argon2()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok(),
            Err(_) => false,
        }
    }
}

pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        BcryptHasher { cost: DEFAULT_COST }
    }

    pub fn low_cost() -> Self {
        BcryptHasher { cost: 4 }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        BcryptHasher::new()
    }
}

impl Hasher for BcryptHasher {
    fn hash_password(&self, password: &str) -> Result<String, CryptoError> {
        if password.len() > BCRYPT_MAX_PASSWORD_BYTES {
            return Err(CryptoError::PasswordTooLong {
                max_bytes: BCRYPT_MAX_PASSWORD_BYTES,
            });
        }

        bcrypt::hash(password, self.cost).map_err(|_| CryptoError::EncryptionFailed)
    }

    fn verify_password(&self, password: &str, hash: &str) -> bool {
        if password.len() > BCRYPT_MAX_PASSWORD_BYTES {
            return false;
        }

        bcrypt::verify(password, hash).unwrap_or(false)
    }
}
