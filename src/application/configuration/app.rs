use crate::application::configuration::dto::{DurationInSeconds, HiddenString};
use crate::domain::crypto::HashingScheme;
use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use tracing::Level;

const SEVENTY_TWO_HOURS: u64 = 72 * 60 * 60;

pub struct AppConfigurationBuilder {
    pub secret: Option<HiddenString>,
    pub password_hashing_scheme: Option<HashingScheme>,
    pub token_duration_in_seconds: Option<DurationInSeconds>,
    pub port: Option<String>,
    pub host: Option<String>,
    pub log_level: Option<Level>,
}

impl AppConfigurationBuilder {
    pub fn new() -> Self {
        AppConfigurationBuilder {
            secret: None,
            password_hashing_scheme: None,
            token_duration_in_seconds: None,
            port: None,
            host: None,
            log_level: None,
        }
    }

    pub fn secret(&mut self, value: &str) -> &mut Self {
        self.secret = Some(HiddenString::from(value));
        self
    }

    pub fn password_hashing_scheme(&mut self, value: HashingScheme) -> &mut Self {
        self.password_hashing_scheme = Some(value);
        self
    }

    pub fn token_duration_in_seconds(&mut self, value: DurationInSeconds) -> &mut Self {
        self.token_duration_in_seconds = Some(value);
        self
    }

    pub fn port(&mut self, value: String) -> &mut Self {
        self.port = Some(value);
        self
    }

    pub fn host(&mut self, value: String) -> &mut Self {
        self.host = Some(value);
        self
    }

    pub fn log_level(&mut self, value: Level) -> &mut Self {
        self.log_level = Some(value);
        self
    }

    /// Reads every known variable; unparsable values are ignored and fall back to defaults.
    pub fn load_env(&mut self) -> &mut Self {
        self.secret = env::var(EnvNames::SECRET).ok().map(HiddenString::from);
        self.password_hashing_scheme = env::var(EnvNames::PASSWORD_HASHING_SCHEME)
            .ok()
            .and_then(|v| HashingScheme::from_str(&v).ok());
        self.token_duration_in_seconds = env::var(EnvNames::TOKEN_DURATION_IN_SECONDS)
            .ok()
            .and_then(|v| DurationInSeconds::try_from(v).ok());
        self.port = env::var(EnvNames::PORT).ok();
        self.host = env::var(EnvNames::HOST).ok();
        self.log_level = env::var(EnvNames::LOG_LEVEL)
            .ok()
            .and_then(|v| Level::from_str(&v).ok());

        self
    }

    pub fn build(&self) -> AppConfiguration {
        AppConfiguration {
            secret: self
                .secret
                .clone()
                .unwrap_or_else(|| HiddenString::from("secret")),
            password_hashing_scheme: self
                .password_hashing_scheme
                .unwrap_or(HashingScheme::BcryptLow),
            token_duration_in_seconds: self
                .token_duration_in_seconds
                .unwrap_or(DurationInSeconds(SEVENTY_TWO_HOURS)),
            port: self.port.clone().unwrap_or("8080".to_string()),
            host: self.host.clone().unwrap_or("0.0.0.0".to_string()),
            log_level: self.log_level.unwrap_or(Level::INFO),
        }
    }
}

impl Default for AppConfigurationBuilder {
    fn default() -> Self {
        AppConfigurationBuilder::new()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfiguration {
    secret: HiddenString,
    password_hashing_scheme: HashingScheme,
    token_duration_in_seconds: DurationInSeconds,
    port: String,
    host: String,
    log_level: Level,
}

impl AppConfiguration {
    pub fn secret(&self) -> &HiddenString {
        &self.secret
    }

    pub fn password_hashing_scheme(&self) -> HashingScheme {
        self.password_hashing_scheme
    }

    pub fn token_duration_in_seconds(&self) -> DurationInSeconds {
        self.token_duration_in_seconds
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn log_level(&self) -> Level {
        self.log_level
    }

    pub fn envs(&self) -> HashMap<String, String> {
        let mut envs = HashMap::new();

        envs.insert(
            EnvNames::SECRET.to_owned(),
            self.secret.as_str().to_string(),
        );
        envs.insert(
            EnvNames::PASSWORD_HASHING_SCHEME.to_owned(),
            self.password_hashing_scheme.to_string(),
        );
        envs.insert(
            EnvNames::TOKEN_DURATION_IN_SECONDS.to_owned(),
            self.token_duration_in_seconds.0.to_string(),
        );
        envs.insert(EnvNames::PORT.to_owned(), self.port.clone());
        envs.insert(EnvNames::HOST.to_owned(), self.host.clone());
        envs.insert(EnvNames::LOG_LEVEL.to_owned(), self.log_level.to_string());

        envs
    }
}

pub struct EnvNames;

impl EnvNames {
    pub const SECRET: &'static str = "SECRET";
    pub const PASSWORD_HASHING_SCHEME: &'static str = "PASSWORD_HASHING_SCHEME";
    pub const TOKEN_DURATION_IN_SECONDS: &'static str = "TOKEN_DURATION_IN_SECONDS";
    pub const PORT: &'static str = "PORT";
    pub const HOST: &'static str = "HOST";
    pub const LOG_LEVEL: &'static str = "LOG_LEVEL";
}
