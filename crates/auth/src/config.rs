//! Process-wide session configuration.
//!
//! The signing secret, algorithm, and TTL are loaded once at startup and
//! immutable afterwards; there is no runtime mutation path.

use core::str::FromStr;

use chrono::Duration;
use thiserror::Error;

/// Signing algorithms supported as deployment configuration.
///
/// Exactly one algorithm is active per deployment; tokens signed under any
/// other algorithm are rejected at validation time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SigningAlgorithm {
    Hs256,
    Hs384,
    Hs512,
}

impl SigningAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            SigningAlgorithm::Hs256 => "HS256",
            SigningAlgorithm::Hs384 => "HS384",
            SigningAlgorithm::Hs512 => "HS512",
        }
    }

    pub(crate) fn to_jwt(self) -> jsonwebtoken::Algorithm {
        match self {
            SigningAlgorithm::Hs256 => jsonwebtoken::Algorithm::HS256,
            SigningAlgorithm::Hs384 => jsonwebtoken::Algorithm::HS384,
            SigningAlgorithm::Hs512 => jsonwebtoken::Algorithm::HS512,
        }
    }
}

impl core::fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SigningAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HS256" => Ok(SigningAlgorithm::Hs256),
            "HS384" => Ok(SigningAlgorithm::Hs384),
            "HS512" => Ok(SigningAlgorithm::Hs512),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CRM_JWT_SECRET is not set")]
    MissingSecret,

    #[error("unknown signing algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("invalid session TTL: {0}")]
    InvalidTtl(String),
}

/// Immutable session configuration, injected at startup.
#[derive(Clone)]
pub struct SessionConfig {
    secret: Vec<u8>,
    pub algorithm: SigningAlgorithm,
    pub ttl: Duration,
}

impl SessionConfig {
    pub const DEFAULT_TTL_HOURS: i64 = 24;

    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: SigningAlgorithm::Hs256,
            ttl: Duration::hours(Self::DEFAULT_TTL_HOURS),
        }
    }

    pub fn with_algorithm(mut self, algorithm: SigningAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Load configuration from the environment.
    ///
    /// `CRM_JWT_SECRET` is required; `CRM_JWT_ALGORITHM` (default HS256) and
    /// `CRM_JWT_TTL_HOURS` (default 24) are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("CRM_JWT_SECRET").map_err(|_| ConfigError::MissingSecret)?;
        if secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }

        let algorithm = match std::env::var("CRM_JWT_ALGORITHM") {
            Ok(value) => value.parse()?,
            Err(_) => SigningAlgorithm::Hs256,
        };

        let ttl = match std::env::var("CRM_JWT_TTL_HOURS") {
            Ok(value) => {
                let hours: i64 = value
                    .parse()
                    .map_err(|_| ConfigError::InvalidTtl(value.clone()))?;
                if hours <= 0 {
                    return Err(ConfigError::InvalidTtl(value));
                }
                Duration::hours(hours)
            }
            Err(_) => Duration::hours(Self::DEFAULT_TTL_HOURS),
        };

        Ok(Self::new(secret.into_bytes())
            .with_algorithm(algorithm)
            .with_ttl(ttl))
    }

    pub(crate) fn secret(&self) -> &[u8] {
        &self.secret
    }
}

impl core::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"***")
            .field("algorithm", &self.algorithm)
            .field("ttl", &self.ttl)
            .finish()
    }
}
