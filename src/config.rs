//! Server configuration loaded from environment variables

use crate::auth::{BcryptHasher, JwtAuth};

/// Configuration errors surface at start-up, before the listener binds
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("INSIGHT_JWT_SECRET must be at least {min} characters, got {len}")]
    SecretTooShort { min: usize, len: usize },
}

/// Runtime settings for the insight server
///
/// | Env Var               | Default     |
/// |-----------------------|-------------|
/// | `INSIGHT_HOST`        | `127.0.0.1` |
/// | `INSIGHT_PORT`        | `3000`      |
/// | `INSIGHT_JWT_SECRET`  | generated   |
/// | `INSIGHT_TOKEN_TTL`   | `604800`    |
/// | `INSIGHT_BCRYPT_COST` | `10`        |
/// | `INSIGHT_SEED_DATA`   | `true`      |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `None` means a per-process secret is generated at start-up
    pub jwt_secret: Option<String>,
    /// Token lifetime in seconds
    pub token_ttl: i64,
    pub bcrypt_cost: u32,
    pub seed_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            jwt_secret: None,
            token_ttl: JwtAuth::DEFAULT_TTL,
            bcrypt_cost: BcryptHasher::DEFAULT_COST,
            seed_data: true,
        }
    }
}

impl ServerConfig {
    /// Read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source; unset or blank means default
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let host = get("INSIGHT_HOST").unwrap_or(defaults.host);
        let port = parse_var("INSIGHT_PORT", get("INSIGHT_PORT"), defaults.port)?;

        let jwt_secret = get("INSIGHT_JWT_SECRET");
        if let Some(secret) = &jwt_secret {
            if secret.len() < JwtAuth::MIN_SECRET_LEN {
                return Err(ConfigError::SecretTooShort {
                    min: JwtAuth::MIN_SECRET_LEN,
                    len: secret.len(),
                });
            }
        }

        let token_ttl: i64 = parse_var("INSIGHT_TOKEN_TTL", get("INSIGHT_TOKEN_TTL"), defaults.token_ttl)?;
        if !(1..=JwtAuth::MAX_TTL).contains(&token_ttl) {
            return Err(invalid(
                "INSIGHT_TOKEN_TTL",
                token_ttl.to_string(),
                format!("must be between 1 and {} seconds", JwtAuth::MAX_TTL),
            ));
        }

        let bcrypt_cost: u32 =
            parse_var("INSIGHT_BCRYPT_COST", get("INSIGHT_BCRYPT_COST"), defaults.bcrypt_cost)?;
        if !(BcryptHasher::MIN_COST..=BcryptHasher::MAX_COST).contains(&bcrypt_cost) {
            return Err(invalid(
                "INSIGHT_BCRYPT_COST",
                bcrypt_cost.to_string(),
                format!(
                    "must be between {} and {}",
                    BcryptHasher::MIN_COST,
                    BcryptHasher::MAX_COST
                ),
            ));
        }

        let seed_data = match get("INSIGHT_SEED_DATA") {
            None => defaults.seed_data,
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| invalid("INSIGHT_SEED_DATA", raw, "expected true or false"))?,
        };

        Ok(Self {
            host,
            port,
            jwt_secret,
            token_ttl,
            bcrypt_cost,
            seed_data,
        })
    }

    /// `host:port` for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Token issuer from the configured or a generated secret
    pub fn jwt_auth(&self) -> JwtAuth {
        match &self.jwt_secret {
            Some(secret) => JwtAuth::with_ttl(secret, self.token_ttl),
            None => {
                tracing::warn!(
                    "INSIGHT_JWT_SECRET not set, generating a per-process secret; sessions will not survive a restart"
                );
                JwtAuth::with_ttl(&JwtAuth::generate_secret(), self.token_ttl)
            }
        }
    }

    pub fn password_hasher(&self) -> BcryptHasher {
        BcryptHasher::new(self.bcrypt_cost)
    }
}

fn invalid(name: &'static str, value: String, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        name,
        value,
        reason: reason.into(),
    }
}

fn parse_var<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| invalid(name, raw.clone(), e.to_string())),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
