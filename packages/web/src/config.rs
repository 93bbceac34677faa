use std::env;

/// Bind address and port the fullstack server reads from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub ip: String,
    pub port: String,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            ip: lookup("IP").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT").unwrap_or_else(|| "8080".to_string()),
        }
    }

    pub fn port_is_valid(&self) -> bool {
        self.port.parse::<u16>().is_ok()
    }
}
