use crate::config::StoreConfig;
use tracing::{info, warn};

/// Checks admin credentials. Kept outside the stores so the check can be
/// swapped for a real identity provider.
pub trait Authenticator: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(&config.admin_username, &config.admin_password)
    }
}

impl Authenticator for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Admin login flag. No expiry and no token.
#[derive(Debug, Clone, Default)]
pub struct AdminSession {
    username: Option<String>,
}

impl AdminSession {
    pub fn login(&mut self, authenticator: &dyn Authenticator, username: &str, password: &str) -> bool {
        if authenticator.verify(username, password) {
            self.username = Some(username.to_string());
            info!(username, "Admin logged in");
            true
        } else {
            warn!(username, "Admin login rejected");
            false
        }
    }

    pub fn logout(&mut self) {
        if let Some(username) = self.username.take() {
            info!(username = %username, "Admin logged out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}
