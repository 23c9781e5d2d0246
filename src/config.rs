/// Runtime configuration shared with the request handlers.
///
/// Constructed once in `main` from environment variables and passed around
/// explicitly instead of living in a process-wide global.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Credential required for mutating product and image operations.
    pub admin_api_key: String,
}

impl ServerConfig {
    pub fn new(admin_api_key: impl Into<String>) -> Self {
        Self {
            admin_api_key: admin_api_key.into(),
        }
    }

    /// Check a supplied credential against the privileged key.
    pub fn is_authorized(&self, credential: Option<&str>) -> bool {
        !self.admin_api_key.is_empty() && credential == Some(self.admin_api_key.as_str())
    }
}
