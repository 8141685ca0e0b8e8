use crate::guard::DEFAULT_COOLDOWN_SECS;

/// Relative endpoint accepting multipart order submissions.
pub const ORDER_ENDPOINT: &str = "/api/order";

/// Messaging link opened for custom (zero-priced) orders.
pub const DEFAULT_CONTACT_URL: &str = "https://t.me/starshop_support";

pub const DEFAULT_CONFIRM_LABEL: &str = "Confirm";

/// Settings for one order session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Where orders are posted. Relative in the browser, absolute for the
    /// native client.
    pub endpoint: String,
    pub contact_url: String,
    /// Length of the post-submit lockout, in one-second ticks.
    pub cooldown_secs: u32,
    /// Text of the confirm control when it is enabled.
    pub confirm_label: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            endpoint: ORDER_ENDPOINT.to_string(),
            contact_url: DEFAULT_CONTACT_URL.to_string(),
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
            confirm_label: DEFAULT_CONFIRM_LABEL.to_string(),
        }
    }
}

impl SessionConfig {
    /// Point the session at a backend, joining the order endpoint onto it.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.endpoint = format!("{}{}", base_url.trim_end_matches('/'), ORDER_ENDPOINT);
        self
    }

    pub fn with_contact_url(mut self, contact_url: &str) -> Self {
        self.contact_url = contact_url.to_string();
        self
    }
}
