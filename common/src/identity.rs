use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// The sender of an order, as known to the host application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    /// Handle without a leading `@`. Empty when unknown.
    pub handle: String,
    pub id: Option<String>,
}

impl Identity {
    /// Build an identity from user-editable form values.
    pub fn from_form(handle: &str, id: &str) -> Self {
        let id = id.trim();
        Self {
            handle: normalize_handle(handle),
            id: (!id.is_empty()).then(|| id.to_string()),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.handle.is_empty()
    }
}

/// Strip surrounding whitespace and a single leading `@`.
pub fn normalize_handle(raw: &str) -> String {
    let raw = raw.trim();
    raw.strip_prefix('@').unwrap_or(raw).trim().to_string()
}

/// Read access to the host application's notion of the current user.
///
/// The bridge hands back the raw context object, shaped
/// `{ "user": { "username": ..., "id": ... } }`, or `None` when the page is
/// not embedded in a host.
pub trait IdentityBridge {
    fn current_user(&self) -> Option<Value>;
}

impl<F> IdentityBridge for F
where
    F: Fn() -> Option<Value>,
{
    fn current_user(&self) -> Option<Value> {
        self()
    }
}

/// Bridge for pages running outside any host.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBridge;

impl IdentityBridge for NoBridge {
    fn current_user(&self) -> Option<Value> {
        None
    }
}

#[derive(Deserialize)]
struct BridgeContext {
    user: Option<BridgeUser>,
}

#[derive(Deserialize)]
struct BridgeUser {
    username: Option<String>,
    id: Option<Value>,
}

/// Resolve the sender identity. Never fails: an absent or malformed bridge
/// yields an empty identity, which submission validation rejects later.
pub fn resolve_identity(bridge: &impl IdentityBridge) -> Identity {
    let Some(raw) = bridge.current_user() else {
        debug!("No identity bridge available");
        return Identity::default();
    };
    let context: BridgeContext = match serde_json::from_value(raw) {
        Ok(context) => context,
        Err(e) => {
            debug!("Ignoring malformed identity bridge payload: {e}");
            return Identity::default();
        }
    };
    let Some(user) = context.user else {
        debug!("Identity bridge has no current user");
        return Identity::default();
    };

    let id = match user.id {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };
    Identity {
        handle: user.username.as_deref().map(normalize_handle).unwrap_or_default(),
        id,
    }
}
