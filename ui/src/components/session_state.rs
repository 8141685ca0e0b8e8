use dioxus::prelude::*;

use starshop_common::config::SessionConfig;
use starshop_common::draft::ItemAttributes;
use starshop_common::session::{OrderSession, Selection};
use starshop_common::submit::FormInput;

use super::host::{clear_proof_input, host_identity, open_contact};

/// Session settings, with compile-time overrides for the backend base URL
/// and the contact link.
pub fn session_config() -> SessionConfig {
    let mut config = SessionConfig::default();
    if let Some(url) = option_env!("STARSHOP_API_URL").filter(|s| !s.is_empty()) {
        config = config.with_base_url(url);
    }
    if let Some(url) = option_env!("STARSHOP_CONTACT_URL").filter(|s| !s.is_empty()) {
        config = config.with_contact_url(url);
    }
    config
}

/// The page's order session.
pub fn use_order_session() -> Signal<OrderSession> {
    use_context::<Signal<OrderSession>>()
}

/// Editable values of the confirmation form.
pub fn use_order_form() -> Signal<FormInput> {
    use_context::<Signal<FormInput>>()
}

/// Handle a click on a storefront card: open the confirmation dialog with
/// a fresh form, or hand custom orders to the contact channel.
pub fn select_item(
    mut session: Signal<OrderSession>,
    mut form: Signal<FormInput>,
    attrs: &ItemAttributes,
) {
    let selection = session.write().select(attrs, &host_identity);
    match selection {
        Selection::Confirm => {
            let view = session.read().modal().clone();
            form.set(FormInput {
                buyer_handle: view.buyer_handle,
                buyer_id: view.buyer_id,
                recipient: view.recipient,
            });
            clear_proof_input();
        }
        Selection::Contact { url } => open_contact(&url),
    }
}
