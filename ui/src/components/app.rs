use dioxus::prelude::*;

use starshop_common::session::OrderSession;
use starshop_common::submit::FormInput;

use super::order_modal::OrderModal;
use super::session_state::session_config;
use super::storefront_view::StorefrontView;

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(OrderSession::new(session_config())));
    use_context_provider(|| Signal::new(FormInput::default()));

    rsx! {
        div { class: "starshop-app",
            header { class: "app-header",
                h1 { "Starshop" }
            }
            main {
                StorefrontView {}
                OrderModal {}
            }
        }
    }
}
